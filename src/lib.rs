// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
//! Locates and loads shared libraries by trying an ordered list of candidate directories.
//!
//! Two searches are provided by [`Loader`]:
//!
//! * [`load_prefer_system`](Loader::load_prefer_system) optionally defers to the OS loader, then
//!   falls back to the executable's directory and the configured base root.
//! * [`find_across_roots`](Loader::find_across_roots) walks the configured install roots looking
//!   for a library inside a namespace directory.
//!
//! ```no_run
//! use dylocate::Loader;
//!
//! let loader = Loader::from_env();
//! if let Some(lib) = loader.find_across_roots("basegame", "ui.so") {
//! 	println!("loaded {}", lib.path().display());
//! 	loader.unload(lib).unwrap();
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod diag;
pub mod error;
mod library;
mod loader;
mod os;
pub mod path;

pub use config::{platform_roots, Config, Root, SearchRoots};
pub use diag::{Diagnostics, Tracing};
pub use library::{Backend, Library, System};
pub use loader::Loader;
pub use path::{paths_equal, resolve, ResolvedPath};

/// The result of a dylocate function
pub type Result<T> = std::result::Result<T, error::Error>;
