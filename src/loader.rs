// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::ffi::OsStr;

use crate::config::{platform_roots, Config, Root, SearchRoots};
use crate::diag::{Diagnostics, Tracing};
use crate::library::{Backend, System};
use crate::path::{paths_equal, resolve, CURRENT_DIR};
use crate::Result;

/// Searches ordered candidate locations for a shared library and hands back the first handle
/// that loads.
///
/// Every attempt blocks until the backend answers. A search never fails loudly: if no candidate
/// loads the result is `None`, and deciding whether that is fatal is left to the caller. Handles
/// are never cached, and a returned handle belongs to the caller.
#[derive(Debug)]
pub struct Loader<B, C, D = Tracing> {
	backend: B,
	config: C,
	diag: D,
	roots: Vec<Root>,
}

/// Treats an empty value the same as an absent one.
#[inline]
fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}

impl Loader<System, SearchRoots> {
	/// A loader over the OS backend, configured from the environment.
	///
	/// See [`SearchRoots::from_env`].
	pub fn from_env() -> Self {
		Self::new(System, SearchRoots::from_env())
	}
}

impl<B: Backend, C: Config> Loader<B, C> {
	/// Constructs a loader that reports through [`Tracing`] and searches [`platform_roots`].
	pub fn new(backend: B, config: C) -> Self {
		Self {
			backend,
			config,
			diag: Tracing,
			roots: platform_roots().to_vec(),
		}
	}
}

impl<B, C, D> Loader<B, C, D> {
	/// Replaces the diagnostic sink.
	pub fn with_diagnostics<E: Diagnostics>(self, diag: E) -> Loader<B, C, E> {
		Loader {
			backend: self.backend,
			config: self.config,
			diag,
			roots: self.roots,
		}
	}

	/// Replaces the ordered root list used by [`find_across_roots`](Loader::find_across_roots).
	pub fn with_roots(mut self, roots: impl Into<Vec<Root>>) -> Self {
		self.roots = roots.into();
		self
	}

	#[inline]
	pub fn roots(&self) -> &[Root] {
		&self.roots
	}

	#[inline]
	pub fn backend(&self) -> &B {
		&self.backend
	}

	#[inline]
	pub fn config(&self) -> &C {
		&self.config
	}
}

impl<B: Backend, C: Config, D: Diagnostics> Loader<B, C, D> {
	/// Loads `name`, optionally letting the OS search for it first.
	///
	/// Candidates, in order:
	/// 1. the bare `name`, only if `prefer_system` is set;
	/// 2. `name` next to the running executable;
	/// 3. `name` under the base root, unless that is the same directory as 2.
	///
	/// An unknown binary directory or base root falls back to the current directory. If nothing
	/// loads, a final failure line is reported and `None` is returned.
	pub fn load_prefer_system(&self, name: &str, prefer_system: bool) -> Option<B::Handle> {
		if prefer_system {
			self.diag.line(&format!("Trying to load \"{name}\"..."));
			if let Some(handle) = self.backend.load(OsStr::new(name)) {
				return Some(handle);
			}
		}

		let binary_dir =
			non_empty(self.config.binary_dir()).unwrap_or_else(|| CURRENT_DIR.to_owned());
		if let Some(handle) = self.load_from(name, &binary_dir) {
			return Some(handle);
		}

		let base_dir =
			non_empty(self.config.root(Root::Base)).unwrap_or_else(|| CURRENT_DIR.to_owned());
		if !paths_equal(&binary_dir, &base_dir) {
			if let Some(handle) = self.load_from(name, &base_dir) {
				return Some(handle);
			}
		}

		self.diag.line(&format!("Loading \"{name}\" failed"));
		None
	}

	fn load_from(&self, name: &str, dir: &str) -> Option<B::Handle> {
		self.diag
			.line(&format!("Trying to load \"{name}\" from \"{dir}\"..."));
		let path = resolve(dir, None, name);
		self.backend.load(path.as_ref())
	}

	/// Looks for `segment/file_name` under each configured root in order, returning the first
	/// that loads.
	///
	/// Unconfigured roots are skipped silently. Each failed attempt reports the path and the
	/// backend's error text; exhausting every root adds no further line.
	pub fn find_across_roots(&self, segment: &str, file_name: &str) -> Option<B::Handle> {
		for &root in &self.roots {
			let Some(dir) = non_empty(self.config.root(root)) else {
				continue;
			};
			let path = resolve(&dir, Some(segment), file_name);
			match self.backend.load(path.as_ref()) {
				Some(handle) => return Some(handle),
				None => self.diag.line(&format!(
					"find_across_roots({path}) failed: \"{}\"",
					self.backend.last_error()
				)),
			}
		}
		None
	}

	/// Hands `handle` back to the backend.
	///
	/// # Errors
	///
	/// Whatever the backend reports for the close.
	#[inline]
	pub fn unload(&self, handle: B::Handle) -> Result<()> {
		self.backend.unload(handle)
	}
}
