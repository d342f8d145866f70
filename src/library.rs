// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::cell::RefCell;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::os::{self, imp};
use crate::Result;

/// The platform capability used by [`Loader`](crate::Loader) to open and close shared libraries.
///
/// `load` never fails loudly: `None` signals failure and the reason is available afterwards
/// through [`last_error`](Backend::last_error). The reason is for display only.
pub trait Backend {
	type Handle;

	/// Attempts to open the shared library at `path`.
	fn load(&self, path: &OsStr) -> Option<Self::Handle>;
	/// Releases a handle previously returned by [`load`](Backend::load).
	fn unload(&self, handle: Self::Handle) -> Result<()>;
	/// Human readable reason for the most recent `load` failure on the calling thread.
	fn last_error(&self) -> String;
}

impl<B: Backend + ?Sized> Backend for &B {
	type Handle = B::Handle;

	#[inline]
	fn load(&self, path: &OsStr) -> Option<Self::Handle> {
		(**self).load(path)
	}
	#[inline]
	fn unload(&self, handle: Self::Handle) -> Result<()> {
		(**self).unload(handle)
	}
	#[inline]
	fn last_error(&self) -> String {
		(**self).last_error()
	}
}

/// An object providing access to an open shared library on the filesystem.
///
/// The handle is owned by whoever received it. It is not closed on drop; release it with
/// [`close`](Library::close) or [`Loader::unload`](crate::Loader::unload).
#[derive(Debug)]
pub struct Library {
	handle: os::Handle,
	path: PathBuf,
}

// internal type is opaque and managed by OS, so it's `Send` safe
unsafe impl Send for Library {}

impl Library {
	/// Opens the shared library at `path`, following the OS loader's own search rules when `path`
	/// is a bare file name.
	///
	/// # Errors
	///
	/// Fails if the OS loader rejects the path.
	pub fn open<P: AsRef<OsStr>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let handle = unsafe { imp::dylib_open(path)? };
		Ok(Self {
			handle,
			path: PathBuf::from(path),
		})
	}

	/// The path this library was opened with.
	#[inline]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Decrements the OS reference count of the library. The library is unmapped once it hits zero.
	///
	/// # Errors
	///
	/// May error depending on system call.
	pub fn close(self) -> Result<()> {
		unsafe { imp::dylib_close(self.handle) }
	}
}

thread_local! {
	static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

/// The operating system's shared library loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct System;

impl Backend for System {
	type Handle = Library;

	fn load(&self, path: &OsStr) -> Option<Library> {
		match Library::open(path) {
			Ok(lib) => Some(lib),
			Err(e) => {
				LAST_ERROR.with(|last| *last.borrow_mut() = e.reason());
				None
			}
		}
	}

	#[inline]
	fn unload(&self, handle: Library) -> Result<()> {
		handle.close()
	}

	fn last_error(&self) -> String {
		LAST_ERROR.with(|last| last.borrow().clone())
	}
}
