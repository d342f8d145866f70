// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use super::Handle;
use crate::error::Error;
use std::os::unix::ffi::OsStrExt;
use std::{ffi, path, ptr};

#[cfg(not(any(target_os = "linux", target_os = "macos", target_env = "gnu")))]
use std::sync;

// `dlerror` is only thread-local on some libcs, everywhere else the loader has to be serialized.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_env = "gnu")))]
#[inline]
fn dylib_guard<'a>() -> sync::MutexGuard<'a, ()> {
	static LOCK: sync::Mutex<()> = sync::Mutex::new(());
	LOCK.lock().unwrap_or_else(sync::PoisonError::into_inner)
}

#[cfg(any(target_os = "linux", target_os = "macos", target_env = "gnu"))]
#[inline(always)]
fn dylib_guard() {}

unsafe fn dylib_error() -> String {
	let msg = libc::dlerror();
	if msg.is_null() {
		String::from("unknown dynamic linker error")
	} else {
		ffi::CStr::from_ptr(msg).to_string_lossy().into_owned()
	}
}

pub(crate) unsafe fn dylib_open(path: &ffi::OsStr) -> Result<Handle, Error> {
	let c_str = ffi::CString::new(path.as_bytes()).map_err(|_| Error::Nul)?;
	let _lock = dylib_guard();
	let _ = libc::dlerror(); // clear existing errors
	let handle = libc::dlopen(c_str.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL);
	ptr::NonNull::new(handle).ok_or_else(|| Error::Open {
		path: path::PathBuf::from(path),
		reason: dylib_error(),
	})
}

pub(crate) unsafe fn dylib_close(lib_handle: Handle) -> Result<(), Error> {
	let _lock = dylib_guard();
	let _ = libc::dlerror(); // clear existing errors
	if libc::dlclose(lib_handle.as_ptr()) != 0 {
		Err(Error::Close(dylib_error()))
	} else {
		Ok(())
	}
}
