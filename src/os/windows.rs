// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::os::windows::ffi::OsStrExt;
use std::{ffi, io, path, ptr};

use super::Handle;
use crate::error::Error;

mod c;

fn to_wide(path: &ffi::OsStr) -> Vec<u16> {
	path.encode_wide().chain(std::iter::once(0u16)).collect()
}

#[inline]
pub(crate) unsafe fn dylib_open(path: &ffi::OsStr) -> Result<Handle, Error> {
	let wide_str: Vec<u16> = to_wide(path);
	if wide_str[..wide_str.len() - 1].contains(&0) {
		return Err(Error::Nul);
	}
	let handle = c::LoadLibraryExW(wide_str.as_ptr(), ptr::null_mut(), 0);
	ptr::NonNull::new(handle).ok_or_else(|| Error::Open {
		path: path::PathBuf::from(path),
		reason: io::Error::last_os_error().to_string(),
	})
}

#[inline]
pub(crate) unsafe fn dylib_close(lib_handle: Handle) -> Result<(), Error> {
	if c::FreeLibrary(lib_handle.as_ptr()) == 0 {
		Err(Error::Close(io::Error::last_os_error().to_string()))
	} else {
		Ok(())
	}
}
