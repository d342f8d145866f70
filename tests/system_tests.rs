#![cfg(unix)]

use dylocate::*;
use std::cell::RefCell;
use std::ffi::OsStr;

#[test]
fn test_missing_library_reports_error() {
	let dir = tempfile::tempdir().unwrap();
	let base = dir.path().to_str().unwrap();
	let lines = RefCell::new(Vec::new());
	let loader = Loader::new(System, SearchRoots::new().base(base))
		.with_roots([Root::Base])
		.with_diagnostics(|m: &str| lines.borrow_mut().push(m.to_owned()));

	assert!(loader.find_across_roots("basegame", "missing.so").is_none());
	assert!(!System.last_error().is_empty());

	let path = resolve(base, Some("basegame"), "missing.so");
	let lines = lines.borrow();
	assert_eq!(lines.len(), 1);
	assert!(lines[0].contains(path.as_str()));
}

#[test]
fn test_library_open_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nothing.so");
	match Library::open(&path) {
		Ok(_) => panic!("opened a file that does not exist"),
		Err(e) => assert!(matches!(e, error::Error::Open { .. }), "{e}"),
	}
}

#[test]
fn test_interior_nul() {
	assert!(System.load(OsStr::new("lib\0foo.so")).is_none());
	assert_eq!(System.last_error(), error::Error::Nul.to_string());
}

#[test]
fn test_default_sink() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	let dir = tempfile::tempdir().unwrap();
	let loader = Loader::new(System, SearchRoots::new().with_binary_dir(dir.path().to_str().unwrap()));
	assert!(loader.load_prefer_system("dylocate-missing.so", false).is_none());
}

#[cfg(target_os = "linux")]
#[test]
fn test_linux_system_libc() {
	let lines = RefCell::new(Vec::new());
	let loader = Loader::new(System, SearchRoots::new())
		.with_diagnostics(|m: &str| lines.borrow_mut().push(m.to_owned()));

	let lib = loader.load_prefer_system("libc.so.6", true).unwrap();
	assert_eq!(lib.path(), std::path::Path::new("libc.so.6"));
	assert_eq!(*lines.borrow(), ["Trying to load \"libc.so.6\"..."]);
	loader.unload(lib).unwrap();
}
