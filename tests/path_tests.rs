use dylocate::*;
use std::path::{Path, MAIN_SEPARATOR};

#[test]
fn test_resolve_without_segment() {
	let path = resolve("/opt/game", None, "libfoo.so");
	assert_eq!(path.to_string(), format!("/opt/game{MAIN_SEPARATOR}libfoo.so"));
}

#[test]
fn test_resolve_with_segment() {
	let path = resolve("/opt/game", Some("basegame"), "ui.so");
	let sep = MAIN_SEPARATOR;
	assert_eq!(path.as_str(), format!("/opt/game{sep}basegame{sep}ui.so"));
	let as_path: &Path = path.as_ref();
	assert_eq!(as_path.file_name().unwrap(), "ui.so");
}

#[test]
fn test_resolve_empty_segment_is_absent() {
	assert_eq!(resolve("/d", Some(""), "a.so"), resolve("/d", None, "a.so"));
}

#[test]
fn test_resolve_rewrites_inner_separators() {
	let sep = MAIN_SEPARATOR;
	let path = resolve("dir", Some("mods/extra\\one"), "lib/a.so");
	assert_eq!(path.as_str(), format!("dir{sep}mods{sep}extra{sep}one{sep}lib{sep}a.so"));
}

#[test]
fn test_resolve_is_deterministic() {
	let a = resolve("/x", Some("g"), "f.so");
	let b = resolve("/x", Some("g"), "f.so");
	assert_eq!(a, b);
	assert_eq!(a.into_path_buf(), b.into_path_buf());
}

#[test]
fn test_paths_equal() {
	assert!(paths_equal("/opt/game", "/opt/game"));
	assert!(paths_equal("/opt/game", "/OPT/Game"));
	assert!(paths_equal("/opt/game/", "/opt/game"));
	assert!(paths_equal("C:\\Games\\Q", "c:/games/q"));
	assert!(paths_equal(".", "."));
	assert!(paths_equal("/", "//"));
	assert!(!paths_equal("/opt/game", "/opt/games"));
	assert!(!paths_equal("/", ""));
	assert!(!paths_equal(".", "/usr/games"));
}
