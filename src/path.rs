// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Directory marker used when a search directory is unknown.
pub const CURRENT_DIR: &str = ".";

/// A directory, optional namespace segment, and file name joined into one platform path.
///
/// Built by [`resolve`]. Purely textual: nothing guarantees the path exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	#[inline]
	pub fn into_path_buf(self) -> PathBuf {
		PathBuf::from(self.0)
	}
}

impl fmt::Display for ResolvedPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<OsStr> for ResolvedPath {
	#[inline]
	fn as_ref(&self) -> &OsStr {
		OsStr::new(&self.0)
	}
}

impl AsRef<Path> for ResolvedPath {
	#[inline]
	fn as_ref(&self) -> &Path {
		Path::new(&self.0)
	}
}

fn push_component(out: &mut String, component: &str) {
	out.push(MAIN_SEPARATOR);
	out.extend(component.chars().map(|c| match c {
		'/' | '\\' => MAIN_SEPARATOR,
		c => c,
	}));
}

/// Joins `dir`, `segment`, and `file_name` with the platform separator.
///
/// `dir` is used verbatim. Separators inside `segment` and `file_name` are rewritten to the
/// platform's own. An empty `segment` is the same as `None`.
///
/// # Examples
///
/// ```
/// use dylocate::resolve;
///
/// let path = resolve("/opt/game", Some("mymod"), "ui.so");
/// # #[cfg(unix)]
/// assert_eq!(path.as_str(), "/opt/game/mymod/ui.so");
/// ```
pub fn resolve(dir: &str, segment: Option<&str>, file_name: &str) -> ResolvedPath {
	let mut out = String::with_capacity(
		dir.len() + segment.map_or(0, str::len) + file_name.len() + 2,
	);
	out.push_str(dir);
	if let Some(segment) = segment.filter(|s| !s.is_empty()) {
		push_component(&mut out, segment);
	}
	push_component(&mut out, file_name);
	ResolvedPath(out)
}

fn trim_separators(path: &str) -> &str {
	let trimmed = path.trim_end_matches(['/', '\\']);
	// keep a lone root intact
	if trimmed.is_empty() && !path.is_empty() {
		&path[..1]
	} else {
		trimmed
	}
}

fn normalized(path: &str) -> impl Iterator<Item = u8> + '_ {
	trim_separators(path).bytes().map(|b| match b {
		b'\\' => b'/',
		b => b.to_ascii_lowercase(),
	})
}

/// Compares two directory strings the way install roots are compared: ASCII case-insensitive,
/// `/` and `\` equivalent, trailing separators ignored.
pub fn paths_equal(a: &str, b: &str) -> bool {
	normalized(a).eq(normalized(b))
}
