// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::{env, fmt};

/// An installation root that libraries may be searched under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Root {
	/// Where the application's data was installed.
	Base,
	/// Per-user writable directory.
	Home,
	/// Inside an application bundle.
	App,
	/// Removable media.
	Cd,
}

impl Root {
	/// Name of the configuration variable holding this root.
	pub const fn var_name(self) -> &'static str {
		match self {
			Self::Base => "base_path",
			Self::Home => "home_path",
			Self::App => "app_path",
			Self::Cd => "cd_path",
		}
	}

	/// Environment variable read by [`SearchRoots::from_env`].
	pub const fn env_var(self) -> &'static str {
		match self {
			Self::Base => "DYLOCATE_BASE_PATH",
			Self::Home => "DYLOCATE_HOME_PATH",
			Self::App => "DYLOCATE_APP_PATH",
			Self::Cd => "DYLOCATE_CD_PATH",
		}
	}
}

impl fmt::Display for Root {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.var_name())
	}
}

#[cfg(target_os = "macos")]
const PLATFORM_ROOTS: &[Root] = &[Root::Base, Root::Home, Root::App, Root::Cd];
#[cfg(not(target_os = "macos"))]
const PLATFORM_ROOTS: &[Root] = &[Root::Base, Root::Home, Root::Cd];

/// The ordered install roots meaningful on this platform.
///
/// Bundle style installs only exist on macOS, so [`Root::App`] is left out everywhere else.
#[inline]
pub const fn platform_roots() -> &'static [Root] {
	PLATFORM_ROOTS
}

/// Read-only configuration consulted by the [`Loader`](crate::Loader).
///
/// Values are opaque strings. `None` and `Some("")` both mean "not configured".
pub trait Config {
	fn root(&self, root: Root) -> Option<String>;
	/// Directory containing the running executable.
	fn binary_dir(&self) -> Option<String>;
}

impl<C: Config + ?Sized> Config for &C {
	#[inline]
	fn root(&self, root: Root) -> Option<String> {
		(**self).root(root)
	}
	#[inline]
	fn binary_dir(&self) -> Option<String> {
		(**self).binary_dir()
	}
}

/// An in-memory [`Config`].
///
/// # Examples
///
/// ```
/// use dylocate::{Config, Root, SearchRoots};
///
/// let roots = SearchRoots::new().base("/opt/game").home("/home/me/.game");
/// assert_eq!(roots.root(Root::Base).as_deref(), Some("/opt/game"));
/// assert_eq!(roots.root(Root::Cd), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchRoots {
	base: Option<String>,
	home: Option<String>,
	app: Option<String>,
	cd: Option<String>,
	binary_dir: Option<String>,
}

impl SearchRoots {
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads every root from its `DYLOCATE_*_PATH` environment variable, and the binary directory
	/// from the location of the current executable. Unset or non-UTF-8 values are left absent.
	pub fn from_env() -> Self {
		let var = |root: Root| env::var(root.env_var()).ok();
		let binary_dir = env::current_exe().ok().and_then(|exe| {
			exe.parent()
				.and_then(|dir| dir.to_str())
				.map(str::to_owned)
		});
		Self {
			base: var(Root::Base),
			home: var(Root::Home),
			app: var(Root::App),
			cd: var(Root::Cd),
			binary_dir,
		}
	}

	pub fn base(mut self, dir: impl Into<String>) -> Self {
		self.base = Some(dir.into());
		self
	}

	pub fn home(mut self, dir: impl Into<String>) -> Self {
		self.home = Some(dir.into());
		self
	}

	pub fn app(mut self, dir: impl Into<String>) -> Self {
		self.app = Some(dir.into());
		self
	}

	pub fn cd(mut self, dir: impl Into<String>) -> Self {
		self.cd = Some(dir.into());
		self
	}

	pub fn with_binary_dir(mut self, dir: impl Into<String>) -> Self {
		self.binary_dir = Some(dir.into());
		self
	}
}

impl Config for SearchRoots {
	fn root(&self, root: Root) -> Option<String> {
		match root {
			Root::Base => self.base.clone(),
			Root::Home => self.home.clone(),
			Root::App => self.app.clone(),
			Root::Cd => self.cd.clone(),
		}
	}

	fn binary_dir(&self) -> Option<String> {
		self.binary_dir.clone()
	}
}
