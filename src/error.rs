// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::path::PathBuf;

/// Failures reported by the platform library backend.
///
/// The search operations on [`Loader`](crate::Loader) never return this type; a failed search is
/// just `None`. It only surfaces through [`Loader::unload`](crate::Loader::unload) and
/// [`Library::close`](crate::Library::close).
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to open `{}`: {reason}", path.display())]
	Open { path: PathBuf, reason: String },
	#[error("failed to close library: {0}")]
	Close(String),
	#[error("library path contains an interior nul byte")]
	Nul,
}

impl Error {
	/// Text suitable for the backend's last-error report.
	pub(crate) fn reason(&self) -> String {
		match self {
			Self::Open { reason, .. } => reason.clone(),
			other => other.to_string(),
		}
	}
}
