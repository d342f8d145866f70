// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason

/// Receives the progress and failure lines written while searching.
///
/// Lines are observational only. Search outcomes are carried by return values.
pub trait Diagnostics {
	fn line(&self, msg: &str);
}

impl<F: Fn(&str)> Diagnostics for F {
	#[inline]
	fn line(&self, msg: &str) {
		self(msg)
	}
}

/// Forwards every line to [`tracing`] as an `INFO` event with target `dylocate`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tracing;

impl Diagnostics for Tracing {
	#[inline]
	fn line(&self, msg: &str) {
		tracing::info!(target: "dylocate", "{msg}");
	}
}
