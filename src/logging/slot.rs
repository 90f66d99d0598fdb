// SPDX-License-Identifier: Apache-2.0 OR MIT
// Level-prefix routing for printf-style call sites
//
// A formatted line may carry a short routing prefix instead of an explicit
// level argument:
//
//   ""        begin a capture session (restart if one is active)
//   ":rest"   append `rest` to the capture session
//   "::rest"  debug-build-only direct print, bypassing the pipeline
//   "X: rest" dispatch at level X, where X is one of V D I W E F
//   "rest"    append if capturing, else dispatch at the default level

use super::capture;
use super::{Level, Logger};
use std::io::Write;

/// Parsed routing decision for one line
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    BeginCapture,
    Append(&'a str),
    DebugDirect(&'a str),
    Finalize(Level, &'a str),
    Bare(&'a str),
}

pub(crate) fn parse_prefix(line: &str) -> Route<'_> {
    if line.is_empty() {
        return Route::BeginCapture;
    }
    if let Some(rest) = line.strip_prefix("::") {
        // At most one space after the marker is consumed
        return Route::DebugDirect(rest.strip_prefix(' ').unwrap_or(rest));
    }
    if let Some(rest) = line.strip_prefix(':') {
        return Route::Append(rest);
    }

    let mut chars = line.chars();
    if let (Some(c), Some(':')) = (chars.next(), chars.next()) {
        if let Some(level) = Level::from_prefix(c) {
            // Prefix characters are ASCII, so byte indexing is safe here.
            // One space is skipped; more than one keeps the rest as
            // indentation.
            let rest = &line[2..];
            return Route::Finalize(level, rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    Route::Bare(line)
}

impl Logger {
    /// Route one already-formatted line by its prefix (see module docs).
    /// Used by the [`plog!`](crate::plog) macro.
    pub fn slot(&self, line: &str) {
        match parse_prefix(line) {
            Route::BeginCapture => self.begin_capture(),
            Route::Append(rest) => capture::append(rest),
            Route::DebugDirect(rest) => {
                if cfg!(debug_assertions) {
                    print!("{}", rest);
                    let _ = std::io::stdout().flush();
                }
            }
            Route::Finalize(level, rest) => self.finalize(level, format_args!("{}", rest)),
            Route::Bare(rest) => {
                if capture::is_active() {
                    capture::append(rest);
                } else if self.default_level().is_dispatchable() {
                    self.finalize(self.default_level(), format_args!("{}", rest));
                }
            }
        }
    }
}
