// SPDX-License-Identifier: Apache-2.0 OR MIT
// Destination dispatcher - the single active output sink
//
// Process-wide mutable selector among console, platform log, callback and
// disabled. The state (destination + platform handle) lives behind one
// mutex held across both `select` and `emit`, so a dispatch never observes
// a half-switched backend.

use super::platform::PlatformLog;
use super::record::{self, LogRecord};
use super::Level;
use std::io::Write;
use std::sync::Mutex;

/// User callback destination. Receives the level, the tag (only when the
/// dispatcher is in tag-separate mode, otherwise the tag is already folded
/// into the text) and the record text.
///
/// The callback runs while the dispatcher lock is held: logging from
/// inside the callback deadlocks, as does calling `set_destination`.
pub type LogCallback = Box<dyn Fn(Level, Option<&str>, &str) + Send>;

/// The active output sink kind
pub enum Destination {
    /// Standard output, one line per record (default)
    Console,
    /// Platform system log (syslog on unix)
    Platform,
    /// User callback
    Callback(LogCallback),
    /// Drop everything
    Disabled,
}

impl Destination {
    fn is_platform(&self) -> bool {
        matches!(self, Destination::Platform)
    }
}

impl std::fmt::Debug for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Destination::Console => "Console",
            Destination::Platform => "Platform",
            Destination::Callback(_) => "Callback",
            Destination::Disabled => "Disabled",
        })
    }
}

struct State {
    destination: Destination,
    tag_separate: bool,
    platform: Box<dyn PlatformLog>,
    console: Box<dyn Write + Send>,
}

pub(crate) struct Dispatcher {
    state: Mutex<State>,
}

impl Dispatcher {
    pub fn new(platform: Box<dyn PlatformLog>) -> Self {
        Self {
            state: Mutex::new(State {
                destination: Destination::Console,
                tag_separate: false,
                platform,
                console: Box::new(std::io::stdout()),
            }),
        }
    }

    /// Switch the active destination.
    ///
    /// Platform log resources are opened/closed exactly once per logical
    /// transition: entering `Platform` opens (idempotent on reselection),
    /// leaving it closes. Selecting `Disabled` also resets tag separation.
    pub fn select(&self, destination: Destination, tag_separate: bool, ident: &str) {
        let mut state = self.state.lock().unwrap();
        let was_platform = state.destination.is_platform();

        match (&destination, was_platform) {
            (Destination::Platform, false) => state.platform.open(ident),
            (Destination::Platform, true) => {} // no-op reselection
            (_, true) => state.platform.close(),
            _ => {}
        }

        state.tag_separate = match destination {
            Destination::Disabled => false,
            _ => tag_separate,
        };
        state.destination = destination;
    }

    /// Whether the callback receives the tag as a separate field
    #[cfg(test)]
    pub fn tag_separate(&self) -> bool {
        self.state.lock().unwrap().tag_separate
    }

    /// Redirect console output (tests only)
    #[cfg(test)]
    pub fn set_console_writer(&self, writer: Box<dyn Write + Send>) {
        self.state.lock().unwrap().console = writer;
    }

    /// Write one finalized record to the active destination.
    ///
    /// `direct` marks a record from the direct (non-captured) path; its
    /// tag is folded into the text unless the destination takes the tag
    /// as a separate field. The fold decision and the write share one
    /// lock acquisition, so a record can never come out both folded and
    /// separately tagged when `select` runs concurrently.
    pub fn emit(&self, record: &LogRecord, direct: bool) {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        let folded;
        let text: &str = match (&record.tag, direct && !state.tag_separate) {
            (Some(tag), true) => {
                let mut line = format!("{} {}", tag, record.text);
                record::truncate_line(&mut line);
                folded = line;
                &folded
            }
            _ => &record.text,
        };

        match &state.destination {
            Destination::Console => {
                // Strip a single trailing newline; the console writer
                // appends exactly one.
                let text = text.strip_suffix('\n').unwrap_or(text);
                let _ = writeln!(state.console, "{}", text);
            }
            Destination::Callback(cb) => {
                let tag = if state.tag_separate {
                    record.tag.as_deref()
                } else {
                    None
                };
                cb(record.level, tag, text);
            }
            Destination::Platform => {
                state.platform.write(record.level, text);
            }
            Destination::Disabled => {}
        }
    }
}
