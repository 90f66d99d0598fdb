// SPDX-License-Identifier: Apache-2.0 OR MIT
// Platform system log backend
//
// On unix this is the POSIX syslog API via libc. The dispatcher owns the
// backend through the trait so tests can substitute a counting fake.

use super::Level;

/// Output seam for the platform system log
///
/// `open`/`close` are invoked by the dispatcher exactly once per logical
/// transition into/out of the platform destination. A backend that cannot
/// open treats `write` as a no-op; logging is never fatal.
pub trait PlatformLog: Send {
    fn open(&mut self, ident: &str);
    fn write(&mut self, level: Level, text: &str);
    fn close(&mut self);
}

/// The default backend for the target platform
pub fn native() -> Box<dyn PlatformLog> {
    #[cfg(unix)]
    {
        Box::new(Syslog::new())
    }
    #[cfg(not(unix))]
    {
        Box::new(StderrPlatformLog)
    }
}

#[cfg(unix)]
pub use unix::Syslog;

#[cfg(unix)]
mod unix {
    use super::PlatformLog;
    use crate::logging::Level;
    use std::ffi::CString;

    /// POSIX syslog backend
    ///
    /// The ident string must stay alive while the log is open; it is held
    /// here and only replaced after `closelog`.
    pub struct Syslog {
        ident: Option<CString>,
    }

    impl Syslog {
        pub fn new() -> Self {
            Self { ident: None }
        }

        pub(crate) fn priority(level: Level) -> libc::c_int {
            match level {
                Level::Verbose | Level::Debug => libc::LOG_DEBUG,
                Level::Info => libc::LOG_INFO,
                Level::Warn => libc::LOG_WARNING,
                Level::Error => libc::LOG_ERR,
                Level::Fatal | Level::None => libc::LOG_CRIT,
            }
        }
    }

    impl Default for Syslog {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PlatformLog for Syslog {
        fn open(&mut self, ident: &str) {
            if self.ident.is_some() {
                return; // already open
            }
            let Ok(ident) = CString::new(ident) else {
                return;
            };
            unsafe {
                libc::openlog(ident.as_ptr(), libc::LOG_CONS | libc::LOG_PID, libc::LOG_USER);
            }
            self.ident = Some(ident);
        }

        fn write(&mut self, level: Level, text: &str) {
            if self.ident.is_none() {
                return;
            }
            let Ok(text) = CString::new(text) else {
                return; // interior NUL: drop rather than fail
            };
            unsafe {
                libc::syslog(
                    Self::priority(level),
                    c"%s".as_ptr(),
                    text.as_ptr(),
                );
            }
        }

        fn close(&mut self) {
            if self.ident.take().is_some() {
                unsafe { libc::closelog() };
            }
        }
    }
}

/// Fallback backend for platforms without a native system log wrapper
#[cfg(not(unix))]
pub struct StderrPlatformLog;

#[cfg(not(unix))]
impl PlatformLog for StderrPlatformLog {
    fn open(&mut self, _ident: &str) {}

    fn write(&mut self, level: Level, text: &str) {
        eprintln!("[{}] {}", level.as_str(), text);
    }

    fn close(&mut self) {}
}
