// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros for convenient logging

/// Format a line and route it by its level prefix
///
/// # Examples
/// ```ignore
/// plog!(logger, "I: listening on {}", addr);   // info record
/// plog!(logger, "");                           // begin capture
/// plog!(logger, ":{} bytes, ", n);             // append to capture
/// plog!(logger, "W: transfer incomplete");     // finalize as warning
/// ```
#[macro_export]
macro_rules! plog {
    ($logger:expr, $($arg:tt)*) => {
        $logger.slot(&format!($($arg)*))
    };
}

/// Log a formatted message with verbose level
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $logger.finalize($crate::logging::Level::Verbose, format_args!($($arg)*))
    };
}

/// Log a formatted message with debug level
///
/// # Examples
/// ```ignore
/// log_debug!(logger, "parsed {} rules", count);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.finalize($crate::logging::Level::Debug, format_args!($($arg)*))
    };
}

/// Log a formatted message with info level
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.finalize($crate::logging::Level::Info, format_args!($($arg)*))
    };
}

/// Log a formatted message with warn level
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.finalize($crate::logging::Level::Warn, format_args!($($arg)*))
    };
}

/// Log a formatted message with error level
///
/// # Examples
/// ```ignore
/// log_error!(logger, "failed to bind {}: {}", addr, err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.finalize($crate::logging::Level::Error, format_args!($($arg)*))
    };
}

/// Log a formatted message with fatal level
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.finalize($crate::logging::Level::Fatal, format_args!($($arg)*))
    };
}
