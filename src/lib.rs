// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Portability toolkit logging: a deferred-capture, prefix-routed
//! logging pipeline with a switchable destination and a spillover file
//! sink.
//!
//! A process builds a [`Logger`] from a [`LogConfig`], then feeds it
//! lines through [`Logger::slot`] or the [`plog!`] macro. Each line's
//! level prefix decides whether it starts a capture session, appends to
//! one, or dispatches a finished record to the active [`Destination`].
//! When an output directory is configured, every dispatched record is
//! also written to a per-process log file that spills to memory while
//! the file is unwritable.

pub mod config;
pub mod logging;

pub use config::{ConfigError, LogConfig};
pub use logging::{Destination, Level, LogCallback, Logger};
