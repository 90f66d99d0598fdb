// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logger pipeline - ties tag layout, capture, dispatch and the file sink
// together and owns the process-wide state

use super::capture::{self, Finalized};
use super::dispatch::{Destination, Dispatcher};
use super::platform::{self, PlatformLog};
use super::record::LogRecord;
use super::sink::FileSink;
use super::tag::TagLayout;
use super::Level;
use crate::config::LogConfig;
use std::fmt;
use std::sync::OnceLock;

/// The logging pipeline
///
/// Free-form formatted statements become bounded records, decorated with
/// the identity tag, dispatched to the single active destination and,
/// independently, offered to the file sink. Dispatch runs synchronously on
/// the caller's thread; there is no drain task.
pub struct Logger {
    layout: TagLayout,
    rendered: OnceLock<String>,
    dispatcher: Dispatcher,
    sink: Option<FileSink>,
    default_level: Level,
    ident: String,
}

impl Logger {
    /// Build a pipeline from configuration with the native platform log
    pub fn new(config: &LogConfig) -> Self {
        Self::with_platform(config, platform::native())
    }

    /// Build a pipeline with an injected platform log backend
    pub fn with_platform(config: &LogConfig, platform: Box<dyn PlatformLog>) -> Self {
        let ident = config.resolved_ident();
        let sink = config
            .output_dir
            .as_ref()
            .map(|dir| FileSink::new(dir.clone(), ident.clone()));

        Self {
            layout: config.tag_layout(),
            rendered: OnceLock::new(),
            dispatcher: Dispatcher::new(platform),
            sink,
            default_level: config.default_level,
            ident,
        }
    }

    /// The rendered identity tag, computed once and cached
    pub fn tag(&self) -> &str {
        self.rendered.get_or_init(|| self.layout.render())
    }

    /// Level used by [`slot`](Self::slot) for lines without a routing
    /// prefix (`Level::None` suppresses them)
    pub fn default_level(&self) -> Level {
        self.default_level
    }

    /// Switch the active destination (see [`Destination`])
    pub fn set_destination(&self, destination: Destination, tag_separate: bool) {
        self.dispatcher.select(destination, tag_separate, &self.ident);
    }

    /// Begin a deferred capture session on the calling thread
    pub fn begin_capture(&self) {
        capture::begin();
    }

    /// Append formatted text to the calling thread's capture session
    pub fn append(&self, args: fmt::Arguments<'_>) {
        capture::append(&fmt::format(args));
    }

    /// Finalize and dispatch one record.
    ///
    /// With an active capture session the formatted text becomes the last
    /// fragment of the accumulated line (an empty session dispatches
    /// nothing). Without one, the text is dispatched directly, prefixed by
    /// the tag unless the destination takes the tag as a separate field.
    pub fn finalize(&self, level: Level, args: fmt::Arguments<'_>) {
        let text = fmt::format(args);
        match capture::finalize(&text) {
            Finalized::Suppressed => {}
            Finalized::Line(line) => {
                if level.is_dispatchable() {
                    self.dispatch(level, &line, false);
                }
            }
            Finalized::Direct => {
                if level.is_dispatchable() {
                    self.dispatch(level, &text, true);
                }
            }
        }
    }

    /// Log with verbose level
    #[inline]
    pub fn verbose(&self, msg: &str) {
        self.finalize(Level::Verbose, format_args!("{}", msg));
    }

    /// Log with debug level
    #[inline]
    pub fn debug(&self, msg: &str) {
        self.finalize(Level::Debug, format_args!("{}", msg));
    }

    /// Log with info level
    #[inline]
    pub fn info(&self, msg: &str) {
        self.finalize(Level::Info, format_args!("{}", msg));
    }

    /// Log with warn level
    #[inline]
    pub fn warn(&self, msg: &str) {
        self.finalize(Level::Warn, format_args!("{}", msg));
    }

    /// Log with error level
    #[inline]
    pub fn error(&self, msg: &str) {
        self.finalize(Level::Error, format_args!("{}", msg));
    }

    /// Log with fatal level
    #[inline]
    pub fn fatal(&self, msg: &str) {
        self.finalize(Level::Fatal, format_args!("{}", msg));
    }

    /// Number of lines waiting in the spillover cache (0 when file output
    /// is disabled)
    pub fn spilled(&self) -> usize {
        self.sink.as_ref().map_or(0, |s| s.cached())
    }

    /// The resolved log file path, once the sink has probed one
    pub fn file_path(&self) -> Option<std::path::PathBuf> {
        self.sink.as_ref().and_then(|s| s.path())
    }

    /// Compose the record, emit it to the destination and offer it to the
    /// file sink. `direct` marks the non-captured path; the dispatcher
    /// decides whether to fold the tag into the text. The file line always
    /// carries the tag exactly once.
    fn dispatch(&self, level: Level, message: &str, direct: bool) {
        let tag = self.tag();
        let record = LogRecord::new(level, Some(tag.to_string()), message.to_string());
        self.dispatcher.emit(&record, direct);

        if let Some(sink) = &self.sink {
            let mut line = record.file_line();
            super::record::truncate_line(&mut line);
            sink.offer(&line);
        }
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide pipeline. The first call wins; later calls
/// return the already-installed instance.
pub fn init_global(config: &LogConfig) -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(config))
}

/// The process-wide pipeline, if one has been installed
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
