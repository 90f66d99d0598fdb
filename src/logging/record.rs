// SPDX-License-Identifier: Apache-2.0 OR MIT
// Finalized log record and line limits

use super::Level;

/// Maximum length of a single log line in bytes. Anything longer is
/// silently truncated at a character boundary.
pub const LINE_MAX: usize = 2048;

/// One finalized, dispatch-ready log line
///
/// Created at finalize time, read-only afterwards. Consumed by exactly one
/// destination write and, independently, by the file sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    /// Rendered identity tag; absent when the pipeline has no tag
    pub tag: Option<String>,
    pub text: String,
}

impl LogRecord {
    /// Create a record, truncating `text` to [`LINE_MAX`]
    pub fn new(level: Level, tag: Option<String>, text: String) -> Self {
        let mut text = text;
        truncate_line(&mut text);
        Self { level, tag, text }
    }

    /// The line as it appears in the file sink: `"<tag> <text>"`
    pub fn file_line(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} {}", tag, self.text),
            None => self.text.clone(),
        }
    }
}

/// Truncate a string to [`LINE_MAX`] bytes without splitting a character
pub fn truncate_line(text: &mut String) {
    if text.len() <= LINE_MAX {
        return;
    }
    let mut end = LINE_MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
