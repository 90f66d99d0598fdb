// SPDX-License-Identifier: Apache-2.0 OR MIT
// Per-thread deferred capture buffer
//
// A capture session lets several formatting calls accumulate into one
// pending line before the record is finalized and dispatched. The state is
// thread-local: no locking, no cross-thread visibility.

use super::record::LINE_MAX;
use std::cell::RefCell;

thread_local! {
    static CAPTURE: RefCell<CaptureState> = RefCell::new(CaptureState::new());
}

/// Outcome of finalizing the current thread's capture session
#[derive(Debug, PartialEq, Eq)]
pub enum Finalized {
    /// No session was active; the caller formats and dispatches directly
    Direct,
    /// A session was active but empty; nothing is dispatched
    Suppressed,
    /// The accumulated line (final text already appended), ready to dispatch
    Line(String),
}

struct CaptureState {
    active: bool,
    buf: String,
}

impl CaptureState {
    const fn new() -> Self {
        Self {
            active: false,
            buf: String::new(),
        }
    }
}

/// Begin a capture session on the calling thread, discarding any prior
/// uncommitted content. Re-entrant: a second begin restarts from empty.
pub fn begin() {
    CAPTURE.with(|c| {
        let mut c = c.borrow_mut();
        c.active = true;
        c.buf.clear();
    });
}

/// True if a capture session is active on the calling thread
pub fn is_active() -> bool {
    CAPTURE.with(|c| c.borrow().active)
}

/// Append text to the capture buffer, implicitly beginning a session if
/// none is active. Once the buffer is full further appends are dropped
/// with a one-line diagnostic on stderr (not routed through the pipeline).
pub fn append(text: &str) {
    CAPTURE.with(|c| {
        let mut c = c.borrow_mut();
        c.active = true;
        if c.buf.len() >= LINE_MAX - 1 {
            eprintln!("log capture buffer full, ignoring log content");
            return;
        }
        let room = LINE_MAX - c.buf.len();
        if text.len() <= room {
            c.buf.push_str(text);
        } else {
            let mut end = room;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            c.buf.push_str(&text[..end]);
        }
    });
}

/// Finalize the current session with `text` as the last fragment.
///
/// With no active session this is a direct dispatch. With an active but
/// empty session the whole record is suppressed, `text` included; the
/// session returns to idle either way.
pub fn finalize(text: &str) -> Finalized {
    CAPTURE.with(|c| {
        let mut c = c.borrow_mut();
        if !c.active {
            return Finalized::Direct;
        }
        c.active = false;
        if c.buf.is_empty() {
            return Finalized::Suppressed;
        }
        let mut line = std::mem::take(&mut c.buf);
        line.push_str(text);
        Finalized::Line(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_when_idle() {
        assert!(!is_active());
        assert_eq!(finalize("tail"), Finalized::Direct);
    }

    #[test]
    fn test_accumulation() {
        begin();
        append("a");
        append("b");
        assert_eq!(finalize("c"), Finalized::Line("abc".to_string()));
        assert!(!is_active());
    }

    #[test]
    fn test_empty_session_suppressed() {
        begin();
        assert_eq!(finalize("discarded too"), Finalized::Suppressed);
        assert!(!is_active());
        // Back to idle: the next finalize is direct
        assert_eq!(finalize("x"), Finalized::Direct);
    }

    #[test]
    fn test_begin_restarts() {
        begin();
        append("stale");
        begin();
        append("fresh");
        assert_eq!(finalize("!"), Finalized::Line("fresh!".to_string()));
    }

    #[test]
    fn test_append_implicitly_begins() {
        assert!(!is_active());
        append("implicit");
        assert!(is_active());
        assert_eq!(finalize(""), Finalized::Line("implicit".to_string()));
    }

    #[test]
    fn test_overflow_drops_excess() {
        begin();
        append(&"x".repeat(LINE_MAX + 500));
        // Buffer is full; further appends are dropped entirely
        append("dropped");
        match finalize("") {
            Finalized::Line(line) => {
                assert_eq!(line.len(), LINE_MAX);
                assert!(line.chars().all(|c| c == 'x'));
            }
            other => panic!("expected line, got {:?}", other),
        }
    }
}
