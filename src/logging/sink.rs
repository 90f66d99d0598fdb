// SPDX-License-Identifier: Apache-2.0 OR MIT
// File sink with bounded spillover cache
//
// Every finalized record is offered here regardless of the active
// destination. While the file cannot be opened, formatted lines pile up in
// a bounded FIFO cache; the first successful open replays the cache in
// order before writing the current line. One mutex serializes path
// resolution, cache mutation and the file write across all threads.

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Hard cap on cached lines; the oldest line is evicted past this bound
pub const SPILL_CAP: usize = 1000;

pub(crate) struct FileSink {
    state: Mutex<SinkState>,
}

struct SinkState {
    dir: PathBuf,
    ident: String,
    /// Resolved lazily, once; immutable for the process lifetime afterwards
    path: Option<PathBuf>,
    /// False until the first successful write (create mode), true after
    /// (append mode)
    append: bool,
    cache: VecDeque<String>,
}

impl FileSink {
    pub fn new(dir: PathBuf, ident: String) -> Self {
        Self {
            state: Mutex::new(SinkState {
                dir,
                ident,
                path: None,
                append: false,
                cache: VecDeque::new(),
            }),
        }
    }

    /// Offer one formatted line (tag + text, no trailing newline) to the
    /// sink. Never fails: an unwritable file degrades to the cache, and an
    /// over-full cache silently drops its oldest line.
    pub fn offer(&self, line: &str) {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        let path = match &state.path {
            Some(path) => path.clone(),
            None => {
                let path = probe_path(&state.dir, &state.ident);
                state.path = Some(path.clone());
                path
            }
        };

        let mut open = OpenOptions::new();
        if state.append {
            open.append(true);
        } else {
            open.write(true).create(true).truncate(true);
        }

        match open.open(&path) {
            Ok(mut file) => {
                while let Some(cached) = state.cache.pop_front() {
                    let _ = file.write_all(cached.as_bytes());
                }
                let _ = writeln!(file, "{}", line);
                state.append = true;
            }
            Err(_) => {
                state.cache.push_back(format!("{}\n", line));
                if state.cache.len() > SPILL_CAP {
                    state.cache.pop_front();
                }
            }
        }
    }

    /// Number of lines currently cached (for tests and diagnostics)
    pub fn cached(&self) -> usize {
        self.state.lock().unwrap().cache.len()
    }

    /// The resolved file path, if resolution has happened
    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().unwrap().path.clone()
    }
}

/// Pick `<dir>/<ident><N>.txt` for the first `N >= 1` that does not exist
fn probe_path(dir: &Path, ident: &str) -> PathBuf {
    let mut n = 1u32;
    loop {
        let candidate = dir.join(format!("{}{}.txt", ident, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
