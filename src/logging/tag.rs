// SPDX-License-Identifier: Apache-2.0 OR MIT
// Tag layout engine - renders the fixed identity prefix once per process

/// Overflow marker inserted between the root tag and a truncated module tag
const MARKER: &str = "..";

/// Maximum tag width under the variable-width policy
const VARIABLE_MAX: usize = 128;

/// Width policy for the rendered identity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Fixed width, left-aligned, right-padded with spaces
    FixedLeft(usize),
    /// Fixed width, right-aligned, left-padded with spaces
    FixedRight(usize),
    /// No fixed width; tag capped at 128 characters
    Variable,
}

/// Inputs to the tag rendering, immutable for the process lifetime
///
/// All width arithmetic counts characters. `n` below is the root tag
/// length plus one (the root's logical terminator), matching the layout
/// contract; `m` is the module tag length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLayout {
    pub root: String,
    pub module: String,
    pub policy: WidthPolicy,
    /// Left/right delimiter strings wrapped around the rendered tag
    pub delimiters: (String, String),
}

impl Default for TagLayout {
    fn default() -> Self {
        Self {
            root: String::new(),
            module: String::new(),
            policy: WidthPolicy::FixedRight(24),
            delimiters: ("[".to_string(), "]".to_string()),
        }
    }
}

impl TagLayout {
    pub fn new(root: &str, module: &str, policy: WidthPolicy) -> Self {
        Self {
            root: root.to_string(),
            module: module.to_string(),
            policy,
            ..Default::default()
        }
    }

    /// Render the decorated tag. Pure function of the layout; the pipeline
    /// caches the result in a `OnceLock` so it is computed at most once.
    pub fn render(&self) -> String {
        let body = match self.policy {
            WidthPolicy::FixedLeft(w) => self.render_fixed(w, Align::Left),
            WidthPolicy::FixedRight(w) => self.render_fixed(w, Align::Right),
            WidthPolicy::Variable => self.render_variable(),
        };
        format!("{}{}{}", self.delimiters.0, body, self.delimiters.1)
    }

    fn render_fixed(&self, width: usize, align: Align) -> String {
        let n = count(&self.root) + 1;
        let m = count(&self.module);

        // Root alone overflows: first `width` characters of it, module dropped
        if n > width {
            return head(&self.root, width);
        }

        // Everything fits: pad to exactly `width`
        if n + m <= width + 1 {
            let pad = width + 1 - n - m;
            return match align {
                Align::Left => format!("{}{}{}", self.root, self.module, " ".repeat(pad)),
                Align::Right => format!("{}{}{}", " ".repeat(pad), self.root, self.module),
            };
        }

        // Overflow: root shown in full, marker plus a tail slice of the
        // module sized to fill the remaining width exactly
        let offset = width as isize - 1 - n as isize;
        if offset <= 0 {
            // Degenerate: only part of the marker fits
            let keep = (2 + offset) as usize;
            format!("{}{}", self.root, &MARKER[..keep])
        } else {
            format!("{}{}{}", self.root, MARKER, tail(&self.module, offset as usize))
        }
    }

    fn render_variable(&self) -> String {
        let n = count(&self.root) + 1;
        if n > VARIABLE_MAX {
            head(&self.root, VARIABLE_MAX)
        } else {
            format!("{}{}", self.root, head(&self.module, VARIABLE_MAX + 1 - n))
        }
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

#[inline]
fn count(s: &str) -> usize {
    s.chars().count()
}

/// First `k` characters of `s`
fn head(s: &str, k: usize) -> String {
    s.chars().take(k).collect()
}

/// Last `k` characters of `s`
fn tail(s: &str, k: usize) -> String {
    let len = count(s);
    s.chars().skip(len.saturating_sub(k)).collect()
}
