// SPDX-License-Identifier: Apache-2.0 OR MIT
// Log levels for the pipeline

use serde::{Deserialize, Serialize};

/// Log level (0-5, lower is more verbose; `None` disables output)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Anything goes (often used for usage/help text)
    Verbose = 0,
    /// Program debugging
    Debug = 1,
    /// Runtime state
    Info = 2,
    /// Possible problem, or an expectation not met
    Warn = 3,
    /// An error that should not happen but does not stop the program
    Error = 4,
    /// An error the program cannot continue past
    Fatal = 5,
    /// Not a real level; records at or above this are never dispatched
    None = 6,
}

impl Level {
    /// Get level as u8 (0-6)
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get level name as static string
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::None => "NONE",
        }
    }

    /// Create from u8 value (returns None if invalid)
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Verbose),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Fatal),
            6 => Some(Level::None),
            _ => None,
        }
    }

    /// Create from the single-character routing prefix used by `slot`
    /// (`V`, `D`, `I`, `W`, `E`, `F`)
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            'V' => Some(Level::Verbose),
            'D' => Some(Level::Debug),
            'I' => Some(Level::Info),
            'W' => Some(Level::Warn),
            'E' => Some(Level::Error),
            'F' => Some(Level::Fatal),
            _ => None,
        }
    }

    /// True for the six real levels, false for `None`
    #[inline]
    pub const fn is_dispatchable(self) -> bool {
        (self as u8) < (Level::None as u8)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
