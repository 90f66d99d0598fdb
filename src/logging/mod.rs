// Deferred-capture logging pipeline
//
// A line enters through `Logger::slot` (or the `plog!` macro), is routed by
// its level prefix, optionally accumulated in a per-thread capture buffer,
// tagged, and handed to the active destination. Every dispatched record is
// also offered to the file sink, which spills to an in-memory cache while
// the log file is unwritable and replays it once writes succeed again.

mod capture;
mod dispatch;
mod level;
mod logger;
#[macro_use]
mod macros;
mod platform;
mod record;
mod sink;
mod slot;
mod tag;

// Public exports
pub use dispatch::{Destination, LogCallback};
pub use level::Level;
pub use logger::{global, init_global, Logger};
pub use platform::{native, PlatformLog};
pub use record::{LogRecord, LINE_MAX};
pub use sink::SPILL_CAP;
pub use tag::{TagLayout, WidthPolicy};
