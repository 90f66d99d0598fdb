//! Property-Based Tests: Prefix Routing
//!
//! Arbitrary lines are fed through `Logger::slot` to check that routing
//! is total (never panics) and that the level-prefix grammar dispatches
//! at the level its prefix names.

use portkit::logging::PlatformLog;
use portkit::{Destination, Level, LogConfig, Logger};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

struct NullPlatform;

impl PlatformLog for NullPlatform {
    fn open(&mut self, _ident: &str) {}
    fn write(&mut self, _level: Level, _text: &str) {}
    fn close(&mut self) {}
}

fn observed_logger() -> (Logger, Arc<Mutex<Vec<(Level, String)>>>) {
    let config = LogConfig {
        root_tag: "prop".to_string(),
        width: 0,
        ident: Some("proptest".to_string()),
        ..Default::default()
    };
    let logger = Logger::with_platform(&config, Box::new(NullPlatform));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    logger.set_destination(
        Destination::Callback(Box::new(move |level, _, text| {
            sink.lock().unwrap().push((level, text.to_string()));
        })),
        true,
    );
    (logger, seen)
}

proptest! {
    /// Routing accepts any line without panicking and leaves the logger
    /// usable afterwards.
    #[test]
    fn test_slot_is_total(lines in proptest::collection::vec("\\PC{0,80}", 0..20)) {
        let (logger, seen) = observed_logger();
        for line in &lines {
            logger.slot(line);
        }
        // The generated lines may have opened a capture session; one
        // finalize always returns the logger to the direct path.
        logger.slot("E:drain");
        logger.slot("E: still routing");
        prop_assert_eq!(seen.lock().unwrap().last().map(|(_, t)| t.clone()),
                        Some("still routing".to_string()));
    }

    /// A level-prefixed line outside a capture dispatches at exactly the
    /// level its prefix names, with the prefix stripped.
    #[test]
    fn test_level_prefix_selects_level(
        prefix in prop::sample::select(vec!['V', 'D', 'I', 'W', 'E', 'F']),
        text in "[ -~]{0,60}",
    ) {
        // A leading ':' in the payload would merge into the prefix grammar.
        prop_assume!(!text.starts_with(':'));
        let (logger, seen) = observed_logger();

        logger.slot(&format!("{}: {}", prefix, text));

        let expected = match prefix {
            'V' => Level::Verbose,
            'D' => Level::Debug,
            'I' => Level::Info,
            'W' => Level::Warn,
            'E' => Level::Error,
            _ => Level::Fatal,
        };
        let records = seen.lock().unwrap();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].0, expected);
        prop_assert_eq!(records[0].1.as_str(), text.as_str());
    }

    /// Append lines without an open capture session are dropped, not
    /// dispatched.
    #[test]
    fn test_append_outside_capture_is_dropped(text in "[ -~]{0,60}") {
        prop_assume!(!text.starts_with(':'));
        let (logger, seen) = observed_logger();

        logger.slot(&format!(":{}", text));
        prop_assert!(seen.lock().unwrap().is_empty());
    }
}
