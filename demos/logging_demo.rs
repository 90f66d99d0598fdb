// Example demonstrating the portkit logging pipeline
//
// Run with: cargo run --example logging_demo

use portkit::logging::Destination;
use portkit::{log_info, log_warn, plog, LogConfig, Logger};

fn main() {
    println!("=== portkit Logging Demo ===\n");

    let config = LogConfig {
        root_tag: "DEMO".to_string(),
        module_tag: "main".to_string(),
        width: -12,
        default_level: portkit::Level::Info,
        ident: Some("logging_demo".to_string()),
        output_dir: Some(std::env::temp_dir()),
        ..Default::default()
    };
    let logger = Logger::new(&config);

    println!("1. Direct records through the console destination:");
    logger.set_destination(Destination::Console, true);
    log_info!(logger, "demo starting, tag is {}", logger.tag());
    log_warn!(logger, "this one is a warning");

    println!("\n2. A capture session assembled from fragments:");
    plog!(logger, ""); // begin capture
    plog!(logger, ":{} files, ", 3);
    plog!(logger, ":{} bytes, ", 4096);
    plog!(logger, "I: transfer complete"); // finalize at info

    println!("\n3. Bare lines use the configured default level:");
    plog!(logger, "no prefix needed");

    println!("\n4. Switching to a callback destination:");
    logger.set_destination(
        Destination::Callback(Box::new(|level, tag, text| {
            println!("  callback saw [{}] {} {}", level, tag.unwrap_or("-"), text);
        })),
        true,
    );
    log_info!(logger, "routed through the callback");

    if let Some(path) = logger.file_path() {
        println!("\nLog file: {}", path.display());
    }
}
