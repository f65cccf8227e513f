//! shapefile-core: reads shape records from a text file and prints their areas
//!
//! # Example
//!
//! ```
//! use shapefile_core::{process, Config};
//!
//! let input = "square 4\nrectangle 3 5\ncircle 2\ntriangle 1 1 1";
//!
//! let mut out = Vec::new();
//! let report = process(input, &mut out, &Config::default()).unwrap();
//! assert_eq!(report.areas.len(), 3);
//! assert!(report.is_aborted());
//! ```
//!
//! # Parsing only
//!
//! ```
//! use shapefile_core::{parse, Shape};
//!
//! let records = parse("circle 2").unwrap();
//! assert_eq!(records[0].shape, Shape::Circle { radius: 2.0 });
//! ```

use std::sync::Once;

pub mod ast;
pub mod file;
pub mod geometry;
pub mod parser;
pub mod processor;
pub mod renderer;

pub use ast::*;
pub use file::{open_for_reading, Acquisition, OpenedFile, Prompt};
pub use geometry::GeometryError;
pub use parser::{parse, ParseError, Scanner};
pub use processor::{process, process_reader, ScanEnd, ScanReport};
pub use renderer::Config;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=shapefile_core=debug`;
/// events go to stderr so stdout stays untouched.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
