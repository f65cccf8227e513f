//! Output line formatting

use crate::ast::Record;

/// Printed before the first record
pub const START_BANNER: &str = "--- Processing Shapes ---";
/// Printed after the scan ends, on both normal and aborted exits
pub const END_BANNER: &str = "--- Processing Complete ---";

/// Output configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Digits after the decimal point in area lines
    pub precision: usize,
    /// Print the start/end banners around the scan
    pub banners: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 2,
            banners: true,
        }
    }
}

impl Config {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_banners(mut self, banners: bool) -> Self {
        self.banners = banners;
        self
    }
}

/// Result line for a record, e.g. `Line 2: Rectangle Area: 15.00`
pub fn render_area(record: &Record, area: f64, config: &Config) -> String {
    format!(
        "Line {}: {} Area: {:.*}",
        record.index,
        record.shape.kind().label(),
        config.precision,
        area
    )
}
