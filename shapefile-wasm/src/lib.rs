//! WebAssembly bindings for shapefile

use shapefile_core::{Config, Shape};
use wasm_bindgen::prelude::*;

/// Process shape records and return the output lines
///
/// # Arguments
/// * `input` - Shape records, e.g. `square 4 circle 2`
///
/// # Returns
/// One result or diagnostic line per record, newline separated
#[wasm_bindgen]
pub fn process(input: &str) -> String {
    run(input, Config::default().with_banners(false))
}

/// Process shape records with a custom number of decimal places
///
/// # Arguments
/// * `input` - Shape records
/// * `precision` - Digits after the decimal point in area lines
#[wasm_bindgen]
pub fn process_with_precision(input: &str, precision: usize) -> String {
    run(
        input,
        Config::default()
            .with_banners(false)
            .with_precision(precision),
    )
}

fn run(input: &str, config: Config) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    if let Err(e) = shapefile_core::process(input, &mut out, &config) {
        return e.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parse shape records and return JSON representation
///
/// # Arguments
/// * `input` - Shape records
///
/// # Returns
/// The parsed records as JSON, or the parse error message
#[wasm_bindgen]
pub fn parse_to_json(input: &str) -> Result<String, String> {
    match shapefile_core::parse(input) {
        Ok(records) => {
            // Simple JSON serialization
            let mut json = String::from(r#"{"records":["#);
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    json.push(',');
                }
                let dims = match record.shape {
                    Shape::Square { side } => format!(r#""side":{}"#, number(side)),
                    Shape::Rectangle { length, width } => format!(
                        r#""length":{},"width":{}"#,
                        number(length),
                        number(width)
                    ),
                    Shape::Circle { radius } => format!(r#""radius":{}"#, number(radius)),
                };
                json.push_str(&format!(
                    r#"{{"index":{},"shape":"{}",{}}}"#,
                    record.index,
                    record.shape.kind().tag(),
                    dims
                ));
            }
            json.push_str("],");

            json.push_str(&format!(r#""recordCount":{}"#, records.len()));
            json.push('}');

            Ok(json)
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// JSON has no NaN or infinity
fn number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "null".to_string()
    }
}
