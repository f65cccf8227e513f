//! Area formulas

use std::f64::consts::PI;

/// Invalid dimension passed to an area formula
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Error: {dimension} must be positive, got {value}")]
    NonPositive { dimension: &'static str, value: f64 },
}

fn positive(dimension: &'static str, value: f64) -> Result<f64, GeometryError> {
    // NaN fails this comparison too
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { dimension, value })
    }
}

pub fn square_area(side: f64) -> Result<f64, GeometryError> {
    let side = positive("Side length", side)?;
    Ok(side * side)
}

pub fn rectangle_area(length: f64, width: f64) -> Result<f64, GeometryError> {
    let length = positive("Length", length)?;
    let width = positive("Width", width)?;
    Ok(length * width)
}

pub fn circle_area(radius: f64) -> Result<f64, GeometryError> {
    let radius = positive("Radius", radius)?;
    Ok(PI * radius * radius)
}
