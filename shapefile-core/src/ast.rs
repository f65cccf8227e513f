//! Shape record definitions

use crate::geometry::{self, GeometryError};

/// Shape keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
}

impl ShapeKind {
    /// Look up a shape by its exact, case-sensitive keyword
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "square" => Some(ShapeKind::Square),
            "rectangle" => Some(ShapeKind::Rectangle),
            "circle" => Some(ShapeKind::Circle),
            _ => None,
        }
    }

    /// Keyword as written in the input file
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }

    /// Capitalized name used in result lines
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// A shape with its dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Square { side: f64 },
    /// Length then width, in input order
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Compute the area, rejecting non-positive dimensions
    pub fn area(&self) -> Result<f64, GeometryError> {
        match *self {
            Shape::Square { side } => geometry::square_area(side),
            Shape::Rectangle { length, width } => geometry::rectangle_area(length, width),
            Shape::Circle { radius } => geometry::circle_area(radius),
        }
    }
}

/// One record of the scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// 1-based record counter, not a file line number
    pub index: usize,
    pub shape: Shape,
}
