use serde::{Deserialize, Serialize};

/// A point `c = x + yi` in the complex plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexPoint {
    pub x: f64,
    pub y: f64,
}

impl ComplexPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ComplexPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
