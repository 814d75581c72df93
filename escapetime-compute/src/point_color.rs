//! Evaluator and color mapper composed into a per-point color function.

use crate::{EscapeTimeEvaluator, PointComputer};
use escapetime_color::{ColorMode, Colorizer};
use escapetime_core::{ComplexPoint, EvaluatorConfig, Result, Rgb};

/// `point_color(x, y)` as handed to a rendering surface.
#[derive(Clone, Debug, Default)]
pub struct PointColorer {
    evaluator: EscapeTimeEvaluator,
    mode: ColorMode,
}

impl PointColorer {
    pub fn new(evaluator: EscapeTimeEvaluator, mode: ColorMode) -> Self {
        Self { evaluator, mode }
    }

    pub fn from_config(config: &EvaluatorConfig, mode: ColorMode) -> Result<Self> {
        Ok(Self::new(EscapeTimeEvaluator::from_config(config)?, mode))
    }

    pub fn evaluator(&self) -> &EscapeTimeEvaluator {
        &self.evaluator
    }

    pub fn mode(&self) -> &ColorMode {
        &self.mode
    }

    /// Color of `x + yi`. Points that never escape are black.
    pub fn point_color(&self, x: f64, y: f64) -> Result<Rgb> {
        let value = self.evaluator.evaluate(ComplexPoint::new(x, y));
        self.mode.colorize(value)
    }
}

impl PointComputer for PointColorer {
    type Data = Rgb;

    fn compute(&self, point: ComplexPoint) -> Result<Rgb> {
        self.point_color(point.x, point.y)
    }
}
