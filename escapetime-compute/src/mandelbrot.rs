use crate::PointComputer;
use escapetime_core::{
    ComplexPoint, DiagnosticSink, EscapeSample, EvaluatorConfig, Result, Shortcut,
};
use std::fmt;
use std::sync::Arc;

/// Escape value of a point whose orbit stays bounded.
pub const NO_ESCAPE: f64 = 0.0;

/// |z|² beyond which the orbit is known to diverge (radius 2).
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Extra unconditional iterations after escape, to shrink the smoothing error.
const SMOOTHING_TERMS: u32 = 4;

/// Is `c` inside the main cardioid?
pub fn is_in_main_cardioid(cx: f64, cy: f64) -> bool {
    let x = cx - 0.25;
    let q = x * x + cy * cy;
    q * (q + x) < 0.25 * cy * cy
}

/// Is `c` inside the period-2 bulb, the disc of radius 1/4 around -1?
pub fn is_in_period2_bulb(cx: f64, cy: f64) -> bool {
    let x = cx + 1.0;
    x * x + cy * cy < 1.0 / 16.0
}

/// Which closed-form interior region, if any, contains `c`.
pub fn interior_shortcut(cx: f64, cy: f64) -> Option<Shortcut> {
    if is_in_main_cardioid(cx, cy) {
        Some(Shortcut::MainCardioid)
    } else if is_in_period2_bulb(cx, cy) {
        Some(Shortcut::Period2Bulb)
    } else {
        None
    }
}

/// Escape-time evaluator for z ← z² + c at f64 precision.
///
/// Returns a continuous escape value: `0` when the orbit never leaves the
/// radius-2 disc within `max_iterations`, otherwise a value `>= 1` close to the
/// iteration count at which it left, with a fractional part from the
/// log-log smoothing correction.
///
/// Points in the main cardioid or period-2 bulb are classified without
/// iterating. Points that merely escape slowly are also reported as `0`
/// once the iteration budget runs out.
#[derive(Clone)]
pub struct EscapeTimeEvaluator {
    max_iterations: u32,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl Default for EscapeTimeEvaluator {
    fn default() -> Self {
        Self {
            max_iterations: EvaluatorConfig::default().max_iterations,
            diagnostics: None,
        }
    }
}

impl fmt::Debug for EscapeTimeEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EscapeTimeEvaluator")
            .field("max_iterations", &self.max_iterations)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl EscapeTimeEvaluator {
    /// Fails with `NonPositiveIterations` when `max_iterations` is 0.
    pub fn new(max_iterations: u32) -> Result<Self> {
        Self::from_config(&EvaluatorConfig { max_iterations })
    }

    pub fn from_config(config: &EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_iterations: config.max_iterations,
            diagnostics: None,
        })
    }

    /// Attach a sink that receives a sample for every evaluation.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Escape value at `c`.
    pub fn evaluate(&self, c: ComplexPoint) -> f64 {
        let sample = self.sample(c);
        if let Some(sink) = &self.diagnostics {
            sink.record(&sample);
        }
        sample.value
    }

    /// Evaluate `c` and report how the result was reached.
    pub fn sample(&self, c: ComplexPoint) -> EscapeSample {
        let (cx, cy) = (c.x, c.y);

        if let Some(shortcut) = interior_shortcut(cx, cy) {
            return EscapeSample {
                value: NO_ESCAPE,
                iterations: 0,
                shortcut: Some(shortcut),
            };
        }

        // z starts at c: the first step from z = 0 is already applied.
        let mut zx = cx;
        let mut zy = cy;
        let mut i = 1;

        while i < self.max_iterations {
            let x2 = zx * zx;
            let y2 = zy * zy;
            if x2 + y2 >= ESCAPE_RADIUS_SQ {
                break;
            }
            zy = 2.0 * zx * zy + cy;
            zx = x2 - y2 + cx;
            i += 1;
        }

        if i >= self.max_iterations {
            return EscapeSample {
                value: NO_ESCAPE,
                iterations: i,
                shortcut: None,
            };
        }

        // Continuous escape time, see http://linas.org/art-gallery/escape/escape.html
        for _ in 0..SMOOTHING_TERMS {
            let x2 = zx * zx;
            let y2 = zy * zy;
            zy = 2.0 * zx * zy + cy;
            zx = x2 - y2 + cx;
        }

        EscapeSample {
            value: smooth_escape(i, (zx * zx + zy * zy).sqrt()),
            iterations: i,
            shortcut: None,
        }
    }
}

/// Continuous escape value from the escape iteration and the final |z|
/// after the extra smoothing iterations, clamped to at least 1.
fn smooth_escape(iterations: u32, modulus: f64) -> f64 {
    let nu = modulus.ln().ln() / std::f64::consts::LN_2;
    let normalized = f64::from(iterations) + f64::from(SMOOTHING_TERMS) - nu;
    // f64::max ignores NaN, so an overflowed orbit still reports 1.
    normalized.max(1.0)
}

impl PointComputer for EscapeTimeEvaluator {
    type Data = f64;

    fn compute(&self, point: ComplexPoint) -> Result<f64> {
        Ok(self.evaluate(point))
    }
}

/// Escape value at `x + yi` with an explicit iteration cap.
pub fn evaluate_escape(x: f64, y: f64, max_iterations: u32) -> Result<f64> {
    let evaluator = EscapeTimeEvaluator::new(max_iterations)?;
    Ok(evaluator.evaluate(ComplexPoint::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapetime_core::Error;

    fn eval(x: f64, y: f64) -> f64 {
        EscapeTimeEvaluator::default().evaluate(ComplexPoint::new(x, y))
    }

    #[test]
    fn origin_is_in_set() {
        assert_eq!(eval(0.0, 0.0), NO_ESCAPE);
    }

    #[test]
    fn minus_one_is_in_period2_bulb() {
        assert!(is_in_period2_bulb(-1.0, 0.0));
        assert_eq!(eval(-1.0, 0.0), NO_ESCAPE);
    }

    #[test]
    fn cardioid_and_bulb_predicates() {
        assert!(is_in_main_cardioid(0.0, 0.0));
        assert!(is_in_main_cardioid(-0.5, 0.0));
        assert!(is_in_main_cardioid(0.2, 0.5));
        assert!(is_in_main_cardioid(0.24, 0.0));
        assert!(!is_in_main_cardioid(0.26, 0.0));
        assert!(!is_in_main_cardioid(1.0, 0.0));
        assert!(!is_in_main_cardioid(-1.0, 0.0));

        assert!(is_in_period2_bulb(-1.1, 0.1));
        assert!(!is_in_period2_bulb(-1.3, 0.0));
        assert!(!is_in_period2_bulb(0.0, 0.0));
    }

    #[test]
    fn shortcut_points_do_not_iterate() {
        let evaluator = EscapeTimeEvaluator::default();
        let s = evaluator.sample(ComplexPoint::new(0.0, 0.0));
        assert_eq!(s.shortcut, Some(Shortcut::MainCardioid));
        assert_eq!(s.iterations, 0);

        let s = evaluator.sample(ComplexPoint::new(-1.0, 0.0));
        assert_eq!(s.shortcut, Some(Shortcut::Period2Bulb));
        assert_eq!(s.iterations, 0);
    }

    #[test]
    fn far_point_escapes_on_first_check() {
        let s = EscapeTimeEvaluator::default().sample(ComplexPoint::new(2.0, 2.0));
        assert_eq!(s.iterations, 1);
        assert!(s.value >= 1.0, "value {}", s.value);
    }

    #[test]
    fn smoothing_formula_for_real_axis_point() {
        // c = 2: z = 2, |z|² = 4 escapes at i = 1; then z -> 6, 38, 1446, 2090918.
        let value = eval(2.0, 0.0);
        let expected = 5.0 - (2_090_918.0_f64).ln().ln() / std::f64::consts::LN_2;
        assert!(expected > 1.0);
        assert_eq!(value, expected);
    }

    #[test]
    fn smoothing_handles_iteration_counts_near_u32_max() {
        let value = smooth_escape(u32::MAX, 2_090_918.0);
        let expected =
            f64::from(u32::MAX) + 4.0 - (2_090_918.0_f64).ln().ln() / std::f64::consts::LN_2;
        assert_eq!(value, expected);
        assert!(value > f64::from(u32::MAX));
    }

    #[test]
    fn value_clamped_to_one() {
        // Huge |c| drives the smoothing term far past i + 4.
        assert_eq!(eval(1e10, 0.0), 1.0);
        // Overflow to infinity / NaN still reports an escape.
        assert_eq!(eval(1e200, 1e200), 1.0);
    }

    #[test]
    fn non_shortcut_interior_point_runs_to_limit() {
        // -0.12 + 0.75i sits in the upper period-3 bulb, outside both shortcut regions.
        let evaluator = EscapeTimeEvaluator::new(500).unwrap();
        let s = evaluator.sample(ComplexPoint::new(-0.12, 0.75));
        assert_eq!(s.shortcut, None);
        assert_eq!(s.value, NO_ESCAPE);
        assert_eq!(s.iterations, 500);
    }

    #[test]
    fn boundary_point_escapes_late() {
        // Just above the neck between cardioid and bulb.
        let evaluator = EscapeTimeEvaluator::new(1000).unwrap();
        let s = evaluator.sample(ComplexPoint::new(-0.75, 0.1));
        assert!(s.escaped(), "expected escape, got {:?}", s);
        assert!(s.iterations > 10, "took {} iterations", s.iterations);
    }

    #[test]
    fn max_iterations_of_one_reports_bounded() {
        let evaluator = EscapeTimeEvaluator::new(1).unwrap();
        assert_eq!(evaluator.evaluate(ComplexPoint::new(2.0, 2.0)), NO_ESCAPE);
    }

    #[test]
    fn zero_iterations_rejected() {
        assert_eq!(
            EscapeTimeEvaluator::new(0).unwrap_err(),
            Error::NonPositiveIterations
        );
        assert!(evaluate_escape(0.5, 0.5, 0).is_err());
    }

    #[test]
    fn default_uses_100_iterations() {
        assert_eq!(EscapeTimeEvaluator::default().max_iterations(), 100);
    }
}
