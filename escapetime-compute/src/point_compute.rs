use escapetime_core::{ComplexPoint, Result};

/// Computes a value for a single point of the complex plane.
///
/// This is the lowest-level rendering abstraction: pure computation, no loops.
/// [`PixelRenderer`](crate::PixelRenderer) adds the pixel iteration.
/// Implementations must be pure so callers can evaluate points in any order
/// and from any thread.
pub trait PointComputer {
    type Data: Clone;

    fn compute(&self, point: ComplexPoint) -> Result<Self::Data>;
}
