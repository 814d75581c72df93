//! Current view of the plane, with a hook that runs before every zoom.

use escapetime_core::{Bounds, ComplexPoint, Error, FractalConfig, Result};

/// Called before the viewport's bounds change, e.g. to drop cached
/// escape values for the old view. The evaluator itself caches nothing.
pub trait ZoomHook {
    fn before_zoom(&mut self, current: &Bounds, next: &Bounds);
}

/// Ignores zoom events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopZoomHook;

impl ZoomHook for NoopZoomHook {
    fn before_zoom(&mut self, _current: &Bounds, _next: &Bounds) {}
}

#[derive(Clone, Debug)]
pub struct Viewport<H: ZoomHook = NoopZoomHook> {
    initial: Bounds,
    bounds: Bounds,
    zoom_factor: f64,
    hook: H,
}

impl<H: ZoomHook> Viewport<H> {
    /// `zoom_factor` is the scale of one `zoom_in`/`zoom_out` step.
    pub fn new(bounds: Bounds, zoom_factor: f64, hook: H) -> Result<Self> {
        bounds.validate()?;
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(Error::InvalidZoomFactor {
                factor: zoom_factor,
            });
        }
        Ok(Self {
            initial: bounds,
            bounds,
            zoom_factor,
            hook,
        })
    }

    /// Viewport at the fractal's default bounds, after its start-up zoom steps.
    pub fn from_config(config: &FractalConfig, hook: H) -> Result<Self> {
        let mut viewport = Self::new(config.default_bounds, config.zoom_factor, hook)?;
        for _ in 0..config.initial_zoom_steps {
            viewport.zoom_in()?;
        }
        Ok(viewport)
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    pub fn into_hook(self) -> H {
        self.hook
    }

    /// Magnification relative to the initial bounds.
    pub fn zoom(&self) -> f64 {
        self.initial.width() / self.bounds.width()
    }

    pub fn zoom_in(&mut self) -> Result<()> {
        let center = self.bounds.center();
        self.zoom_at(center, self.zoom_factor)
    }

    pub fn zoom_out(&mut self) -> Result<()> {
        let center = self.bounds.center();
        self.zoom_at(center, 1.0 / self.zoom_factor)
    }

    /// Re-centre on `center` and scale by `factor` (above 1 zooms in).
    /// On error the bounds are left unchanged and the hook is not called.
    pub fn zoom_at(&mut self, center: ComplexPoint, factor: f64) -> Result<()> {
        let next = self.bounds.zoomed(center, factor)?;
        self.transition(next);
        Ok(())
    }

    /// Return to the initial bounds.
    pub fn reset(&mut self) {
        let initial = self.initial;
        self.transition(initial);
    }

    fn transition(&mut self, next: Bounds) {
        self.hook.before_zoom(&self.bounds, &next);
        log::debug!("zoom {:?} -> {:?}", self.bounds, next);
        self.bounds = next;
    }
}
