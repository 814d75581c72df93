use crate::{ComplexPoint, Error, PixelRect, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the complex plane.
///
/// Owned by whoever drives rendering; the evaluator never sees it, it only
/// receives points produced by [`Bounds::pixel_to_point`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    /// The 4×4 square centred on the origin, which contains the whole set.
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 2.0,
            y_min: -2.0,
            y_max: 2.0,
        }
    }
}

impl Bounds {
    /// Create validated bounds. All edges must be finite and `min < max` on both axes.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Bounds of the given size centred on `center`.
    pub fn centered(center: ComplexPoint, width: f64, height: f64) -> Result<Self> {
        Self::new(
            center.x - width / 2.0,
            center.x + width / 2.0,
            center.y - height / 2.0,
            center.y + height / 2.0,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let edges = [self.x_min, self.x_max, self.y_min, self.y_max];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidBounds {
                reason: format!("non-finite edge in {:?}", edges),
            });
        }
        if self.x_min >= self.x_max {
            return Err(Error::InvalidBounds {
                reason: format!("x_min {} >= x_max {}", self.x_min, self.x_max),
            });
        }
        if self.y_min >= self.y_max {
            return Err(Error::InvalidBounds {
                reason: format!("y_min {} >= y_max {}", self.y_min, self.y_max),
            });
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> ComplexPoint {
        ComplexPoint::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn contains(&self, point: ComplexPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Map the centre of canvas pixel `(px, py)` into the plane.
    ///
    /// Pixel rows grow downward while the imaginary axis grows upward, so row 0
    /// lies just below `y_max`.
    pub fn pixel_to_point(&self, px: u32, py: u32, canvas_size: (u32, u32)) -> ComplexPoint {
        let (width, height) = canvas_size;
        let fx = (px as f64 + 0.5) / width as f64;
        let fy = (py as f64 + 0.5) / height as f64;
        ComplexPoint::new(
            self.x_min + self.width() * fx,
            self.y_max - self.height() * fy,
        )
    }

    /// Inverse of [`Bounds::pixel_to_point`], returning fractional pixel coordinates.
    pub fn point_to_pixel(&self, point: ComplexPoint, canvas_size: (u32, u32)) -> (f64, f64) {
        let (width, height) = canvas_size;
        let fx = (point.x - self.x_min) / self.width();
        let fy = (self.y_max - point.y) / self.height();
        (fx * width as f64 - 0.5, fy * height as f64 - 0.5)
    }

    /// The sub-rectangle of the plane covered by `rect` on a canvas of `canvas_size`.
    pub fn sub_bounds(&self, rect: &PixelRect, canvas_size: (u32, u32)) -> Result<Self> {
        let (width, height) = canvas_size;
        let sx = self.width() / width as f64;
        let sy = self.height() / height as f64;
        Self::new(
            self.x_min + rect.x as f64 * sx,
            self.x_min + (rect.x + rect.width) as f64 * sx,
            self.y_max - (rect.y + rect.height) as f64 * sy,
            self.y_max - rect.y as f64 * sy,
        )
    }

    /// Bounds centred on `center` with both dimensions divided by `factor`.
    /// A factor above 1 zooms in.
    pub fn zoomed(&self, center: ComplexPoint, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidZoomFactor { factor });
        }
        Self::centered(center, self.width() / factor, self.height() / factor)
    }
}
