//! Piecewise-linear RGB gradients over evenly spaced stops.

use escapetime_core::{Error, Result, Rgb};
use serde::{Deserialize, Serialize};

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Evenly spaced gradient stops. At least two.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct GradientStops {
    stops: Vec<Rgb>,
}

impl Default for GradientStops {
    fn default() -> Self {
        Self::red_blue()
    }
}

impl GradientStops {
    pub fn new(stops: Vec<Rgb>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(Error::TooFewStops { count: stops.len() });
        }
        Ok(Self { stops })
    }

    /// For built-in tables whose length is known at compile time.
    pub(crate) fn from_static(stops: &[Rgb]) -> Self {
        debug_assert!(stops.len() >= 2, "built-in gradient needs 2 stops");
        Self {
            stops: stops.to_vec(),
        }
    }

    pub fn red_blue() -> Self {
        Self::from_static(&[RED, BLUE])
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Never true for constructed stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sample at `t` in `[0, 1]`. See [`sample_gradient`].
    pub fn sample(&self, t: f64) -> Result<Rgb> {
        sample_gradient(t, &self.stops)
    }

    /// Map a raw escape value to a color. See [`interpolate_color`].
    pub fn interpolate(&self, value: f64) -> Result<Rgb> {
        interpolate_color(value, self)
    }
}

impl TryFrom<Vec<Rgb>> for GradientStops {
    type Error = Error;

    fn try_from(stops: Vec<Rgb>) -> Result<Self> {
        Self::new(stops)
    }
}

impl From<GradientStops> for Vec<Rgb> {
    fn from(gradient: GradientStops) -> Self {
        gradient.stops
    }
}

/// Map an escape value in `[1, ∞)` onto the gradient.
///
/// `0` is the background and short-circuits to black. Other values go through
/// `t = 1 / sqrt(value)`, which maps `[1, ∞)` onto `(0, 1]` and spreads out the
/// low escape values where most of the visible detail sits. So `value = 1`
/// lands on the last stop and large values approach the first one.
///
/// Values in `(0, 1)` or negative produce `t` outside `[0, 1]` and are rejected.
pub fn interpolate_color(value: f64, stops: &GradientStops) -> Result<Rgb> {
    if value == 0.0 {
        return Ok(Rgb::BLACK);
    }
    let t = 1.0 / value.sqrt();
    stops.sample(t)
}

/// Linearly map `t` in `[0, 1]` across evenly spaced `stops`.
///
/// With two stops each channel is `floor(lo + t * (hi - lo))`. With more, `t`
/// is scaled onto `N - 1` segments and the pair bounding it is interpolated
/// with the local parameter. `t = 0` uses the first segment.
pub fn sample_gradient(t: f64, stops: &[Rgb]) -> Result<Rgb> {
    if !(0.0..=1.0).contains(&t) {
        return Err(Error::ParameterOutOfRange { value: t });
    }
    match stops.len() {
        0 | 1 => Err(Error::TooFewStops { count: stops.len() }),
        2 => Ok(lerp_pair(t, stops[0], stops[1])),
        n => {
            let last = n - 1;
            let scaled = t * last as f64;
            let upper = if scaled == 0.0 {
                1
            } else {
                (scaled.ceil() as usize).min(last)
            };
            let lower = upper - 1;
            let local = scaled - lower as f64;
            if !(0.0..=1.0).contains(&local) {
                return Err(Error::ParameterOutOfRange { value: local });
            }
            Ok(lerp_pair(local, stops[lower], stops[upper]))
        }
    }
}

fn lerp_pair(t: f64, lo: Rgb, hi: Rgb) -> Rgb {
    let channel = |a: u8, b: u8| {
        let (a, b) = (a as f64, b as f64);
        (a + t * (b - a)).floor() as u8
    };
    Rgb::new(channel(lo.r, hi.r), channel(lo.g, hi.g), channel(lo.b, hi.b))
}
