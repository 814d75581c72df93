//! Colorizer trait and the two mapping modes.

use crate::{GradientStops, Palette};
use escapetime_core::{Result, Rgb};
use serde::{Deserialize, Serialize};

/// Maps a non-negative escape value to a color. `0` is always the background.
pub trait Colorizer {
    fn colorize(&self, value: f64) -> Result<Rgb>;
}

impl Colorizer for Palette {
    fn colorize(&self, value: f64) -> Result<Rgb> {
        Ok(self.cycle(value))
    }
}

impl Colorizer for GradientStops {
    fn colorize(&self, value: f64) -> Result<Rgb> {
        self.interpolate(value)
    }
}

/// Mapping mode with its color table.
/// Uses enum dispatch so the choice can be stored in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorMode {
    /// Discrete palette lookup, cycling every `palette.len()` counts.
    Cycle {
        #[serde(default)]
        palette: Palette,
    },
    /// Continuous gradient through evenly spaced stops.
    Interpolate {
        #[serde(default)]
        stops: GradientStops,
    },
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Cycle {
            palette: Palette::default(),
        }
    }
}

impl ColorMode {
    pub fn cycle(palette: Palette) -> Self {
        Self::Cycle { palette }
    }

    pub fn interpolate(stops: GradientStops) -> Self {
        Self::Interpolate { stops }
    }
}

impl Colorizer for ColorMode {
    fn colorize(&self, value: f64) -> Result<Rgb> {
        match self {
            Self::Cycle { palette } => palette.colorize(value),
            Self::Interpolate { stops } => stops.colorize(value),
        }
    }
}

/// Map an escape value to a color using `mode`.
pub fn map_color(value: f64, mode: &ColorMode) -> Result<Rgb> {
    mode.colorize(value)
}
