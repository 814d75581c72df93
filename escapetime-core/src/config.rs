//! Evaluator configuration and per-fractal defaults.
//!
//! Defaults live here so the evaluator's public contract never hardcodes them;
//! callers override `max_iterations` per invocation.

use crate::{Bounds, Error, Result};
use serde::{Deserialize, Serialize};

/// Iteration cap used when the caller does not supply one.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Settings for a single escape-time evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Trades rendering detail for computation cost. Must be positive.
    pub max_iterations: u32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EvaluatorConfig {
    pub fn new(max_iterations: u32) -> Result<Self> {
        let config = Self { max_iterations };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            log::warn!("rejected evaluator config: max_iterations must be positive");
            return Err(Error::NonPositiveIterations);
        }
        Ok(())
    }
}

/// Configuration for a fractal type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Initial viewport handed to the rendering surface
    pub default_bounds: Bounds,
    pub default_max_iterations: u32,
    /// How many times the surface zooms in right after start-up.
    pub initial_zoom_steps: u32,
    /// Scale applied by a single zoom-in or zoom-out step.
    pub zoom_factor: f64,
}

impl FractalConfig {
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig {
            max_iterations: self.default_max_iterations,
        }
    }
}

/// Mandelbrot set configuration.
pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    id: "mandelbrot",
    display_name: "Mandelbrot Set",
    default_bounds: Bounds {
        x_min: -2.0,
        x_max: 2.0,
        y_min: -2.0,
        y_max: 2.0,
    },
    default_max_iterations: DEFAULT_MAX_ITERATIONS,
    initial_zoom_steps: 2,
    zoom_factor: 2.0,
};

/// Look up a fractal configuration by ID.
pub fn get_fractal_config(id: &str) -> Option<&'static FractalConfig> {
    match id {
        "mandelbrot" => Some(&MANDELBROT_CONFIG),
        _ => None,
    }
}
