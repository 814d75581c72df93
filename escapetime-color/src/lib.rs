//! Escape value to color mapping.
//!
//! Two modes share the domain `[0, ∞)`, with `0` reserved for points that never
//! escape and always drawn as [`Rgb::BLACK`]:
//! - [`cycle_color`] walks a discrete [`Palette`], one entry per whole count.
//! - [`interpolate_color`] walks a piecewise-linear [`GradientStops`] ramp.
//!
//! Everything here is a pure function of its inputs; built-in tables are
//! constants and safe to share across threads.

pub mod colorizer;
pub mod gradient;
pub mod palette;
pub mod presets;

pub use colorizer::{map_color, ColorMode, Colorizer};
pub use gradient::{interpolate_color, sample_gradient, GradientStops};
pub use palette::{cycle_color, Palette, RAINBOW};
pub use presets::{get_preset, presets, ColorSchemePreset};

pub use escapetime_core::Rgb;
