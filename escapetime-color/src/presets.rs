//! Named color schemes.

use crate::{ColorMode, GradientStops, Palette};
use escapetime_core::Rgb;

/// A named color mode.
#[derive(Clone, Debug)]
pub struct ColorSchemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub mode: ColorMode,
}

const FIRE: [Rgb; 5] = [
    Rgb::new(255, 255, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 128, 0),
    Rgb::new(200, 0, 0),
    Rgb::new(40, 0, 0),
];

const OCEAN: [Rgb; 4] = [
    Rgb::new(255, 255, 255),
    Rgb::new(64, 192, 255),
    Rgb::new(0, 64, 128),
    Rgb::new(0, 0, 64),
];

// Fast escapes are white; slow ones near the boundary fade to black.
const GRAYSCALE: [Rgb; 2] = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];

/// All built-in presets. The first one is the default.
pub fn presets() -> Vec<ColorSchemePreset> {
    vec![
        ColorSchemePreset {
            id: "rainbow",
            name: "Rainbow",
            mode: ColorMode::cycle(Palette::rainbow()),
        },
        ColorSchemePreset {
            id: "red_blue",
            name: "Red Blue",
            mode: ColorMode::interpolate(GradientStops::red_blue()),
        },
        ColorSchemePreset {
            id: "fire",
            name: "Fire",
            mode: ColorMode::interpolate(GradientStops::from_static(&FIRE)),
        },
        ColorSchemePreset {
            id: "ocean",
            name: "Ocean",
            mode: ColorMode::interpolate(GradientStops::from_static(&OCEAN)),
        },
        ColorSchemePreset {
            id: "grayscale",
            name: "Grayscale",
            mode: ColorMode::interpolate(GradientStops::from_static(&GRAYSCALE)),
        },
    ]
}

/// Look up a preset by id.
pub fn get_preset(id: &str) -> Option<ColorSchemePreset> {
    presets().into_iter().find(|p| p.id == id)
}
