//! Discrete palettes, cycled by integer escape count.

use escapetime_core::{Error, Result, Rgb};
use serde::{Deserialize, Serialize};

/// Default cyclic palette: red, orange, yellow, green, blue, indigo, violet.
pub const RAINBOW: [Rgb; 7] = [
    Rgb::new(0xFF, 0x00, 0x00),
    Rgb::new(0xFF, 0xA5, 0x00),
    Rgb::new(0xFF, 0xFF, 0x00),
    Rgb::new(0x00, 0x80, 0x00),
    Rgb::new(0x00, 0x00, 0xFF),
    Rgb::new(0x4B, 0x00, 0x82),
    Rgb::new(0xEE, 0x82, 0xEE),
];

/// A non-empty, ordered list of colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::rainbow()
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build from `#RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let colors = colors
            .iter()
            .map(|c| Rgb::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    pub fn rainbow() -> Self {
        Self {
            colors: RAINBOW.to_vec(),
        }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Map an escape count to a palette entry.
    ///
    /// `0` is the background. Otherwise counts 1, 2, 3, … walk the palette
    /// from its first entry and wrap around. Fractional values are floored.
    pub fn cycle(&self, value: f64) -> Rgb {
        if value == 0.0 {
            return Rgb::BLACK;
        }
        let len = self.colors.len() as f64;
        let index = (value - 1.0).floor().rem_euclid(len) as usize;
        // NaN and infinities cast to 0 or saturate; keep the index in range.
        self.colors[index.min(self.colors.len() - 1)]
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = Error;

    fn try_from(colors: Vec<Rgb>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// Cyclic palette lookup. See [`Palette::cycle`].
pub fn cycle_color(value: f64, palette: &Palette) -> Rgb {
    palette.cycle(value)
}
