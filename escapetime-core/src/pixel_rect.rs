use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Rectangle in canvas pixel space, e.g. one tile of a larger canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering a whole canvas.
    pub fn full_canvas(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Check the rect is non-empty and lies inside a canvas of `canvas_size`.
    pub fn validate_within(&self, canvas_size: (u32, u32)) -> Result<()> {
        let (canvas_width, canvas_height) = canvas_size;
        if canvas_width == 0 || canvas_height == 0 {
            return Err(Error::InvalidPixelRect {
                reason: format!("canvas {}x{} is empty", canvas_width, canvas_height),
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidPixelRect {
                reason: format!("rect {}x{} is empty", self.width, self.height),
            });
        }
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        match (right, bottom) {
            (Some(r), Some(b)) if r <= canvas_width && b <= canvas_height => Ok(()),
            _ => Err(Error::InvalidPixelRect {
                reason: format!(
                    "{:?} exceeds canvas {}x{}",
                    self, canvas_width, canvas_height
                ),
            }),
        }
    }

    /// Absolute canvas coordinates of every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Self {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }
}
