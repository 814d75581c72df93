use crate::PointComputer;
use escapetime_core::{Bounds, PixelRect, Result, Rgb};

/// Wraps a [`PointComputer`], adding pixel iteration over a rectangle of the canvas.
///
/// Single-threaded. Callers wanting parallelism can split the canvas into
/// [`PixelRect`] tiles and render each one independently.
#[derive(Clone, Debug)]
pub struct PixelRenderer<C: PointComputer> {
    computer: C,
}

impl<C: PointComputer> PixelRenderer<C> {
    pub fn new(computer: C) -> Self {
        Self { computer }
    }

    pub fn computer(&self) -> &C {
        &self.computer
    }

    /// Compute one value per pixel of `pixel_rect`, row-major.
    ///
    /// `bounds` is the plane region covered by the whole canvas of `canvas_size`;
    /// `pixel_rect` selects the part of the canvas to render.
    pub fn render(
        &self,
        bounds: &Bounds,
        pixel_rect: PixelRect,
        canvas_size: (u32, u32),
    ) -> Result<Vec<C::Data>> {
        bounds.validate()?;
        pixel_rect.validate_within(canvas_size)?;

        log::debug!(
            "rendering {}x{} px at ({}, {}) of {}x{} canvas",
            pixel_rect.width,
            pixel_rect.height,
            pixel_rect.x,
            pixel_rect.y,
            canvas_size.0,
            canvas_size.1
        );

        let mut data = Vec::with_capacity(pixel_rect.area());
        for (px, py) in pixel_rect.pixels() {
            let point = bounds.pixel_to_point(px, py, canvas_size);
            data.push(self.computer.compute(point)?);
        }
        Ok(data)
    }
}

impl<C: PointComputer<Data = Rgb>> PixelRenderer<C> {
    /// Render straight to RGBA bytes (`width * height * 4`), the layout canvas
    /// image data expects.
    pub fn render_rgba(
        &self,
        bounds: &Bounds,
        pixel_rect: PixelRect,
        canvas_size: (u32, u32),
    ) -> Result<Vec<u8>> {
        let colors = self.render(bounds, pixel_rect, canvas_size)?;
        Ok(colors.into_iter().flat_map(Rgb::to_rgba).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapetime_core::{ComplexPoint, Error};

    struct Quadrant;

    impl PointComputer for Quadrant {
        type Data = Rgb;

        fn compute(&self, point: ComplexPoint) -> Result<Rgb> {
            // Red on the right half, blue on the left.
            Ok(if point.x > 0.0 {
                Rgb::new(255, 0, 0)
            } else {
                Rgb::new(0, 0, 255)
            })
        }
    }

    #[test]
    fn full_canvas_has_one_value_per_pixel() {
        let renderer = PixelRenderer::new(Quadrant);
        let data = renderer
            .render(&Bounds::default(), PixelRect::full_canvas(10, 10), (10, 10))
            .unwrap();
        assert_eq!(data.len(), 100);
        assert_eq!(data[0], Rgb::new(0, 0, 255));
        assert_eq!(data[9], Rgb::new(255, 0, 0));
    }

    #[test]
    fn partial_rect() {
        let renderer = PixelRenderer::new(Quadrant);
        let data = renderer
            .render(&Bounds::default(), PixelRect::new(2, 2, 5, 5), (10, 10))
            .unwrap();
        assert_eq!(data.len(), 25);
    }

    #[test]
    fn rgba_output_is_opaque_and_sized() {
        let renderer = PixelRenderer::new(Quadrant);
        let bytes = renderer
            .render_rgba(&Bounds::default(), PixelRect::full_canvas(4, 3), (4, 3))
            .unwrap();
        assert_eq!(bytes.len(), 4 * 3 * 4);
        assert_eq!(&bytes[0..4], &[0, 0, 255, 255]);
        assert!(bytes.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn rect_outside_canvas_rejected() {
        let renderer = PixelRenderer::new(Quadrant);
        let err = renderer
            .render(&Bounds::default(), PixelRect::new(8, 8, 5, 5), (10, 10))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPixelRect { .. }));
    }

    #[test]
    fn invalid_bounds_rejected() {
        let renderer = PixelRenderer::new(Quadrant);
        let bounds = Bounds {
            x_min: 1.0,
            x_max: -1.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        let err = renderer
            .render(&bounds, PixelRect::full_canvas(2, 2), (2, 2))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { .. }));
    }
}
