pub mod mandelbrot;
pub mod pixel_renderer;
pub mod point_color;
pub mod point_compute;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use mandelbrot::{
    evaluate_escape, interior_shortcut, is_in_main_cardioid, is_in_period2_bulb,
    EscapeTimeEvaluator, NO_ESCAPE,
};
pub use pixel_renderer::PixelRenderer;
pub use point_color::PointColorer;
pub use point_compute::PointComputer;
pub use viewport::{NoopZoomHook, Viewport, ZoomHook};

// Re-export core types for convenience
pub use escapetime_core::*;
