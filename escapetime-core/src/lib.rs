pub mod bounds;
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod pixel_rect;
pub mod point;

pub use bounds::Bounds;
pub use color::Rgb;
pub use config::{
    get_fractal_config, EvaluatorConfig, FractalConfig, DEFAULT_MAX_ITERATIONS, MANDELBROT_CONFIG,
};
pub use diagnostics::{DiagnosticSink, EscapeSample, NoopSink, Shortcut, ThrottledLogSink};
pub use error::{Error, ErrorKind, Result};
pub use pixel_rect::PixelRect;
pub use point::ComplexPoint;
