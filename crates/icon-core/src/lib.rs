//! Microphone glyph renderer for app icons
//!
//! This crate maps an [`IconSpec`] to a [`Drawing`], a resolution-exact
//! vector description of the glyph, and (with the `raster` feature)
//! turns that description into a pixel grid.

mod color;
mod drawing;
mod error;
mod layout;
#[cfg(feature = "raster")]
mod raster;
mod render;
mod spec;

pub use color::Color;
pub use drawing::{Drawing, Point, QuadSegment, Shape, Stroke};
pub use error::{IconError, IconResult};
pub use layout::{MicLayout, Rect, WaveLayout};
#[cfg(feature = "raster")]
pub use raster::rasterize;
pub use render::render;
pub use spec::{Background, GradientStop, IconSpec};

/// Edge length at which the glyph constants apply unscaled
pub const REFERENCE_SIZE: u32 = 192;
