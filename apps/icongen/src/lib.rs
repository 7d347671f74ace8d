//! Icon asset generator for the web app manifest
//!
//! Renders the microphone glyph at each configured size and writes PNG
//! rasters, SVG markup and HTML canvas generators into the output directory.

pub mod capability;
pub mod config;
pub mod encoder;
pub mod generator;

pub use capability::Capabilities;
pub use config::{Config, IconTarget};
pub use encoder::OutputFormat;
pub use generator::{generate, Report};
