//! Error types for icon rendering.

use thiserror::Error;

/// Errors raised while building or rendering an icon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    /// The requested icon parameters cannot be rendered.
    #[error("invalid icon spec: {0}")]
    InvalidSpec(String),

    /// A color string is not `#RGB` or `#RRGGBB` hex.
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;
