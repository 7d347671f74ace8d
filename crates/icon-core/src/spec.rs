use crate::color::Color;
use crate::error::{IconError, IconResult};
use crate::REFERENCE_SIZE;
use serde::{Deserialize, Serialize};

/// One color stop of a linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, 0.0 to 1.0
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Fill behind the glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Background {
    Solid { color: Color },
    /// Diagonal gradient from the top-left to the bottom-right corner
    LinearGradient { stops: Vec<GradientStop> },
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid {
            color: Color::rgb(0x3B, 0x82, 0xF6),
        }
    }
}

impl Background {
    /// The cyan-to-violet gradient used by the decorative icon variant
    pub fn default_gradient() -> Self {
        Background::LinearGradient {
            stops: vec![
                GradientStop::new(0.0, Color::rgb(0x4F, 0xAC, 0xFE)),
                GradientStop::new(0.5, Color::rgb(0x00, 0xF2, 0xFE)),
                GradientStop::new(1.0, Color::rgb(0x66, 0x7E, 0xEA)),
            ],
        }
    }

    pub fn validate(&self) -> IconResult<()> {
        let stops = match self {
            Background::Solid { .. } => return Ok(()),
            Background::LinearGradient { stops } => stops,
        };

        if stops.is_empty() {
            return Err(IconError::InvalidSpec(
                "gradient needs at least one stop".to_string(),
            ));
        }

        let mut previous = 0.0f32;
        for stop in stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(IconError::InvalidSpec(format!(
                    "gradient stop offset {} is outside [0, 1]",
                    stop.offset
                )));
            }
            if stop.offset < previous {
                return Err(IconError::InvalidSpec(format!(
                    "gradient stop offsets must not decrease ({} after {})",
                    stop.offset, previous
                )));
            }
            previous = stop.offset;
        }

        Ok(())
    }

    /// Color at gradient parameter `t` (0 = top-left, 1 = bottom-right)
    pub fn color_at(&self, t: f32) -> Color {
        let stops = match self {
            Background::Solid { color } => return *color,
            Background::LinearGradient { stops } => stops,
        };

        let (first, last) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::rgb(0, 0, 0),
        };

        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }

        last.color
    }
}

/// Parameters of one icon to render
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    edge_length: u32,
    background: Background,
    foreground: Color,
    sound_waves: bool,
}

impl IconSpec {
    /// Build a spec, rejecting non-positive sizes and malformed gradients
    pub fn new(edge_length: i64, background: Background, foreground: Color) -> IconResult<Self> {
        if edge_length <= 0 {
            return Err(IconError::InvalidSpec(format!(
                "edge length must be positive, got {}",
                edge_length
            )));
        }
        let edge_length = u32::try_from(edge_length).map_err(|_| {
            IconError::InvalidSpec(format!("edge length {} is too large", edge_length))
        })?;
        background.validate()?;

        Ok(Self {
            edge_length,
            background,
            foreground,
            sound_waves: false,
        })
    }

    /// Default colors at the given size
    pub fn with_size(edge_length: i64) -> IconResult<Self> {
        Self::new(edge_length, Background::default(), Color::WHITE)
    }

    /// Add the decorative sound-wave arcs beside the mic body
    pub fn with_sound_waves(mut self, enabled: bool) -> Self {
        self.sound_waves = enabled;
        self
    }

    pub fn edge_length(&self) -> u32 {
        self.edge_length
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn sound_waves(&self) -> bool {
        self.sound_waves
    }

    /// Scale factor relative to the reference size
    pub fn scale(&self) -> f32 {
        self.edge_length as f32 / REFERENCE_SIZE as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_non_positive_size() {
        for size in [0, -1, -192] {
            let err = IconSpec::with_size(size).unwrap_err();
            assert!(matches!(err, IconError::InvalidSpec(_)));
        }
    }

    #[test]
    fn test_spec_rejects_oversized_edge() {
        let err = IconSpec::with_size(i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, IconError::InvalidSpec(_)));
    }

    #[test]
    fn test_spec_defaults() {
        let spec = IconSpec::with_size(192).unwrap();
        assert_eq!(spec.edge_length(), 192);
        assert_eq!(spec.foreground(), Color::WHITE);
        assert_eq!(spec.background(), &Background::default());
        assert!(!spec.sound_waves());
        assert!((spec.scale() - 1.0).abs() < f32::EPSILON);

        let waves = spec.with_sound_waves(true);
        assert!(waves.sound_waves());
    }

    #[test]
    fn test_gradient_validation() {
        assert!(Background::default_gradient().validate().is_ok());

        let empty = Background::LinearGradient { stops: vec![] };
        assert!(empty.validate().is_err());

        let out_of_range = Background::LinearGradient {
            stops: vec![GradientStop::new(1.5, Color::WHITE)],
        };
        assert!(out_of_range.validate().is_err());

        let decreasing = Background::LinearGradient {
            stops: vec![
                GradientStop::new(0.6, Color::WHITE),
                GradientStop::new(0.2, Color::WHITE),
            ],
        };
        assert!(IconSpec::new(64, decreasing, Color::WHITE).is_err());
    }

    #[test]
    fn test_gradient_color_at() {
        let bg = Background::default_gradient();
        assert_eq!(bg.color_at(0.0), Color::rgb(0x4F, 0xAC, 0xFE));
        assert_eq!(bg.color_at(0.5), Color::rgb(0x00, 0xF2, 0xFE));
        assert_eq!(bg.color_at(1.0), Color::rgb(0x66, 0x7E, 0xEA));
        // Beyond the ends the edge colors extend
        assert_eq!(bg.color_at(-0.5), Color::rgb(0x4F, 0xAC, 0xFE));
        assert_eq!(bg.color_at(2.0), Color::rgb(0x66, 0x7E, 0xEA));

        let two = Background::LinearGradient {
            stops: vec![
                GradientStop::new(0.0, Color::rgb(0, 0, 0)),
                GradientStop::new(1.0, Color::rgb(200, 200, 200)),
            ],
        };
        assert_eq!(two.color_at(0.25), Color::rgb(50, 50, 50));
    }

    #[test]
    fn test_solid_color_ignores_t() {
        let bg = Background::default();
        assert_eq!(bg.color_at(0.0), bg.color_at(0.9));
    }

    #[test]
    fn test_background_serde_shape() {
        let json = serde_json::to_string(&Background::default()).unwrap();
        assert_eq!(json, r##"{"type":"solid","color":"#3B82F6"}"##);

        let parsed: Background = serde_json::from_str(
            r##"{"type":"linear_gradient","stops":[{"offset":0.0,"color":"#000"},{"offset":1.0,"color":"#fff"}]}"##,
        )
        .unwrap();
        assert_eq!(parsed.color_at(1.0), Color::WHITE);
    }
}
