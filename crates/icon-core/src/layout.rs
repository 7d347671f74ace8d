//! Integer pixel geometry of the microphone glyph
//!
//! All measurements are defined at [`REFERENCE_SIZE`] and scaled linearly,
//! rounding down. Centering offsets use integer division, so at the
//! reference size every shape lands exactly on its constant.

use crate::REFERENCE_SIZE;

const BODY_WIDTH: u32 = 40;
const BODY_HEIGHT: u32 = 80;
const BODY_RADIUS: u32 = 20;
const HANDLE_WIDTH: u32 = 4;
const HANDLE_HEIGHT: u32 = 25;
const BASE_WIDTH: u32 = 20;
const BASE_HEIGHT: u32 = 6;
const BASE_RADIUS: u32 = 3;

/// Axis-aligned pixel span `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x as f32 + self.width as f32 / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y as f32 + self.height as f32 / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Scale a reference-size constant to `edge`, rounding down
fn scaled(constant: u32, edge: u32) -> u32 {
    (u64::from(constant) * u64::from(edge) / u64::from(REFERENCE_SIZE)) as u32
}

/// Offset that centers `extent` inside `available`
fn centered(available: u32, extent: u32) -> u32 {
    available.saturating_sub(extent) / 2
}

/// Computed geometry of the body, handle and base for one edge length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicLayout {
    pub edge_length: u32,
    pub body: Rect,
    pub body_radius: u32,
    pub handle: Rect,
    pub base: Rect,
    pub base_radius: u32,
}

impl MicLayout {
    pub fn for_size(edge_length: u32) -> Self {
        let body_w = scaled(BODY_WIDTH, edge_length);
        let body_h = scaled(BODY_HEIGHT, edge_length);
        let handle_w = scaled(HANDLE_WIDTH, edge_length);
        let handle_h = scaled(HANDLE_HEIGHT, edge_length);
        let base_w = scaled(BASE_WIDTH, edge_length);
        let base_h = scaled(BASE_HEIGHT, edge_length);

        // Body, handle and base stack into one vertically centered column
        let top = centered(edge_length, body_h + handle_h + base_h);

        let body = Rect::new(centered(edge_length, body_w), top, body_w, body_h);
        let handle = Rect::new(
            centered(edge_length, handle_w),
            body.bottom(),
            handle_w,
            handle_h,
        );
        let base = Rect::new(centered(edge_length, base_w), handle.bottom(), base_w, base_h);

        Self {
            edge_length,
            body,
            body_radius: scaled(BODY_RADIUS, edge_length),
            handle,
            base,
            base_radius: scaled(BASE_RADIUS, edge_length),
        }
    }

    pub fn scale(&self) -> f32 {
        self.edge_length as f32 / REFERENCE_SIZE as f32
    }

    /// Top and bottom of the stacked glyph
    pub fn glyph_span(&self) -> (u32, u32) {
        (self.body.y, self.base.bottom())
    }
}

/// One decorative sound-wave arc, in reference-size units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLayout {
    /// Horizontal distance from the body edge to the arc endpoints
    pub gap: f32,
    /// Horizontal distance from the body edge to the arc apex
    pub reach: f32,
    /// Vertical distance from the body center to the arc endpoints
    pub half_height: f32,
    /// Vertical distance from the body center to the curve control points
    pub bulge: f32,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl WaveLayout {
    /// Inner and outer arcs
    pub const WAVES: [WaveLayout; 2] = [
        WaveLayout {
            gap: 8.0,
            reach: 22.0,
            half_height: 16.0,
            bulge: 24.0,
            stroke_width: 3.0,
            opacity: 0.8,
        },
        WaveLayout {
            gap: 16.0,
            reach: 34.0,
            half_height: 24.0,
            bulge: 36.0,
            stroke_width: 2.0,
            opacity: 0.6,
        },
    ];

    pub fn scaled(&self, scale: f32) -> WaveLayout {
        WaveLayout {
            gap: self.gap * scale,
            reach: self.reach * scale,
            half_height: self.half_height * scale,
            bulge: self.bulge * scale,
            stroke_width: self.stroke_width * scale,
            opacity: self.opacity,
        }
    }
}
