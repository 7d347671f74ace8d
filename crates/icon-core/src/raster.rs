//! Pixel-grid output for a [`Drawing`]

use crate::color::Color;
use crate::drawing::{Drawing, Point, Shape, Stroke};
use crate::layout::Rect;
use image::{Rgb, RgbImage};

// Polyline points per quadratic segment when flattening strokes
const CURVE_STEPS: usize = 32;

/// Rasterize a drawing into an opaque `size x size` image.
///
/// Filled shapes cover a pixel when the pixel centre is inside them (no
/// anti-aliasing); strokes are blended by distance coverage and opacity.
pub fn rasterize(drawing: &Drawing) -> RgbImage {
    let size = drawing.size;
    let span = 2.0 * size as f32;

    let mut img = RgbImage::from_fn(size, size, |x, y| {
        // Projection of the pixel centre on the top-left to bottom-right diagonal
        let t = (x as f32 + 0.5 + y as f32 + 0.5) / span;
        Rgb(drawing.background.color_at(t).to_array())
    });

    for shape in &drawing.shapes {
        match shape {
            Shape::Rect { rect, color } => fill_rect(&mut img, rect, *color),
            Shape::RoundedRect {
                rect,
                radius,
                color,
            } => fill_rounded_rect(&mut img, rect, *radius, *color),
            Shape::Stroke(stroke) => draw_stroke(&mut img, stroke),
        }
    }

    img
}

fn fill_rect(img: &mut RgbImage, rect: &Rect, color: Color) {
    let x_end = rect.right().min(img.width());
    let y_end = rect.bottom().min(img.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            img.put_pixel(x, y, Rgb(color.to_array()));
        }
    }
}

fn fill_rounded_rect(img: &mut RgbImage, rect: &Rect, radius: u32, color: Color) {
    if rect.is_empty() {
        return;
    }

    let r = radius.min(rect.width / 2).min(rect.height / 2) as f32;
    let (left, top) = (rect.x as f32, rect.y as f32);
    let (right, bottom) = (rect.right() as f32, rect.bottom() as f32);

    let x_end = rect.right().min(img.width());
    let y_end = rect.bottom().min(img.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            // Nearest point of the inner rectangle the corner arcs are centred on
            let qx = px.clamp(left + r, right - r);
            let qy = py.clamp(top + r, bottom - r);
            let (dx, dy) = (px - qx, py - qy);
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, Rgb(color.to_array()));
            }
        }
    }
}

fn draw_stroke(img: &mut RgbImage, stroke: &Stroke) {
    let points = stroke.flatten(CURVE_STEPS);
    let half = stroke.width / 2.0;

    let (min, max) = stroke.bounds();
    let x0 = (min.x - 1.0).floor().max(0.0) as u32;
    let y0 = (min.y - 1.0).floor().max(0.0) as u32;
    let x1 = ((max.x + 1.0).ceil().max(0.0) as u32).min(img.width());
    let y1 = ((max.y + 1.0).ceil().max(0.0) as u32).min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = points
                .windows(2)
                .map(|seg| distance_to_segment(p, seg[0], seg[1]))
                .fold(f32::INFINITY, f32::min);

            let coverage = (half + 0.5 - d).clamp(0.0, 1.0) * stroke.opacity;
            if coverage <= 0.0 {
                continue;
            }

            let under = img.get_pixel(x, y).0;
            let under = Color::rgb(under[0], under[1], under[2]);
            img.put_pixel(x, y, Rgb(under.lerp(stroke.color, coverage).to_array()));
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + abx * t, a.y + aby * t);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
