//! Resolution-exact vector description of a rendered icon
//!
//! A [`Drawing`] is what every output encoder consumes: the PNG path
//! rasterizes it, the SVG and HTML paths serialize it.

use crate::color::Color;
use crate::layout::Rect;
use crate::spec::Background;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Quadratic Bézier segment continuing from the previous point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub control: Point,
    pub to: Point,
}

/// Open stroked path made of quadratic segments
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub start: Point,
    pub segments: Vec<QuadSegment>,
    pub width: f32,
    pub color: Color,
    pub opacity: f32,
}

impl Stroke {
    /// Approximate the path as a polyline with `steps` points per segment
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(1 + self.segments.len() * steps);
        points.push(self.start);

        let mut from = self.start;
        for segment in &self.segments {
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                let u = 1.0 - t;
                points.push(Point::new(
                    u * u * from.x + 2.0 * u * t * segment.control.x + t * t * segment.to.x,
                    u * u * from.y + 2.0 * u * t * segment.control.y + t * t * segment.to.y,
                ));
            }
            from = segment.to;
        }

        points
    }

    /// Bounding box of the path's control polygon, widened by half the stroke width.
    /// The curve itself always lies inside it.
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = self.start;
        let mut max = self.start;
        for p in self
            .segments
            .iter()
            .flat_map(|segment| [segment.control, segment.to])
        {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }

        let half = self.width / 2.0;
        (
            Point::new(min.x - half, min.y - half),
            Point::new(max.x + half, max.y + half),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, color: Color },
    RoundedRect { rect: Rect, radius: u32, color: Color },
    Stroke(Stroke),
}

/// A square icon: background plus shapes in back-to-front order
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub size: u32,
    pub background: Background,
    pub shapes: Vec<Shape>,
}
