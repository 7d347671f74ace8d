use crate::drawing::{Drawing, Point, QuadSegment, Shape, Stroke};
use crate::layout::{MicLayout, Rect, WaveLayout};
use crate::spec::IconSpec;

/// Map a spec to the drawing of the microphone glyph at its edge length.
///
/// Pure and deterministic. Sizes below about 16 px can collapse the handle
/// or base to zero width; such shapes are kept and simply cover no pixels.
pub fn render(spec: &IconSpec) -> Drawing {
    let layout = MicLayout::for_size(spec.edge_length());
    let fg = spec.foreground();

    let mut shapes = vec![
        Shape::RoundedRect {
            rect: layout.body,
            radius: layout.body_radius,
            color: fg,
        },
        Shape::Rect {
            rect: layout.handle,
            color: fg,
        },
        Shape::RoundedRect {
            rect: layout.base,
            radius: layout.base_radius,
            color: fg,
        },
    ];

    if spec.sound_waves() {
        for wave in WaveLayout::WAVES {
            let wave = wave.scaled(layout.scale());
            for side in [Side::Left, Side::Right] {
                shapes.push(Shape::Stroke(wave_stroke(&layout.body, &wave, side, spec)));
            }
        }
    }

    Drawing {
        size: spec.edge_length(),
        background: spec.background().clone(),
        shapes,
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Arc bowing away from the body: endpoints near the body, apex at `reach`
fn wave_stroke(body: &Rect, wave: &WaveLayout, side: Side, spec: &IconSpec) -> Stroke {
    let (edge, dir) = match side {
        Side::Left => (body.x as f32, -1.0),
        Side::Right => (body.right() as f32, 1.0),
    };
    let cy = body.center_y();
    let near = edge + dir * wave.gap;
    let far = edge + dir * wave.reach;

    Stroke {
        start: Point::new(near, cy - wave.half_height),
        segments: vec![
            QuadSegment {
                control: Point::new(far, cy - wave.bulge),
                to: Point::new(far, cy),
            },
            QuadSegment {
                control: Point::new(far, cy + wave.bulge),
                to: Point::new(near, cy + wave.half_height),
            },
        ],
        width: wave.stroke_width,
        color: spec.foreground(),
        opacity: wave.opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::spec::Background;

    #[test]
    fn test_render_plain_glyph() {
        let spec = IconSpec::with_size(192).unwrap();
        let drawing = render(&spec);

        assert_eq!(drawing.size, 192);
        assert_eq!(drawing.background, Background::default());
        assert_eq!(drawing.shapes.len(), 3);
        assert_eq!(
            drawing.shapes[0],
            Shape::RoundedRect {
                rect: Rect::new(76, 40, 40, 80),
                radius: 20,
                color: Color::WHITE,
            }
        );
        assert!(matches!(drawing.shapes[1], Shape::Rect { .. }));
        assert!(matches!(
            drawing.shapes[2],
            Shape::RoundedRect { radius: 3, .. }
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec = IconSpec::new(144, Background::default_gradient(), Color::WHITE)
            .unwrap()
            .with_sound_waves(true);
        assert_eq!(render(&spec), render(&spec));
    }

    #[test]
    fn test_render_uses_foreground_color() {
        let red = Color::rgb(0xDD, 0x33, 0x33);
        let spec = IconSpec::new(64, Background::default(), red).unwrap();
        for shape in render(&spec).shapes {
            match shape {
                Shape::Rect { color, .. } | Shape::RoundedRect { color, .. } => {
                    assert_eq!(color, red)
                }
                Shape::Stroke(stroke) => assert_eq!(stroke.color, red),
            }
        }
    }

    #[test]
    fn test_sound_waves_add_mirrored_strokes() {
        let spec = IconSpec::with_size(192).unwrap().with_sound_waves(true);
        let drawing = render(&spec);
        let strokes: Vec<&Stroke> = drawing
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Stroke(stroke) => Some(stroke),
                _ => None,
            })
            .collect();
        assert_eq!(strokes.len(), 4);

        // Left and right arcs mirror around the canvas midline
        let (left, right) = (strokes[0], strokes[1]);
        assert_eq!(left.start.x + right.start.x, 192.0);
        assert_eq!(left.start.y, right.start.y);
        assert_eq!(right.start, Point::new(124.0, 64.0));
        assert_eq!(right.segments[0].to, Point::new(138.0, 80.0));
    }

    #[test]
    fn test_sound_waves_stay_inside_canvas() {
        for size in [32u32, 144, 180, 192, 512] {
            let spec = IconSpec::with_size(size as i64)
                .unwrap()
                .with_sound_waves(true);
            for shape in render(&spec).shapes {
                if let Shape::Stroke(stroke) = shape {
                    let (min, max) = stroke.bounds();
                    assert!(min.x >= 0.0 && min.y >= 0.0, "size {size}");
                    assert!(max.x <= size as f32 && max.y <= size as f32, "size {size}");
                }
            }
        }
    }

    #[test]
    fn test_render_degenerate_size() {
        let spec = IconSpec::with_size(16).unwrap().with_sound_waves(true);
        let drawing = render(&spec);
        assert_eq!(drawing.size, 16);
        assert_eq!(drawing.shapes.len(), 7);
    }
}
