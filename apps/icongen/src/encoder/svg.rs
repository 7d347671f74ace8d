use super::{num, IconEncoder, OutputFormat};
use anyhow::Result;
use icon_core::{Background, Drawing, Rect, Shape, Stroke};
use std::fmt::Write;

/// Serializes the drawing as standalone SVG markup
pub struct SvgEncoder;

impl IconEncoder for SvgEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }

    fn encode(&self, drawing: &Drawing, _stem: &str) -> Result<Vec<u8>> {
        Ok(to_svg(drawing)?.into_bytes())
    }
}

/// Corner radius the way the rasterizer clamps it
fn clamped_radius(rect: &Rect, radius: u32) -> u32 {
    radius.min(rect.width / 2).min(rect.height / 2)
}

pub fn to_svg(drawing: &Drawing) -> Result<String> {
    let size = drawing.size;
    let mut out = String::new();

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
    )?;

    match &drawing.background {
        Background::Solid { color } => {
            writeln!(out, r#"  <rect width="{size}" height="{size}" fill="{color}"/>"#)?;
        }
        Background::LinearGradient { stops } => {
            writeln!(out, "  <defs>")?;
            writeln!(
                out,
                r#"    <linearGradient id="background" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="{size}" y2="{size}">"#
            )?;
            for stop in stops {
                writeln!(
                    out,
                    r#"      <stop offset="{}" stop-color="{}"/>"#,
                    num(stop.offset),
                    stop.color
                )?;
            }
            writeln!(out, "    </linearGradient>")?;
            writeln!(out, "  </defs>")?;
            writeln!(
                out,
                r#"  <rect width="{size}" height="{size}" fill="url(#background)"/>"#
            )?;
        }
    }

    for shape in &drawing.shapes {
        match shape {
            Shape::Rect { rect, color } => {
                if rect.is_empty() {
                    continue;
                }
                writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    rect.x, rect.y, rect.width, rect.height, color
                )?;
            }
            Shape::RoundedRect {
                rect,
                radius,
                color,
            } => {
                if rect.is_empty() {
                    continue;
                }
                writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    clamped_radius(rect, *radius),
                    color
                )?;
            }
            Shape::Stroke(stroke) => {
                writeln!(
                    out,
                    r#"  <path d="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round" fill="none"/>"#,
                    path_data(stroke),
                    stroke.color,
                    num(stroke.width),
                    num(stroke.opacity)
                )?;
            }
        }
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

fn path_data(stroke: &Stroke) -> String {
    let mut d = format!("M {} {}", num(stroke.start.x), num(stroke.start.y));
    for segment in &stroke.segments {
        d.push_str(&format!(
            " Q {} {} {} {}",
            num(segment.control.x),
            num(segment.control.y),
            num(segment.to.x),
            num(segment.to.y)
        ));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_core::{render, Color, IconSpec};

    fn svg(spec: &IconSpec) -> String {
        to_svg(&render(spec)).unwrap()
    }

    #[test]
    fn test_svg_header_and_view_box() {
        let markup = svg(&IconSpec::with_size(192).unwrap());
        assert!(markup.starts_with("<?xml"));
        assert!(markup.contains(r#"viewBox="0 0 192 192""#));
        assert!(markup.contains(r#"width="192" height="192""#));
        assert!(markup.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_solid_glyph() {
        let markup = svg(&IconSpec::with_size(192).unwrap());
        assert!(markup.contains(r##"<rect width="192" height="192" fill="#3B82F6"/>"##));
        assert!(markup.contains(
            r##"<rect x="76" y="40" width="40" height="80" rx="20" fill="#FFFFFF"/>"##
        ));
        assert!(markup.contains(r##"<rect x="94" y="120" width="4" height="25" fill="#FFFFFF"/>"##));
        assert!(markup.contains(
            r##"<rect x="86" y="145" width="20" height="6" rx="3" fill="#FFFFFF"/>"##
        ));
        assert!(!markup.contains("<defs>"));
        assert!(!markup.contains("<path"));
    }

    #[test]
    fn test_svg_gradient_and_waves() {
        let spec = IconSpec::new(192, Background::default_gradient(), Color::WHITE)
            .unwrap()
            .with_sound_waves(true);
        let markup = svg(&spec);

        assert!(markup.contains(r#"<linearGradient id="background""#));
        assert!(markup.contains(r##"<stop offset="0.5" stop-color="#00F2FE"/>"##));
        assert!(markup.contains(r#"fill="url(#background)""#));
        assert_eq!(markup.matches("<path").count(), 4);
        assert!(markup.contains(r#"d="M 124 64 Q 138 56 138 80 Q 138 104 124 96""#));
        assert!(markup.contains(r#"stroke-opacity="0.8""#));
    }

    #[test]
    fn test_svg_skips_collapsed_shapes() {
        // At 16px the handle and base round to zero; only background and body remain
        let markup = svg(&IconSpec::with_size(16).unwrap());
        assert_eq!(markup.matches("<rect").count(), 2);
    }

    #[test]
    fn test_svg_is_deterministic() {
        let spec = IconSpec::with_size(512).unwrap().with_sound_waves(true);
        assert_eq!(svg(&spec), svg(&spec));
    }
}
