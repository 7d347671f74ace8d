use super::{num, IconEncoder, OutputFormat};
use anyhow::Result;
use icon_core::{Background, Drawing, Shape};
use std::fmt::Write;

/// Emits a self-contained HTML page that redraws the icon on a 2D canvas and
/// offers the result as a PNG download. Used when this build cannot encode
/// PNG itself; opening the page in any browser produces the raster.
pub struct HtmlCanvasEncoder;

impl IconEncoder for HtmlCanvasEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn encode(&self, drawing: &Drawing, stem: &str) -> Result<Vec<u8>> {
        Ok(to_html(drawing, stem)?.into_bytes())
    }
}

pub fn to_html(drawing: &Drawing, stem: &str) -> Result<String> {
    let size = drawing.size;
    let png_name = OutputFormat::Png.file_name(stem);
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"    <meta charset="UTF-8">"#)?;
    writeln!(out, "    <title>Icon Generator {size}x{size}</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(
        out,
        r#"    <canvas id="canvas" width="{size}" height="{size}" style="border: 1px solid #ccc;"></canvas>"#
    )?;
    writeln!(out, "    <br>")?;
    writeln!(
        out,
        r#"    <a id="download" download="{png_name}">Download {png_name}</a>"#
    )?;
    writeln!(out, "    <script>")?;
    writeln!(out, "        const canvas = document.getElementById('canvas');")?;
    writeln!(out, "        const ctx = canvas.getContext('2d');")?;
    writeln!(out)?;

    match &drawing.background {
        Background::Solid { color } => {
            writeln!(out, "        ctx.fillStyle = '{color}';")?;
        }
        Background::LinearGradient { stops } => {
            writeln!(
                out,
                "        const gradient = ctx.createLinearGradient(0, 0, {size}, {size});"
            )?;
            for stop in stops {
                writeln!(
                    out,
                    "        gradient.addColorStop({}, '{}');",
                    num(stop.offset),
                    stop.color
                )?;
            }
            writeln!(out, "        ctx.fillStyle = gradient;")?;
        }
    }
    writeln!(out, "        ctx.fillRect(0, 0, {size}, {size});")?;

    for shape in &drawing.shapes {
        writeln!(out)?;
        match shape {
            Shape::Rect { rect, color } => {
                writeln!(out, "        ctx.fillStyle = '{color}';")?;
                writeln!(
                    out,
                    "        ctx.fillRect({}, {}, {}, {});",
                    rect.x, rect.y, rect.width, rect.height
                )?;
            }
            Shape::RoundedRect {
                rect,
                radius,
                color,
            } => {
                let radius = (*radius).min(rect.width / 2).min(rect.height / 2);
                writeln!(out, "        ctx.fillStyle = '{color}';")?;
                writeln!(out, "        ctx.beginPath();")?;
                writeln!(
                    out,
                    "        ctx.roundRect({}, {}, {}, {}, {});",
                    rect.x, rect.y, rect.width, rect.height, radius
                )?;
                writeln!(out, "        ctx.fill();")?;
            }
            Shape::Stroke(stroke) => {
                writeln!(out, "        ctx.save();")?;
                writeln!(out, "        ctx.globalAlpha = {};", num(stroke.opacity))?;
                writeln!(out, "        ctx.strokeStyle = '{}';", stroke.color)?;
                writeln!(out, "        ctx.lineWidth = {};", num(stroke.width))?;
                writeln!(out, "        ctx.lineCap = 'round';")?;
                writeln!(out, "        ctx.beginPath();")?;
                writeln!(
                    out,
                    "        ctx.moveTo({}, {});",
                    num(stroke.start.x),
                    num(stroke.start.y)
                )?;
                for segment in &stroke.segments {
                    writeln!(
                        out,
                        "        ctx.quadraticCurveTo({}, {}, {}, {});",
                        num(segment.control.x),
                        num(segment.control.y),
                        num(segment.to.x),
                        num(segment.to.y)
                    )?;
                }
                writeln!(out, "        ctx.stroke();")?;
                writeln!(out, "        ctx.restore();")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "        canvas.toBlob(function(blob) {{")?;
    writeln!(out, "            const url = URL.createObjectURL(blob);")?;
    writeln!(
        out,
        "            document.getElementById('download').href = url;"
    )?;
    writeln!(out, "        }}, 'image/png');")?;
    writeln!(out, "    </script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_core::{render, Color, IconSpec};

    #[test]
    fn test_html_canvas_and_download_link() {
        let drawing = render(&IconSpec::with_size(144).unwrap());
        let html = to_html(&drawing, "icon-144").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<canvas id="canvas" width="144" height="144""#));
        assert!(html.contains(r#"download="icon-144.png""#));
        assert!(html.contains("canvas.toBlob("));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_draws_same_geometry() {
        let drawing = render(&IconSpec::with_size(192).unwrap());
        let html = to_html(&drawing, "icon-192").unwrap();

        assert!(html.contains("ctx.fillStyle = '#3B82F6';"));
        assert!(html.contains("ctx.fillRect(0, 0, 192, 192);"));
        assert!(html.contains("ctx.roundRect(76, 40, 40, 80, 20);"));
        assert!(html.contains("ctx.fillRect(94, 120, 4, 25);"));
        assert!(html.contains("ctx.roundRect(86, 145, 20, 6, 3);"));
    }

    #[test]
    fn test_html_gradient_and_waves() {
        let spec = IconSpec::new(192, Background::default_gradient(), Color::WHITE)
            .unwrap()
            .with_sound_waves(true);
        let html = to_html(&render(&spec), "icon-192").unwrap();

        assert!(html.contains("ctx.createLinearGradient(0, 0, 192, 192);"));
        assert!(html.contains("gradient.addColorStop(0.5, '#00F2FE');"));
        assert_eq!(html.matches("ctx.quadraticCurveTo(").count(), 8);
        assert!(html.contains("ctx.moveTo(124, 64);"));
        assert!(html.contains("ctx.globalAlpha = 0.6;"));
    }

    #[test]
    fn test_encoder_uses_target_stem() {
        let drawing = render(&IconSpec::with_size(180).unwrap());
        let bytes = HtmlCanvasEncoder
            .encode(&drawing, "apple-touch-icon-180")
            .unwrap();
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("Download apple-touch-icon-180.png"));
    }
}
