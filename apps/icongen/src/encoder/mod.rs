//! Output encoders for rendered icons
//!
//! Every encoder consumes the same [`Drawing`], so the PNG, SVG and HTML
//! outputs of one target share their geometry exactly.

mod html;
#[cfg(feature = "png")]
mod png;
mod svg;

use anyhow::Result;
use icon_core::Drawing;
use serde::{Deserialize, Serialize};

pub use html::HtmlCanvasEncoder;
#[cfg(feature = "png")]
pub use png::PngEncoder;
pub use svg::SvgEncoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Svg,
    /// Browser canvas generator with a manual download link
    Html,
}

impl OutputFormat {
    /// Output file name for a target stem
    pub fn file_name(self, stem: &str) -> String {
        match self {
            OutputFormat::Png => format!("{}.png", stem),
            OutputFormat::Svg => format!("{}.svg", stem),
            OutputFormat::Html => format!("generate-{}.html", stem),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Svg => "SVG",
            OutputFormat::Html => "HTML generator",
        }
    }
}

/// Serializes a drawing into the bytes of one output file
pub trait IconEncoder {
    fn format(&self) -> OutputFormat;

    /// `stem` is the target's file stem, used by outputs that name a
    /// follow-up file (the HTML download link)
    fn encode(&self, drawing: &Drawing, stem: &str) -> Result<Vec<u8>>;
}

/// Encoder for a format, or `None` when this build cannot produce it
pub fn encoder_for(format: OutputFormat) -> Option<Box<dyn IconEncoder>> {
    match format {
        #[cfg(feature = "png")]
        OutputFormat::Png => Some(Box::new(PngEncoder)),
        #[cfg(not(feature = "png"))]
        OutputFormat::Png => None,
        OutputFormat::Svg => Some(Box::new(SvgEncoder)),
        OutputFormat::Html => Some(Box::new(HtmlCanvasEncoder)),
    }
}

/// Format a coordinate without a trailing ".0" for whole numbers
pub(crate) fn num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(OutputFormat::Png.file_name("icon-192"), "icon-192.png");
        assert_eq!(OutputFormat::Svg.file_name("icon-192"), "icon-192.svg");
        assert_eq!(
            OutputFormat::Html.file_name("icon-192"),
            "generate-icon-192.html"
        );
    }

    #[test]
    fn test_format_serde_names() {
        let json = serde_json::to_string(&vec![OutputFormat::Png, OutputFormat::Html]).unwrap();
        assert_eq!(json, r#"["png","html"]"#);
        assert!(serde_json::from_str::<OutputFormat>(r#""gif""#).is_err());
    }

    #[test]
    fn test_encoders_report_their_format() {
        for format in [OutputFormat::Svg, OutputFormat::Html] {
            assert_eq!(encoder_for(format).unwrap().format(), format);
        }
        #[cfg(feature = "png")]
        assert_eq!(
            encoder_for(OutputFormat::Png).unwrap().format(),
            OutputFormat::Png
        );
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(2.0 / 3.0), "0.667");
        assert_eq!(num(-4.25), "-4.25");
    }
}
