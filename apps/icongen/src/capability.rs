//! Capability probe and output planning
//!
//! PNG output needs the raster encoder, which is an optional build feature.
//! When it is missing, each PNG request turns into the SVG and HTML canvas
//! fallbacks for the same target instead of failing the run.

use std::collections::BTreeSet;
use tracing::warn;

use crate::config::IconTarget;
use crate::encoder::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub raster: bool,
}

impl Capabilities {
    /// Probe what this build can encode. `force_no_raster` simulates a build
    /// without the raster encoder.
    pub fn probe(force_no_raster: bool) -> Self {
        let compiled = cfg!(feature = "png");
        let raster = compiled && !force_no_raster;

        if !raster {
            if compiled {
                warn!("Raster output disabled, writing SVG and HTML generators instead");
            } else {
                warn!("This build has no PNG encoder, writing SVG and HTML generators instead");
                warn!("Rebuild with `--features png` to write PNG files directly");
            }
            warn!("To get PNG files, open the generate-*.html pages in a browser and use the download links");
        }

        Self { raster }
    }

    pub fn supports(&self, format: OutputFormat) -> bool {
        match format {
            OutputFormat::Png => self.raster,
            OutputFormat::Svg | OutputFormat::Html => true,
        }
    }
}

/// The formats actually written for a target, in a stable order
pub fn plan_formats(target: &IconTarget, caps: &Capabilities) -> Vec<OutputFormat> {
    let mut formats = BTreeSet::new();
    for &format in &target.formats {
        if caps.supports(format) {
            formats.insert(format);
        } else {
            formats.insert(OutputFormat::Svg);
            formats.insert(OutputFormat::Html);
        }
    }
    formats.into_iter().collect()
}
