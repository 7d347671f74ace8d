use anyhow::{Context, Result};
use icon_core::render;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::capability::{plan_formats, Capabilities};
use crate::config::Config;
use crate::encoder::{encoder_for, OutputFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of one generation run
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<WrittenFile>,
    pub failed: Vec<FailedFile>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render every configured target and write its planned outputs.
///
/// Invalid configuration fails the whole run before anything is written.
/// File system errors are recorded per file and the run carries on.
pub fn generate(config: &Config, caps: &Capabilities) -> Result<Report> {
    let specs = config.build_specs()?;
    let mut report = Report::default();

    if let Err(e) = fs::create_dir_all(&config.output_dir) {
        // Each write below fails with its own path; keep going so they are all reported
        error!(
            "Failed to create output directory {}: {}",
            config.output_dir.display(),
            e
        );
    }

    for (target, spec) in &specs {
        let formats = plan_formats(target, caps);
        if formats.is_empty() {
            continue;
        }

        info!(
            "Generating {} ({}x{})",
            target.name,
            spec.edge_length(),
            spec.edge_length()
        );
        let drawing = render(spec);

        for format in formats {
            let path = config.output_dir.join(format.file_name(&target.name));
            match write_output(&drawing, format, &target.name, &path) {
                Ok(bytes) => {
                    info!("  Saved {} {}", format.label(), path.display());
                    report.written.push(WrittenFile {
                        path,
                        format,
                        bytes,
                    });
                }
                Err(e) => {
                    error!("  Failed to write {}: {:#}", path.display(), e);
                    report.failed.push(FailedFile {
                        path,
                        error: format!("{:#}", e),
                    });
                }
            }
        }
    }

    Ok(report)
}

fn write_output(
    drawing: &icon_core::Drawing,
    format: OutputFormat,
    stem: &str,
    path: &Path,
) -> Result<u64> {
    let encoder = encoder_for(format)
        .ok_or_else(|| anyhow::anyhow!("No {} encoder in this build", format.label()))?;
    let bytes = encoder.encode(drawing, stem)?;
    fs::write(path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("{} bytes written to {}", bytes.len(), path.display());
    Ok(bytes.len() as u64)
}
