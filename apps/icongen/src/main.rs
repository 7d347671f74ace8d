use anyhow::Result;
use clap::Parser;
use icongen::{generate, Capabilities, Config, Report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "icongen",
    about = "Generate the microphone app icons (PNG, SVG and HTML canvas generators)"
)]
struct Args {
    /// JSON config file (defaults to ./icongen.json when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory, overriding the config
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Skip PNG encoding and write the SVG and HTML fallbacks instead
    #[arg(long)]
    no_raster: bool,

    /// Write the effective config to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,
}

/// Initialize console logging, `RUST_LOG` overrides the default `info` level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run(Args::parse()) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            error!("{} file(s) could not be written", report.failed.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Report> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    if let Some(path) = args.write_config {
        config.save(&path)?;
        info!("Config written to {}", path.display());
        return Ok(Report::default());
    }

    let caps = Capabilities::probe(args.no_raster);
    info!("Generating icons into {}", config.output_dir.display());

    let report = generate(&config, &caps)?;

    info!("Generated files:");
    for file in &report.written {
        info!("  - {} ({} bytes)", file.path.display(), file.bytes);
    }
    for file in &report.failed {
        error!("  x {}: {}", file.path.display(), file.error);
    }

    Ok(report)
}
