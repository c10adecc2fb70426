use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use svais::config::{self, ConfigFile};
use svais::io::Downmix;
use svais::pipeline;
use svais::report::FftColumn;

/// Extract acoustic features from every `.wav` file in a directory and
/// append them to a CSV log.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file. Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the recordings.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// CSV log to append to (created if missing).
    #[arg(short, long)]
    output_csv: Option<PathBuf>,

    /// Multi-channel reduction: stride or average.
    #[arg(long)]
    downmix: Option<Downmix>,

    /// fft cell format: full or peak.
    #[arg(long)]
    fft_column: Option<FftColumn>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
}

impl Cli {
    fn resolve_config(&self) -> Result<config::PipelineConfig> {
        let mut file = match &self.config {
            Some(path) => config::load_config(path)?,
            None => ConfigFile::default(),
        };
        if let Some(dir) = &self.input_dir {
            file.input_dir = Some(dir.clone());
        }
        if let Some(csv) = &self.output_csv {
            file.output_csv = Some(csv.clone());
        }
        if self.downmix.is_some() {
            file.downmix = self.downmix;
        }
        if self.fft_column.is_some() {
            file.fft_column = self.fft_column;
        }
        Ok(file.resolve()?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let config = cli.resolve_config()?;
    log::debug!("{config:?}");

    let summary = pipeline::process_audio_directory(&config).with_context(|| {
        format!(
            "feature extraction aborted for {}",
            config.input_dir.display()
        )
    })?;
    log::info!("done: {} file(s)", summary.count());
    Ok(())
}
