//! Pipeline configuration.
//!
//! The pipeline never looks up paths on its own; callers build a
//! [`PipelineConfig`] directly or from a TOML file such as:
//!
//! ```toml
//! input_dir = "data/clap_sounds"
//! output_csv = "results/round1.csv"
//! downmix = "average"   # or "stride" (default)
//! fft_column = "peak"   # or "full" (default)
//! ```

use crate::io::Downmix;
use crate::report::FftColumn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Everything [`crate::pipeline::process_audio_directory`] needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_csv: PathBuf,
    pub downmix: Downmix,
    pub fft_column: FftColumn,
}

impl PipelineConfig {
    /// Create a configuration with default downmix and fft column format.
    pub fn new(input_dir: impl Into<PathBuf>, output_csv: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_csv: output_csv.into(),
            downmix: Downmix::default(),
            fft_column: FftColumn::default(),
        }
    }

    pub fn with_downmix(mut self, downmix: Downmix) -> Self {
        self.downmix = downmix;
        self
    }

    pub fn with_fft_column(mut self, fft_column: FftColumn) -> Self {
        self.fft_column = fft_column;
        self
    }
}

/// Configuration as written in a file; every key is optional so that
/// command-line flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input_dir: Option<PathBuf>,
    pub output_csv: Option<PathBuf>,
    pub downmix: Option<Downmix>,
    pub fft_column: Option<FftColumn>,
}

impl ConfigFile {
    /// Resolve into a complete [`PipelineConfig`].
    ///
    /// # Errors
    /// `Error::Config` naming the first missing path key.
    pub fn resolve(self) -> crate::Result<PipelineConfig> {
        let input_dir = self
            .input_dir
            .ok_or_else(|| crate::Error::Config("missing `input_dir`".into()))?;
        let output_csv = self
            .output_csv
            .ok_or_else(|| crate::Error::Config("missing `output_csv`".into()))?;
        Ok(PipelineConfig {
            input_dir,
            output_csv,
            downmix: self.downmix.unwrap_or_default(),
            fft_column: self.fft_column.unwrap_or_default(),
        })
    }
}

/// Parse TOML configuration text.
pub fn parse_config(text: &str) -> crate::Result<ConfigFile> {
    toml::from_str(text).map_err(|e| crate::Error::Config(e.to_string()))
}

/// Read and parse a TOML configuration file.
///
/// # Errors
/// `Error::Config` if the file cannot be read or is not valid TOML for
/// [`ConfigFile`].
pub fn load_config<P: AsRef<Path>>(path: P) -> crate::Result<ConfigFile> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| crate::Error::Config(format!("cannot read {}: {e}", path.display())))?;
    parse_config(&text)
}
