//! Directory batch: decode each recording, extract features, append a row.
//!
//! Processing is sequential and stops at the first failure. Rows written
//! before the failure stay in the log.

use crate::config::PipelineConfig;
use crate::feature::{self, FeatureSet};
use crate::io::{self, Downmix, Signal};
use crate::{files, report};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Outcome of a completed directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Recordings processed, in the order their rows were appended.
    pub processed: Vec<PathBuf>,
}

impl ProcessSummary {
    pub fn count(&self) -> usize {
        self.processed.len()
    }
}

/// Compute the feature set of an already decoded signal.
///
/// The spectral centroid computes its own FFT, independent of the `fft`
/// field.
pub fn features_from_signal(signal: &Signal) -> FeatureSet {
    FeatureSet {
        fft: feature::compute_fft(&signal.samples, signal.sample_rate),
        rms: feature::compute_rms(&signal.samples),
        zcr: feature::compute_zcr(&signal.samples),
        spectral_centroid: feature::compute_spectral_centroid(
            &signal.samples,
            signal.sample_rate,
        ),
    }
}

/// Decode one WAV file and extract its features.
///
/// # Errors
/// Decoding errors from [`io::read_wav`]: invalid container or a sample
/// format other than 16-bit integer PCM.
pub fn extract_features<P: AsRef<Path>>(path: P, downmix: Downmix) -> crate::Result<FeatureSet> {
    let path = path.as_ref();
    let signal = io::load_signal(path, downmix)?;
    let features = features_from_signal(&signal);
    if features.spectral_centroid.is_nan() {
        warn!(
            "{}: spectral centroid undefined (zero spectral magnitude)",
            path.display()
        );
    }
    Ok(features)
}

/// Process every `.wav` file in `config.input_dir` into `config.output_csv`.
///
/// The CSV file is only opened when there is a row to write, so a directory
/// without recordings leaves it untouched.
///
/// # Errors
/// The first listing, decoding or writing error, unchanged.
pub fn process_audio_directory(config: &PipelineConfig) -> crate::Result<ProcessSummary> {
    let inputs = files::list_wav_files(&config.input_dir)?;
    info!(
        "{} recording(s) found in {}",
        inputs.len(),
        config.input_dir.display()
    );

    let mut summary = ProcessSummary::default();
    for path in inputs {
        let features = extract_features(&path, config.downmix)?;
        report::log_features_to_csv(&features, &config.output_csv, config.fft_column)?;
        info!(
            "{}: rms={:.3} zcr={:.4} centroid={:.1} Hz",
            path.display(),
            features.rms,
            features.zcr,
            features.spectral_centroid
        );
        summary.processed.push(path);
    }

    info!(
        "appended {} row(s) to {}",
        summary.count(),
        config.output_csv.display()
    );
    Ok(summary)
}
