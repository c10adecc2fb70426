//! Append-only CSV log of extracted features.
//!
//! One header line, written only when the file is empty, followed by one
//! row per recording. Rows are never rewritten and the file is never
//! truncated.
//!
//! # Limitations
//! There is no file locking. Two processes appending to the same log at
//! once can interleave rows or both write a header.

use crate::feature::{FeatureSet, Spectrum};
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Column names, in row order.
pub const HEADER: [&str; 4] = ["fft", "rms", "zcr", "spectral_centroid"];

/// How the `fft` cell is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FftColumn {
    /// Every bin as `frequency:magnitude`, bins separated by `;`.
    #[default]
    Full,
    /// Only the frequency of the strongest one-sided bin (see `Spectrum::peak_frequency`).
    Peak,
}

impl FromStr for FftColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "peak" => Ok(Self::Peak),
            other => Err(format!(
                "unknown fft column format `{other}` (expected `full` or `peak`)"
            )),
        }
    }
}

impl fmt::Display for FftColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Peak => f.write_str("peak"),
        }
    }
}

/// Append one feature row to the CSV log at `output_path`.
///
/// The file is created if missing and opened in append mode. The header is
/// written first only if the file is empty at that point.
///
/// # Errors
/// `Error::Io` if the file cannot be opened or written (including a
/// missing parent directory).
pub fn log_features_to_csv<P: AsRef<Path>>(
    features: &FeatureSet,
    output_path: P,
    fft_column: FftColumn,
) -> crate::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path.as_ref())?;
    let is_empty = file.metadata()?.len() == 0;

    let mut writer = BufWriter::new(file);
    if is_empty {
        write_record(&mut writer, HEADER.iter().map(|h| h.to_string()))?;
    }
    write_record(&mut writer, format_row(features, fft_column))?;
    writer.flush()?;
    Ok(())
}

/// Render the cells of one row, unescaped.
pub fn format_row(features: &FeatureSet, fft_column: FftColumn) -> [String; 4] {
    [
        format_fft_cell(&features.fft, fft_column),
        features.rms.to_string(),
        features.zcr.to_string(),
        features.spectral_centroid.to_string(),
    ]
}

fn format_fft_cell(spectrum: &Spectrum, fft_column: FftColumn) -> String {
    match fft_column {
        FftColumn::Full => spectrum
            .bins()
            .map(|(f, m)| format!("{f}:{m}"))
            .collect::<Vec<_>>()
            .join(";"),
        FftColumn::Peak => spectrum
            .peak_frequency()
            .map(|f| f.to_string())
            .unwrap_or_default(),
    }
}

/// Quote a field if it contains a delimiter, a quote or a line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W, I>(writer: &mut W, fields: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let line = fields
        .into_iter()
        .map(|f| escape_field(&f))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{line}")
}
