//! Per-recording acoustic features.
//!
//! [`basic`] holds the extractors; this module defines the records they
//! produce.

pub mod basic;

pub use basic::{compute_fft, compute_rms, compute_spectral_centroid, compute_zcr, envelope};

/// Magnitude spectrum of a full DFT.
///
/// `frequencies` and `magnitudes` always have the same length and follow
/// the unshifted transform order (see [`crate::fft::fft_frequencies`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate over `(frequency, magnitude)` pairs in bin order.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }

    /// The non-redundant half of the spectrum: bins `0..=n/2`.
    ///
    /// For even lengths the Nyquist bin is labelled `-sr/2` in transform
    /// order; here it is reported as `+sr/2`.
    pub fn one_sided_bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let n_one_sided = if self.is_empty() { 0 } else { self.len() / 2 + 1 };
        self.bins().take(n_one_sided).map(|(f, m)| (f.abs(), m))
    }

    /// Frequency of the strongest bin in [`Spectrum::one_sided_bins`].
    ///
    /// Returns `None` for an empty spectrum. Ties resolve to the lowest bin.
    pub fn peak_frequency(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for (f, m) in self.one_sided_bins() {
            match best {
                Some((_, bm)) if m <= bm => {}
                _ => best = Some((f, m)),
            }
        }
        best.map(|(f, _)| f)
    }
}

/// Features extracted from one recording; one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    pub fft: Spectrum,
    pub rms: f64,
    pub zcr: f64,
    /// `NaN` when the spectrum carries no energy.
    pub spectral_centroid: f64,
}
