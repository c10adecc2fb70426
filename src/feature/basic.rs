use super::Spectrum;
use crate::fft;

/// Compute the magnitude spectrum of a signal.
///
/// A plain DFT of the whole signal: no window, no zero-padding. Bins come
/// back in unshifted order, with `frequencies` taken from
/// [`fft::fft_frequencies`] and `magnitudes[k] = |X[k]|`.
///
/// # Arguments
/// * `y` - Input signal
/// * `sr` - Sampling rate in Hz
///
/// # Example
/// ```
/// use svais::feature::basic::compute_fft;
///
/// let spectrum = compute_fft(&[1.0, 1.0, 1.0, 1.0], 4);
/// assert_eq!(spectrum.frequencies, vec![0.0, 1.0, -2.0, -1.0]);
/// assert_eq!(spectrum.magnitudes, vec![4.0, 0.0, 0.0, 0.0]);
/// ```
pub fn compute_fft(y: &[f64], sr: u32) -> Spectrum {
    let coefficients = fft::fft(y);
    Spectrum {
        frequencies: fft::fft_frequencies(y.len(), sr),
        magnitudes: coefficients.iter().map(|c| c.norm()).collect(),
    }
}

/// Compute the root mean square of a signal.
///
/// The sum of squares is accumulated in `f64`, so 16-bit sample values
/// never overflow. An empty signal has no mean and yields `NaN`.
///
/// # Example
/// ```
/// use svais::feature::basic::compute_rms;
///
/// let square = vec![3.0, -3.0, 3.0, -3.0];
/// assert_eq!(compute_rms(&square), 3.0);
/// assert!(compute_rms(&[]).is_nan());
/// ```
pub fn compute_rms(y: &[f64]) -> f64 {
    let sum: f64 = y.iter().map(|v| v * v).sum();
    (sum / y.len() as f64).sqrt()
}

/// Compute the zero-crossing rate of a signal.
///
/// Counts adjacent pairs whose sign differs and divides by the number of
/// samples (not the number of pairs), so the result stays below 1.
/// A sample of exactly zero counts as non-negative: `0 -> -1` is a
/// crossing, `1 -> 0` is not. An empty signal yields `NaN`.
///
/// # Example
/// ```
/// use svais::feature::basic::compute_zcr;
///
/// let signal = vec![1.0, -1.0, 1.0, -1.0];
/// assert_eq!(compute_zcr(&signal), 0.75); // 3 crossings / 4 samples
/// ```
pub fn compute_zcr(y: &[f64]) -> f64 {
    let crossings = y
        .windows(2)
        .filter(|pair| (pair[0] < 0.0) != (pair[1] < 0.0))
        .count();
    crossings as f64 / y.len() as f64
}

/// Compute the spectral centroid (magnitude-weighted mean frequency).
///
/// The spectrum is recomputed here with [`compute_fft`] rather than taken
/// from the caller. Only the one-sided half takes part, DC through the
/// Nyquist bin at `+sr/2` (see [`Spectrum::one_sided_bins`]): the magnitude
/// spectrum of a real signal is symmetric, so the two-sided mean would
/// always sit near 0 Hz.
///
/// When the magnitudes sum to zero (silence, empty input) the centroid is
/// undefined and `NaN` is returned.
///
/// # Example
/// ```
/// use svais::feature::basic::compute_spectral_centroid;
///
/// let sr = 8000;
/// let tone: Vec<f64> = (0..8000)
///     .map(|i| (2.0 * std::f64::consts::PI * 1000.0 * i as f64 / sr as f64).sin())
///     .collect();
/// let centroid = compute_spectral_centroid(&tone, sr);
/// assert!((centroid - 1000.0).abs() < 1.0);
///
/// assert!(compute_spectral_centroid(&[0.0; 16], sr).is_nan());
/// ```
pub fn compute_spectral_centroid(y: &[f64], sr: u32) -> f64 {
    let spectrum = compute_fft(y, sr);
    let mut weighted_sum = 0.0;
    let mut total = 0.0;
    for (f, m) in spectrum.one_sided_bins() {
        weighted_sum += f * m;
        total += m;
    }
    if total == 0.0 {
        return f64::NAN;
    }
    weighted_sum / total
}

/// Compute the amplitude envelope of a signal.
///
/// Magnitude of the analytic signal from [`fft::analytic_signal`]; the
/// output has the same length as the input.
///
/// # Example
/// ```
/// use svais::feature::basic::envelope;
///
/// let y: Vec<f64> = (0..64)
///     .map(|i| (2.0 * std::f64::consts::PI * 8.0 * i as f64 / 64.0).sin())
///     .collect();
/// let env = envelope(&y);
/// assert_eq!(env.len(), y.len());
/// assert!(env.iter().all(|v| (v - 1.0).abs() < 1e-9));
/// ```
pub fn envelope(y: &[f64]) -> Vec<f64> {
    fft::analytic_signal(y).iter().map(|z| z.norm()).collect()
}
