use num_complex::Complex64;
use realfft::RealFftPlanner;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// FFT plan for forward and inverse complex FFT operations.
///
/// This struct caches FFT plans for efficient reuse. Any length is accepted;
/// rustfft picks a mixed-radix or Bluestein strategy for sizes that are not
/// powers of two.
///
/// # Example
/// ```
/// use svais::fft::FftPlan;
/// use num_complex::Complex64;
///
/// let plan = FftPlan::new(512);
/// let mut buffer = vec![Complex64::new(1.0, 0.0); 512];
/// plan.forward(&mut buffer);
/// plan.inverse(&mut buffer);
/// assert!((buffer[0].re - 1.0).abs() < 1e-12);
/// ```
pub struct FftPlan {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    len: usize,
}

impl FftPlan {
    /// Create a new FFT plan for a given size.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);
        Self {
            forward,
            inverse,
            len,
        }
    }

    /// Transform length this plan was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Perform forward FFT in-place (unnormalized).
    pub fn forward(&self, buffer: &mut [Complex64]) {
        self.forward.process(buffer);
    }

    /// Perform inverse FFT in-place.
    ///
    /// The output is scaled by 1/len so that `inverse(forward(x)) == x`.
    pub fn inverse(&self, buffer: &mut [Complex64]) {
        self.inverse.process(buffer);
        let scale = 1.0 / self.len as f64;
        for v in buffer.iter_mut() {
            *v *= scale;
        }
    }
}

/// Full complex DFT of a real-valued input.
///
/// The output has the same length as the input and keeps the unshifted
/// ordering of the transform: DC first, then positive frequencies, then
/// negative frequencies in increasing order.
///
/// # Example
/// ```
/// use svais::fft::fft;
///
/// let spectrum = fft(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(spectrum.len(), 4);
/// assert!(spectrum.iter().all(|c| (c.norm() - 1.0).abs() < 1e-12));
/// ```
pub fn fft(input: &[f64]) -> Vec<Complex64> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut buffer: Vec<Complex64> = input.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    FftPlan::new(input.len()).forward(&mut buffer);
    buffer
}

/// Bin center frequencies of an `n`-point DFT at sample rate `sr`.
///
/// Same layout as [`fft`]: bins `0..ceil(n/2)` are `k * sr / n`, the
/// remaining bins are the negative frequencies `(k - n) * sr / n`. For even
/// `n` the Nyquist bin is reported as `-sr / 2`.
///
/// # Example
/// ```
/// use svais::fft::fft_frequencies;
///
/// let freqs = fft_frequencies(4, 8);
/// assert_eq!(freqs, vec![0.0, 2.0, -4.0, -2.0]);
/// ```
pub fn fft_frequencies(n: usize, sr: u32) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let n_positive = n.div_ceil(2);
    let scale = sr as f64 / n as f64;
    (0..n)
        .map(|k| {
            if k < n_positive {
                k as f64 * scale
            } else {
                (k as f64 - n as f64) * scale
            }
        })
        .collect()
}

/// Compute the real-to-complex FFT (rfft) of a real-valued input.
///
/// Only the non-redundant half of the spectrum is returned.
///
/// # Returns
/// Complex FFT output of length input.len() / 2 + 1
///
/// # Example
/// ```
/// use svais::fft::rfft;
///
/// let signal = vec![1.0f64; 1024];
/// let spectrum = rfft(&signal);
/// assert_eq!(spectrum.len(), 513); // 1024/2 + 1
/// ```
pub fn rfft(input: &[f64]) -> Vec<Complex64> {
    if input.is_empty() {
        return Vec::new();
    }
    let len = input.len();
    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(len);
    let mut in_buf = input.to_vec();
    let mut out_buf = r2c.make_output_vec();
    // Buffers come from the plan itself, so lengths always match.
    let _ = r2c.process(&mut in_buf, &mut out_buf);
    out_buf
}

/// Analytic signal of a real input via the frequency-domain Hilbert transform.
///
/// The one-sided spectrum is doubled, the negative half is zeroed, and DC
/// (plus the Nyquist bin for even lengths) is kept as is before the inverse
/// transform. The real part of the result reproduces the input; the
/// imaginary part is its Hilbert transform.
///
/// # Example
/// ```
/// use svais::fft::analytic_signal;
///
/// let x = vec![1.0, 0.0, -1.0, 0.0];
/// let z = analytic_signal(&x);
/// assert_eq!(z.len(), 4);
/// assert!((z[0].re - 1.0).abs() < 1e-12);
/// assert!((z[1].im - 1.0).abs() < 1e-12);
/// ```
pub fn analytic_signal(input: &[f64]) -> Vec<Complex64> {
    let n = input.len();
    if n < 2 {
        return input.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    }

    let half = rfft(input);
    let mut spectrum = vec![Complex64::new(0.0, 0.0); n];
    spectrum[0] = half[0];
    if n % 2 == 0 {
        for k in 1..n / 2 {
            spectrum[k] = half[k] * 2.0;
        }
        spectrum[n / 2] = half[n / 2];
    } else {
        for k in 1..=(n - 1) / 2 {
            spectrum[k] = half[k] * 2.0;
        }
    }

    FftPlan::new(n).inverse(&mut spectrum);
    spectrum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fft_of_impulse_is_flat() {
        let mut x = vec![0.0; 16];
        x[0] = 1.0;
        for c in fft(&x) {
            assert_abs_diff_eq!(c.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fft_matches_rfft_half() {
        let x: Vec<f64> = (0..10).map(|i| (i as f64 * 0.7).sin()).collect();
        let full = fft(&x);
        let half = rfft(&x);
        assert_eq!(half.len(), 6);
        for (a, b) in full.iter().zip(half.iter()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-9);
            assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fft_frequencies_odd_length() {
        let freqs = fft_frequencies(5, 10);
        assert_eq!(freqs, vec![0.0, 2.0, 4.0, -4.0, -2.0]);
    }

    #[test]
    fn test_fft_frequencies_empty() {
        assert!(fft_frequencies(0, 8000).is_empty());
        assert!(fft(&[]).is_empty());
    }

    #[test]
    fn test_plan_roundtrip() {
        let plan = FftPlan::new(12);
        assert_eq!(plan.len(), 12);
        let orig: Vec<Complex64> = (0..12).map(|i| Complex64::new(i as f64, -(i as f64))).collect();
        let mut buf = orig.clone();
        plan.forward(&mut buf);
        plan.inverse(&mut buf);
        for (a, b) in buf.iter().zip(orig.iter()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-9);
            assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_analytic_signal_real_part_is_input() {
        let x: Vec<f64> = (0..33).map(|i| (i as f64 * 0.3).cos() + 0.2).collect();
        let z = analytic_signal(&x);
        for (zi, xi) in z.iter().zip(x.iter()) {
            assert_abs_diff_eq!(zi.re, *xi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_analytic_signal_of_cosine_is_phasor() {
        // Integer number of periods: cos -> cos + i sin.
        let n = 64;
        let x: Vec<f64> = (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * 4.0 * i as f64 / n as f64).cos())
            .collect();
        let z = analytic_signal(&x);
        for (i, zi) in z.iter().enumerate() {
            let phase = 2.0 * std::f64::consts::PI * 4.0 * i as f64 / n as f64;
            assert_abs_diff_eq!(zi.im, phase.sin(), epsilon = 1e-9);
            assert_abs_diff_eq!(zi.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_analytic_signal_short_inputs() {
        assert!(analytic_signal(&[]).is_empty());
        let z = analytic_signal(&[-3.0]);
        assert_eq!(z, vec![Complex64::new(-3.0, 0.0)]);
    }
}
