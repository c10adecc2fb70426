use approx::assert_abs_diff_eq;
use rand::Rng;
use svais::{feature, fft, io};

fn scaled_tone(freq: f64, sr: u32, duration: f64, amplitude: f64) -> Vec<f64> {
    io::tone(freq, sr, duration)
        .iter()
        .map(|v| v * amplitude)
        .collect()
}

#[test]
fn fft_peak_within_one_bin_of_tone() {
    // 1234 Hz does not land on a bin center at this length.
    let sr = 8000u32;
    let y = io::tone(1234.0, sr, 0.1);
    let spectrum = feature::compute_fft(&y, sr);

    let bin_width = sr as f64 / y.len() as f64;
    let peak = spectrum.peak_frequency().unwrap();
    assert!(
        (peak - 1234.0).abs() <= bin_width,
        "peak {peak} Hz, bin width {bin_width} Hz"
    );
}

#[test]
fn fft_frequencies_unshifted_order() {
    let spectrum = feature::compute_fft(&[0.0; 8], 8000);
    assert_eq!(
        spectrum.frequencies,
        vec![0.0, 1000.0, 2000.0, 3000.0, -4000.0, -3000.0, -2000.0, -1000.0]
    );
    assert_eq!(spectrum.magnitudes.len(), 8);
}

#[test]
fn rms_of_square_wave_equals_amplitude() {
    let amplitude = 0.8;
    let y: Vec<f64> = (0..4410)
        .map(|i| if (i / 50) % 2 == 0 { amplitude } else { -amplitude })
        .collect();
    assert_abs_diff_eq!(feature::compute_rms(&y), amplitude, epsilon = 1e-12);
}

#[test]
fn zcr_alternating_sequence() {
    let n = 1000;
    let y: Vec<f64> = (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    assert_abs_diff_eq!(
        feature::compute_zcr(&y),
        (n - 1) as f64 / n as f64,
        epsilon = 1e-12
    );
}

#[test]
fn zcr_noise_higher_than_low_tone() {
    let mut rng = rand::thread_rng();
    let noise: Vec<f64> = (0..8000).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let low = io::tone(100.0, 8000, 1.0);

    let zcr_noise = feature::compute_zcr(&noise);
    let zcr_low = feature::compute_zcr(&low);
    assert!(zcr_noise > 0.3, "noise zcr {zcr_noise}");
    assert!(zcr_low < 0.05, "tone zcr {zcr_low}");
}

#[test]
fn spectral_centroid_of_sine() {
    for freq in [100.0, 440.0, 1000.0, 3000.0] {
        let y = scaled_tone(freq, 8000, 1.0, 12000.0);
        let centroid = feature::compute_spectral_centroid(&y, 8000);
        assert_abs_diff_eq!(centroid, freq, epsilon = 0.5);
    }
}

#[test]
fn spectral_centroid_moves_with_brightness() {
    let sr = 16000;
    let dark = io::tone(200.0, sr, 0.5);
    let bright: Vec<f64> = io::tone(200.0, sr, 0.5)
        .iter()
        .zip(io::tone(5000.0, sr, 0.5))
        .map(|(a, b)| a + b)
        .collect();
    assert!(
        feature::compute_spectral_centroid(&bright, sr)
            > feature::compute_spectral_centroid(&dark, sr) + 1000.0
    );
}

#[test]
fn spectral_centroid_independent_of_scale() {
    let a = io::tone(700.0, 8000, 0.25);
    let b = scaled_tone(700.0, 8000, 0.25, 30000.0);
    assert_abs_diff_eq!(
        feature::compute_spectral_centroid(&a, 8000),
        feature::compute_spectral_centroid(&b, 8000),
        epsilon = 1e-6
    );
}

#[test]
fn envelope_of_steady_tone_is_flat() {
    let y = scaled_tone(250.0, 8000, 1.0, 0.6);
    let env = feature::envelope(&y);
    assert_eq!(env.len(), y.len());
    for v in &env {
        assert_abs_diff_eq!(*v, 0.6, epsilon = 1e-9);
    }
}

#[test]
fn envelope_decaying_burst() {
    let sr = 8000;
    let y: Vec<f64> = (0..sr as usize)
        .map(|i| {
            let t = i as f64 / sr as f64;
            (-8.0 * t).exp() * (2.0 * std::f64::consts::PI * 1000.0 * t).sin()
        })
        .collect();
    let env = feature::envelope(&y);
    // Away from the edges the envelope follows exp(-8 t).
    for i in [1000usize, 2000, 4000, 6000] {
        let t = i as f64 / sr as f64;
        assert_abs_diff_eq!(env[i], (-8.0 * t).exp(), epsilon = 0.02);
    }
    assert!(env[1000] > env[6000]);
}

#[test]
fn analytic_signal_matches_envelope() {
    let y = io::tone(330.0, 8000, 0.2);
    let z = fft::analytic_signal(&y);
    let env = feature::envelope(&y);
    for (zi, ei) in z.iter().zip(env.iter()) {
        assert_abs_diff_eq!(zi.norm(), *ei, epsilon = 1e-12);
    }
}
