//! Acoustic feature extraction for short WAV recordings.
//!
//! svais turns each recording in a directory into one CSV row holding its
//! magnitude spectrum, RMS level, zero-crossing rate and spectral centroid.
//! The extractors are also usable on their own, together with a Hilbert
//! envelope.
//!
//! # Quick Start
//!
//! ```rust
//! use svais::{feature, io};
//!
//! // 440 Hz tone, 1 second at 8000 Hz
//! let signal = io::tone(440.0, 8000, 1.0);
//!
//! let centroid = feature::compute_spectral_centroid(&signal, 8000);
//! assert!((centroid - 440.0).abs() < 1.0);
//!
//! let zcr = feature::compute_zcr(&signal);
//! assert!(zcr > 0.0 && zcr < 1.0);
//! ```
//!
//! Batch processing a directory:
//!
//! ```no_run
//! use svais::config::PipelineConfig;
//! use svais::pipeline::process_audio_directory;
//!
//! let config = PipelineConfig::new("data/clap_sounds", "results/round1.csv");
//! let summary = process_audio_directory(&config).unwrap();
//! println!("{} rows appended", summary.count());
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fft`] | FFT plans, bin frequencies, analytic signal |
//! | [`feature`] | FFT magnitude, RMS, ZCR, spectral centroid, envelope |
//! | [`io`] | 16-bit WAV decoding, downmixing, tone generator |
//! | [`files`] | `.wav` discovery |
//! | [`report`] | Append-only CSV log |
//! | [`config`] | Pipeline configuration and TOML loading |
//! | [`pipeline`] | Per-file extraction and directory batch |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. The extractors themselves never fail:
//! undefined values (RMS of an empty signal, centroid of silence) are `NaN`.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]`.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod feature;
pub mod fft;
pub mod files;
pub mod io;
pub mod pipeline;
pub mod report;
