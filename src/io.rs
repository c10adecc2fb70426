use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::{debug, warn};
use ndarray::Array2;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Parameters read from a WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub frames: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("hound error: {0}")]
    Hound(#[from] hound::Error),
    #[error("unsupported number of channels")]
    UnsupportedChannels,
}

/// A mono sample sequence with its sampling rate.
///
/// Samples keep the integer scale of the source file (a 16-bit file spans
/// `-32768.0..=32767.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

impl Signal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// How multi-channel frames are reduced to one channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Downmix {
    /// Keep only the first channel of every frame, i.e. every Nth
    /// interleaved sample. Matches the historical CSV output.
    #[default]
    Stride,
    /// Mean of all channels per frame.
    Average,
}

impl FromStr for Downmix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stride" => Ok(Self::Stride),
            "average" => Ok(Self::Average),
            other => Err(format!(
                "unknown downmix mode `{other}` (expected `stride` or `average`)"
            )),
        }
    }
}

impl fmt::Display for Downmix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stride => f.write_str("stride"),
            Self::Average => f.write_str("average"),
        }
    }
}

/// Read a 16-bit PCM WAV file.
///
/// # Returns
/// Samples shaped `(channels, frames)` together with the header parameters.
///
/// # Errors
/// * `Error::Audio` if the file is missing or is not a valid WAV container
/// * `Error::UnsupportedFormat` for anything but 16-bit integer PCM
pub fn read_wav<P: AsRef<Path>>(path: P) -> crate::Result<(Array2<i16>, WavInfo)> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(AudioError::Hound)?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(crate::Error::UnsupportedFormat {
            path: path.to_path_buf(),
            bits: spec.bits_per_sample,
            format: match spec.sample_format {
                SampleFormat::Int => "int",
                SampleFormat::Float => "float",
            },
        });
    }
    if spec.channels == 0 {
        return Err(AudioError::UnsupportedChannels.into());
    }

    let channels = spec.channels as usize;
    let mut samples: Vec<i16> = Vec::with_capacity(reader.len() as usize);
    for s in reader.samples::<i16>() {
        samples.push(s.map_err(AudioError::Hound)?);
    }

    let frames = samples.len() / channels;
    let mut data = Array2::<i16>::zeros((channels, frames));
    for frame in 0..frames {
        for ch in 0..channels {
            data[(ch, frame)] = samples[frame * channels + ch];
        }
    }

    let info = WavInfo {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        frames,
    };
    debug!(
        "{}: {} Hz, {} channel(s), {} frames",
        path.display(),
        info.sample_rate,
        info.channels,
        info.frames
    );
    Ok((data, info))
}

/// Reduce `(channels, frames)` audio to a single channel.
///
/// # Example
/// ```
/// use ndarray::array;
/// use svais::io::{Downmix, downmix};
///
/// let stereo = array![[100i16, 200, 300], [-100, 0, 100]];
/// assert_eq!(downmix(&stereo, Downmix::Stride), vec![100.0, 200.0, 300.0]);
/// assert_eq!(downmix(&stereo, Downmix::Average), vec![0.0, 100.0, 200.0]);
/// ```
pub fn downmix(data: &Array2<i16>, mode: Downmix) -> Vec<f64> {
    let (channels, frames) = (data.shape()[0], data.shape()[1]);
    if channels == 0 {
        return Vec::new();
    }
    match mode {
        Downmix::Stride => data.row(0).iter().map(|&s| s as f64).collect(),
        Downmix::Average => (0..frames)
            .map(|frame| {
                let sum: f64 = data.column(frame).iter().map(|&s| s as f64).sum();
                sum / channels as f64
            })
            .collect(),
    }
}

/// Read a WAV file and reduce it to a mono [`Signal`].
///
/// # Errors
/// Same as [`read_wav`].
pub fn load_signal<P: AsRef<Path>>(path: P, mode: Downmix) -> crate::Result<Signal> {
    let path = path.as_ref();
    let (data, info) = read_wav(path)?;
    if info.channels > 1 && mode == Downmix::Stride {
        warn!(
            "{}: {} channels reduced by keeping channel 0 only",
            path.display(),
            info.channels
        );
    }
    Ok(Signal {
        samples: downmix(&data, mode),
        sample_rate: info.sample_rate,
    })
}

/// Generate a pure tone in `[-1, 1]`.
pub fn tone(frequency: f64, sr: u32, duration: f64) -> Vec<f64> {
    let n_samples = (duration * sr as f64) as usize;
    let angular_freq = 2.0 * std::f64::consts::PI * frequency / sr as f64;
    (0..n_samples)
        .map(|i| (angular_freq * i as f64).sin())
        .collect()
}

/// Save audio data to a 16-bit PCM WAV file.
///
/// # Arguments
/// * `path` - Path to save the WAV file
/// * `data` - Audio data with shape (channels, frames), nominally in [-1, 1]
/// * `sample_rate` - Sample rate in Hz
///
/// # Errors
/// Returns `crate::Error::Audio` if the file cannot be written
///
/// # Limitations
/// Values are clipped to [-1.0, 1.0] and quantized to 16-bit.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    data: &Array2<f64>,
    sample_rate: u32,
) -> crate::Result<()> {
    let channels = data.shape().first().copied().unwrap_or(1) as u16;
    let frames = data.shape().get(1).copied().unwrap_or(0);

    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(AudioError::Hound)?;
    for frame in 0..frames {
        for ch in 0..channels as usize {
            let sample = data[(ch, frame)].clamp(-1.0, 1.0);
            let s = (sample * i16::MAX as f64) as i16;
            writer.write_sample(s).map_err(AudioError::Hound)?;
        }
    }
    writer.finalize().map_err(AudioError::Hound)?;
    Ok(())
}
