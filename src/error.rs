use std::path::PathBuf;

/// Crate-level error type for feature extraction and CSV logging.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The WAV file decodes, but not as 16-bit integer PCM.
    #[error("{}: unsupported sample format {format} ({bits} bits), expected 16-bit integer PCM", path.display())]
    UnsupportedFormat {
        path: PathBuf,
        bits: u16,
        format: &'static str,
    },

    /// The input directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Audio container or decoding errors.
    #[error(transparent)]
    Audio(#[from] crate::io::AudioError),

    /// File I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for svais operations.
pub type Result<T> = std::result::Result<T, Error>;
