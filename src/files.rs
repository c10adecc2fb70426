//! Input discovery for the batch pipeline.

use std::path::{Path, PathBuf};

/// File name suffix selecting recordings. Matched case-sensitively.
pub const WAV_SUFFIX: &str = ".wav";

/// List the WAV recordings directly inside `directory`.
///
/// Only the file name is inspected: an entry is kept when it is a regular
/// file whose name ends with [`WAV_SUFFIX`]. `clap.WAV` is skipped, and a
/// text file named `notes.wav` is kept (and will fail to decode later).
/// Subdirectories are not searched. The result is sorted so rows are
/// appended in a stable order.
///
/// # Errors
/// `Error::ReadDir` if the directory is missing or cannot be listed.
///
/// # Example
/// ```no_run
/// use svais::files::list_wav_files;
///
/// for path in list_wav_files("data/clap_sounds").unwrap() {
///     println!("{}", path.display());
/// }
/// ```
pub fn list_wav_files<P: AsRef<Path>>(directory: P) -> crate::Result<Vec<PathBuf>> {
    let dir = directory.as_ref();
    let read_dir_error = |source| crate::Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && has_wav_suffix(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_wav_suffix(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(WAV_SUFFIX.as_bytes()))
}
