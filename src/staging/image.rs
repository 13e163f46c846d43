use std::fs;
use std::path::{Path, PathBuf};

use mime_guess::{Mime, mime};

use super::error::StagingError;

/// One mebibyte.
pub(crate) const MIB: u64 = 1024 * 1024;

/// A locally held image file reference that has not been sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    path: PathBuf,
    name: String,
    size: u64,
    mime: Mime,
}

impl StagedImage {
    /// Describes a file without touching the filesystem; the MIME type is
    /// guessed from the extension.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        let path = path.into();
        let mime = mime_guess::from_path(&path).first_or_octet_stream();
        Self {
            name: display_name(&path),
            path,
            size,
            mime,
        }
    }

    /// Inspects a file on disk: size from metadata, MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, StagingError> {
        let metadata = fs::metadata(path).map_err(|source| StagingError::Unreadable {
            name: display_name(path),
            source,
        })?;
        if !metadata.is_file() {
            return Err(StagingError::NotAFile(path.to_path_buf()));
        }
        Ok(Self::new(path, metadata.len()))
    }

    /// Returns the path the image was staged from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the guessed MIME type.
    pub fn mime(&self) -> &Mime {
        &self.mime
    }

    /// Returns `true` if the MIME type is `image/*`.
    pub fn is_image(&self) -> bool {
        self.mime.type_() == mime::IMAGE
    }

    /// Display text for the image, e.g. `villa.jpg (2.0 MiB, image/jpeg)`.
    pub fn preview_label(&self) -> String {
        format!("{} ({}, {})", self.name, format_size(self.size), self.mime)
    }
}

/// Loads every file named in a `,`-separated list of paths.
///
/// A directory stands for the regular files directly inside it, in name
/// order. Files that cannot be inspected are returned as errors alongside
/// the loaded images so the caller can report each one.
pub fn load_batch(input: &str) -> (Vec<StagedImage>, Vec<StagingError>) {
    let mut images = Vec::new();
    let mut errors = Vec::new();

    for path in input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(expand_home)
    {
        if path.is_dir() {
            match dir_files(&path) {
                Ok(files) => {
                    for file in files {
                        match StagedImage::from_path(&file) {
                            Ok(image) => images.push(image),
                            Err(e) => errors.push(e),
                        }
                    }
                }
                Err(source) => errors.push(StagingError::Unreadable {
                    name: display_name(&path),
                    source,
                }),
            }
        } else {
            match StagedImage::from_path(&path) {
                Ok(image) => images.push(image),
                Err(e) => errors.push(e),
            }
        }
    }

    (images, errors)
}

/// Loads the single file named by `input`.
pub fn load_single(input: &str) -> Result<StagedImage, StagingError> {
    StagedImage::from_path(&expand_home(input.trim()))
}

fn dir_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Expands a leading `~/` to the home directory.
fn expand_home(input: &str) -> PathBuf {
    match (input.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
