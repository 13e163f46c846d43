use std::path::PathBuf;

use super::image::MIB;

/// Errors that can occur while staging an image file.
#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    /// The file could not be inspected (missing, permission denied, ...).
    #[error("{name} - {source}")]
    Unreadable {
        /// File name as shown to the user.
        name: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a regular file.
    #[error("{} - Not a file", .0.display())]
    NotAFile(PathBuf),

    /// The file's MIME type is not `image/*`.
    #[error("{name} - Not an image file")]
    NotAnImage {
        /// File name as shown to the user.
        name: String,
        /// The guessed MIME type.
        mime: String,
    },

    /// The file is larger than the configured limit.
    #[error("{name} - Exceeds {}MB limit", .limit / MIB)]
    TooLarge {
        /// File name as shown to the user.
        name: String,
        /// File size in bytes.
        size: u64,
        /// Maximum accepted size in bytes.
        limit: u64,
    },
}

impl StagingError {
    /// Message shown inline under the main image picker.
    pub fn inline_message(&self) -> String {
        match self {
            Self::Unreadable { name, source } => format!("Could not read {name}: {source}"),
            Self::NotAFile(_) => "Please select an image".to_string(),
            Self::NotAnImage { .. } => "Please select an image file (JPEG, PNG, GIF)".to_string(),
            Self::TooLarge { limit, .. } => format!("Image must be less than {}MB", limit / MIB),
        }
    }

    /// One-shot notice shown when a file is dropped from an additional-images batch.
    pub fn notice(&self) -> String {
        format!("Skipped: {self}")
    }
}
