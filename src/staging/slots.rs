use tracing::{info, warn};

use super::error::StagingError;
use super::image::{MIB, StagedImage};

/// Default per-file size limit.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * MIB;

/// Result of staging a batch of additional images.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Number of files appended to the additional list.
    pub accepted: usize,
    /// Files that were dropped, in input order.
    pub rejected: Vec<StagingError>,
}

impl BatchOutcome {
    /// One notice per dropped file.
    pub fn notices(&self) -> Vec<String> {
        self.rejected.iter().map(StagingError::notice).collect()
    }
}

/// The main image slot and the ordered list of additional images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStaging {
    main: Option<StagedImage>,
    additional: Vec<StagedImage>,
    max_bytes: u64,
}

impl Default for ImageStaging {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}

impl ImageStaging {
    /// Creates empty staging that accepts images up to `max_bytes` each.
    pub fn new(max_bytes: u64) -> Self {
        Self {
            main: None,
            additional: Vec::new(),
            max_bytes,
        }
    }

    /// Returns the per-file size limit in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Checks type first, then size.
    fn check(&self, image: &StagedImage) -> Result<(), StagingError> {
        if !image.is_image() {
            return Err(StagingError::NotAnImage {
                name: image.name().to_string(),
                mime: image.mime().to_string(),
            });
        }
        if image.size() > self.max_bytes {
            return Err(StagingError::TooLarge {
                name: image.name().to_string(),
                size: image.size(),
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Replaces the main image. On rejection the current main image is kept.
    pub fn accept_main(&mut self, image: StagedImage) -> Result<(), StagingError> {
        if let Err(e) = self.check(&image) {
            warn!(file = image.name(), error = %e, "main image rejected");
            return Err(e);
        }
        info!(file = image.name(), size = image.size(), "main image staged");
        self.main = Some(image);
        Ok(())
    }

    /// Appends every acceptable image in `batch`, keeping input order.
    ///
    /// Rejection is per file: one bad file does not stop the others.
    pub fn accept_additional(&mut self, batch: Vec<StagedImage>) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for image in batch {
            match self.check(&image) {
                Ok(()) => {
                    self.additional.push(image);
                    outcome.accepted += 1;
                }
                Err(e) => {
                    warn!(file = image.name(), error = %e, "additional image skipped");
                    outcome.rejected.push(e);
                }
            }
        }
        info!(
            accepted = outcome.accepted,
            rejected = outcome.rejected.len(),
            total = self.additional.len(),
            "additional images staged"
        );
        outcome
    }

    /// Removes the additional image at `index`, preserving the order of the rest.
    ///
    /// Returns `None` and changes nothing if `index` is out of range.
    pub fn remove_additional(&mut self, index: usize) -> Option<StagedImage> {
        (index < self.additional.len()).then(|| self.additional.remove(index))
    }

    /// Empties the main image slot.
    pub fn clear_main(&mut self) -> Option<StagedImage> {
        self.main.take()
    }

    /// Returns the main image, if staged.
    pub fn main(&self) -> Option<&StagedImage> {
        self.main.as_ref()
    }

    /// Returns `true` if a main image is staged.
    pub fn has_main(&self) -> bool {
        self.main.is_some()
    }

    /// Returns the additional images in order.
    pub fn additional(&self) -> &[StagedImage] {
        &self.additional
    }
}
