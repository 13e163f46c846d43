//! Image staging: the main image slot and the additional-image gallery.
//!
//! Nothing here uploads anything. Files are inspected on disk (size and
//! extension-derived MIME type) and kept as references until submission,
//! where only their names are used.

mod error;
mod image;
mod slots;

pub use error::StagingError;
pub use image::{StagedImage, load_batch, load_single};
pub use slots::{BatchOutcome, DEFAULT_MAX_IMAGE_BYTES, ImageStaging};
