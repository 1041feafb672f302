//! Error types and handling.
//!
//! All failures are local to a single frame or image scan; nothing here is
//! fatal to the scanning session, and option resolution never errors at all.

use std::path::PathBuf;
use thiserror::Error;

/// A failed scan of one frame or image.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested image file does not exist
    #[error("image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// The image file exists but could not be read as an image
    #[error("could not read image {}: {reason}", path.display())]
    ImageUnreadable {
        /// Path of the offending file
        path: PathBuf,
        /// What the image reader reported
        reason: String,
    },

    /// The native decoder failed for this frame
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Crate-wide result alias
pub type Result<T, E = ScanError> = std::result::Result<T, E>;
