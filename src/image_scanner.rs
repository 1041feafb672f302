//! One-shot still-image scanning.
//!
//! Unlike the per-frame session, options may differ per call here, matching
//! the host API where still scans pass their options alongside the path.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ScanError};
use crate::frame::Frame;
use crate::models::Barcode;
use crate::options::ScannerOptions;
use crate::scanner::{BarcodeDecoder, FrameScanner};

/// Scan a still image on disk.
///
/// The file's dimensions are read without a full decode; the pixels are left
/// to the decoder. Image files are treated as rotation-0 (loaders apply EXIF
/// correction before reporting dimensions). A missing or unreadable file
/// fails this call only.
pub fn scan_image<D: BarcodeDecoder>(
    path: &Path,
    bag: Option<&Value>,
    decoder: &D,
) -> Result<Vec<Barcode>> {
    if !path.exists() {
        return Err(ScanError::ImageNotFound(path.to_path_buf()));
    }

    let (width, height) =
        image::image_dimensions(path).map_err(|err| ScanError::ImageUnreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    debug!(path = %path.display(), width, height, "scanning still image");

    let frame = Frame::from_path(path, width, height);
    let scanner = FrameScanner::new(ScannerOptions::resolve(bag));
    scanner.scan(&frame, decoder)
}
