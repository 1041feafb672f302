//! scanview - camera barcode scanning geometry
//!
//! A platform-agnostic coordinate pipeline for camera barcode overlays: it
//! takes bounding boxes as reported by a native vision decoder (raw sensor
//! space, arbitrary rotation) and turns them into normalized,
//! orientation-correct rectangles a UI can draw straight over the camera
//! preview, with optional scan-window filtering.
//!
//! The pipeline composes, per frame:
//! 1. rotation correction (sensor buffer to visually-upright image)
//! 2. box rectification into corrected image space
//! 3. aspect-fill scale-and-crop onto the preview view
//! 4. orientation-aware normalization to 0-1 ratios
//! 5. centered scan-window filtering
//!
//! The decoder itself is an opaque collaborator behind
//! [`scanner::BarcodeDecoder`]; platform shims implement it once and share
//! this geometry instead of duplicating it per platform.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error taxonomy (per-frame, never fatal to the session)
pub mod error;
/// Final output assembly per detected symbol
pub mod formatter;
/// Capture frame descriptor
pub mod frame;
/// The pure coordinate pipeline
pub mod geometry;
/// One-shot still-image scanning
pub mod image_scanner;
/// Core data structures (sizes, per-space rectangles, barcodes, formats)
pub mod models;
/// Option resolution from the host's untyped bag
pub mod options;
/// Per-session frame scanning over a decoder
pub mod scanner;

pub use error::{Result, ScanError};
pub use frame::{Frame, FrameSource};
pub use geometry::Rotation;
pub use image_scanner::scan_image;
pub use models::{
    Barcode, Detection, FormatSet, ImageRect, NormalizedRect, RawRect, Size, StructuredPayload,
    SymbolFormat, ViewRect,
};
pub use options::{ScanRatio, ScannerOptions, ViewOrientation};
pub use scanner::{BarcodeDecoder, FrameScanner};

/// Scan one frame with one-off options.
///
/// Convenience wrapper for callers without a persistent session; hosts that
/// scan a video stream should create a [`FrameScanner`] once instead.
pub fn scan_frame<D: BarcodeDecoder>(
    frame: &Frame<'_>,
    options: ScannerOptions,
    decoder: &D,
) -> Result<Vec<Barcode>> {
    FrameScanner::new(options).scan(frame, decoder)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubDecoder(Vec<Detection>);

    impl BarcodeDecoder for StubDecoder {
        fn decode(&self, _frame: &Frame<'_>) -> Result<Vec<Detection>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_scan_frame_identity() {
        let decoder = StubDecoder(vec![Detection {
            bounding_box: Some(RawRect::new(10.0, 20.0, 30.0, 40.0)),
            raw_value: "value".to_string(),
            display_value: "value".to_string(),
            payload: None,
        }]);
        let frame = Frame::from_buffer(&[], 640, 480, 0);
        let barcodes = scan_frame(&frame, ScannerOptions::default(), &decoder).unwrap();
        assert_eq!(barcodes.len(), 1);
        assert_eq!(
            barcodes[0].rect,
            Some(ViewRect::new(10.0, 20.0, 30.0, 40.0))
        );
    }
}
