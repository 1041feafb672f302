//! Per-session frame scanning.
//!
//! [`FrameScanner`] holds the resolved options for one scanning session and
//! runs the geometry pipeline over each frame's detections. The native
//! decoder sits behind [`BarcodeDecoder`]; at most one decode is outstanding
//! per frame and a failed decode fails only that frame.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::formatter::format_barcode;
use crate::frame::Frame;
use crate::geometry::{self, Rotation, ViewTransform};
use crate::models::{Barcode, Detection, Size, ViewRect};
use crate::options::ScannerOptions;

/// The opaque native decode capability.
///
/// Implementations wrap the platform's vision library: they read the frame's
/// pixels and return one [`Detection`] per recognized symbol, with bounding
/// boxes in the sensor's native frame. A platform shim should construct its
/// native decoder once from [`ScannerOptions::formats`] and rebuild it only
/// if the resolved format set actually changes.
pub trait BarcodeDecoder {
    /// Decode every symbol the native library finds in the frame
    fn decode(&self, frame: &Frame<'_>) -> Result<Vec<Detection>>;
}

/// One scanning session: resolved options plus the pipeline that maps each
/// frame's detections onto the preview view.
#[derive(Debug, Clone)]
pub struct FrameScanner {
    options: ScannerOptions,
}

impl FrameScanner {
    /// Create a session from already-resolved options
    pub fn new(options: ScannerOptions) -> Self {
        debug!(?options, "scanner session created");
        Self { options }
    }

    /// Create a session straight from the host's untyped options bag
    pub fn from_bag(bag: Option<&Value>) -> Self {
        Self::new(ScannerOptions::resolve(bag))
    }

    /// The session's resolved options
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Scan one frame: decode, then map every detection through the geometry
    /// pipeline, preserving the decoder's detection order.
    ///
    /// Runs to completion before the next frame is accepted; back-pressure
    /// (dropping frames while a scan is in flight) belongs to the caller.
    pub fn scan<D: BarcodeDecoder>(&self, frame: &Frame<'_>, decoder: &D) -> Result<Vec<Barcode>> {
        let rotation = Rotation::from_degrees(frame.rotation);
        let raw_size = Size::new(frame.width, frame.height);
        let corrected = rotation.corrected_size(raw_size);
        let view = geometry::safe_view_size(corrected, self.options.view_size);
        let transform = ViewTransform::aspect_fill(corrected, view);

        let detections = decoder.decode(frame)?;
        debug!(
            count = detections.len(),
            rotation = rotation.degrees(),
            "frame decoded"
        );

        // Explicit fast path: an unrestricted ratio skips the window math
        // entirely, and boxless detections pass through.
        let window = (!self.options.ratio.is_full())
            .then(|| geometry::scan_window(view, self.options.ratio));

        let mut barcodes = Vec::with_capacity(detections.len());
        for detection in detections {
            let view_box: Option<ViewRect> = detection
                .bounding_box
                .map(|raw| transform.apply(&geometry::rectify(&raw, raw_size, rotation)));

            if let Some(window) = &window {
                match &view_box {
                    Some(candidate) if geometry::contains(window, candidate) => {}
                    Some(_) => continue,
                    None => {
                        warn!(value = %detection.raw_value, "dropping boxless detection under restricted ratio");
                        continue;
                    }
                }
            }

            barcodes.push(format_barcode(
                detection,
                view_box,
                view,
                self.options.orientation,
            ));
        }
        Ok(barcodes)
    }
}
