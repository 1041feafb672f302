//! Final per-symbol output assembly.

use crate::geometry::normalized_rect;
use crate::models::{Barcode, Detection, Size, ViewRect};
use crate::options::ViewOrientation;

/// Assemble the output record for one detection.
///
/// Decoded values are passed through untouched (an empty value stays empty,
/// nothing is synthesized). The structured payload, when present, is already
/// restricted to the supported types at the decoder boundary. A detection
/// without a view-space box is emitted without rectangle fields.
pub fn format_barcode(
    detection: Detection,
    view_box: Option<ViewRect>,
    view: Size,
    orientation: ViewOrientation,
) -> Barcode {
    let normalized = view_box.and_then(|rect| normalized_rect(&rect, view, orientation));
    Barcode {
        raw_value: detection.raw_value,
        display_value: detection.display_value,
        rect: view_box,
        normalized,
        payload: detection.payload,
    }
}
