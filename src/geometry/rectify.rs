//! Box rectification: decoder-space boxes into corrected image space.
//!
//! The decoder reports bounding boxes in the sensor's native frame, which is
//! assumed landscape: the effective buffer width is the larger of the two raw
//! dimensions and the effective height the smaller, regardless of the order
//! the capture layer reported them in.

use crate::models::{ImageRect, RawRect, Size};

use super::rotation::Rotation;

fn effective_dims(raw_size: Size) -> (f32, f32) {
    let w = raw_size.width.max(raw_size.height) as f32;
    let h = raw_size.width.min(raw_size.height) as f32;
    (w, h)
}

/// Rotate a decoder-reported box into corrected (visually upright) image
/// coordinates.
///
/// Each rotation is the direct mapping out of the landscape sensor frame:
/// `Deg90` rotates the box clockwise into portrait, reflecting against the
/// effective buffer height; `Deg270` rotates counter-clockwise, reflecting
/// against the effective buffer width; `Deg180` reflects both axes.
pub fn rectify(raw: &RawRect, raw_size: Size, rotation: Rotation) -> ImageRect {
    let (effective_w, effective_h) = effective_dims(raw_size);
    match rotation {
        Rotation::Deg0 => ImageRect::new(raw.left, raw.top, raw.width, raw.height),
        Rotation::Deg90 => ImageRect::new(
            effective_h - raw.bottom(),
            raw.left,
            raw.height,
            raw.width,
        ),
        Rotation::Deg180 => ImageRect::new(
            effective_w - raw.right(),
            effective_h - raw.bottom(),
            raw.width,
            raw.height,
        ),
        Rotation::Deg270 => ImageRect::new(
            raw.top,
            effective_w - raw.right(),
            raw.height,
            raw.width,
        ),
    }
}

/// Map a corrected-space box back into the decoder's sensor frame.
///
/// Exact inverse of [`rectify`] for any box: `unrectify(rectify(b)) == b`.
/// Note that this is *not* the same as rectifying under the opposite
/// rotation; `rectify(Deg90)` and `rectify(Deg270)` are both direct
/// rotations out of sensor space, not inverses of each other.
pub fn unrectify(corrected: &ImageRect, raw_size: Size, rotation: Rotation) -> RawRect {
    let (effective_w, effective_h) = effective_dims(raw_size);
    match rotation {
        Rotation::Deg0 => RawRect::new(
            corrected.left,
            corrected.top,
            corrected.width,
            corrected.height,
        ),
        Rotation::Deg90 => RawRect::new(
            corrected.top,
            effective_h - corrected.right(),
            corrected.height,
            corrected.width,
        ),
        Rotation::Deg180 => RawRect::new(
            effective_w - corrected.right(),
            effective_h - corrected.bottom(),
            corrected.width,
            corrected.height,
        ),
        Rotation::Deg270 => RawRect::new(
            effective_w - corrected.bottom(),
            corrected.left,
            corrected.height,
            corrected.width,
        ),
    }
}
