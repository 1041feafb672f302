use serde::{Deserialize, Serialize};

/// Integer pixel dimensions.
///
/// The same struct describes both the raw sensor buffer and the corrected
/// ("visually upright") image; function signatures state which one they
/// expect. See [`crate::geometry::rotation`] for the raw-to-corrected swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width-over-height aspect ratio. Callers must guard degenerate sizes.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Axis-aligned box in raw sensor coordinates (the unrotated capture buffer,
/// as reported by the decoder).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRect {
    /// Left edge in pixels
    pub left: f32,
    /// Top edge in pixels
    pub top: f32,
    /// Box width in pixels
    pub width: f32,
    /// Box height in pixels
    pub height: f32,
}

/// Axis-aligned box in corrected image coordinates (after compensating for
/// sensor rotation, i.e. visually upright).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRect {
    /// Left edge in pixels
    pub left: f32,
    /// Top edge in pixels
    pub top: f32,
    /// Box width in pixels
    pub width: f32,
    /// Box height in pixels
    pub height: f32,
}

/// Axis-aligned box in view coordinates (relative to the on-screen preview,
/// after the aspect-fill scale and crop).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewRect {
    /// Left edge in pixels
    pub left: f32,
    /// Top edge in pixels
    pub top: f32,
    /// Box width in pixels
    pub width: f32,
    /// Box height in pixels
    pub height: f32,
}

/// Box expressed as fractions (0-1) of the view dimensions, already rotated
/// for the requested UI orientation.
///
/// Invariant (clamped, not asserted): `left + width <= 1` and
/// `top + height <= 1`, all fields non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Left edge as a fraction of the view width
    pub left: f32,
    /// Top edge as a fraction of the view height
    pub top: f32,
    /// Width as a fraction of the view width
    pub width: f32,
    /// Height as a fraction of the view height
    pub height: f32,
}

macro_rules! pixel_rect_impl {
    ($rect:ty) => {
        impl $rect {
            /// Create a new box from its left/top corner and extent
            pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
                Self {
                    left,
                    top,
                    width,
                    height,
                }
            }

            /// Right edge (`left + width`)
            pub fn right(&self) -> f32 {
                self.left + self.width
            }

            /// Bottom edge (`top + height`)
            pub fn bottom(&self) -> f32 {
                self.top + self.height
            }
        }
    };
}

pixel_rect_impl!(RawRect);
pixel_rect_impl!(ImageRect);
pixel_rect_impl!(ViewRect);

impl NormalizedRect {
    /// Create a new normalized box
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
