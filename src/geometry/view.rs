//! Aspect-fill mapping from corrected image space onto the preview view.

use crate::models::{ImageRect, Size, ViewRect};

/// Uniform scale plus center-crop offsets taking corrected image coordinates
/// to view coordinates.
///
/// Aspect-fill semantics: the scaled image covers the whole view and the
/// overflow in one dimension is cropped symmetrically. Exactly one of `dx`,
/// `dy` is non-zero unless the aspects match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor applied to both axes
    pub scale: f32,
    /// Horizontal crop offset in view pixels
    pub dx: f32,
    /// Vertical crop offset in view pixels
    pub dy: f32,
}

impl ViewTransform {
    /// The do-nothing transform
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Compute the aspect-fill transform from a corrected image onto a view.
    ///
    /// Degenerate sizes (a zero dimension on either side) yield the identity
    /// transform instead of dividing by zero.
    pub fn aspect_fill(image: Size, view: Size) -> Self {
        if image.is_degenerate() || view.is_degenerate() {
            return Self::IDENTITY;
        }

        let image_aspect = image.aspect();
        let view_aspect = view.aspect();

        if image_aspect > view_aspect {
            // Image relatively wider: match heights, crop the sides.
            let scale = view.height as f32 / image.height as f32;
            Self {
                scale,
                dx: (image.width as f32 * scale - view.width as f32) / 2.0,
                dy: 0.0,
            }
        } else if view_aspect > image_aspect {
            // View relatively wider: match widths, crop top and bottom.
            let scale = view.width as f32 / image.width as f32;
            Self {
                scale,
                dx: 0.0,
                dy: (image.height as f32 * scale - view.height as f32) / 2.0,
            }
        } else {
            // Equal aspect: uniform scale, no cropping. Reduces to the
            // identity when the sizes are equal.
            Self {
                scale: view.width as f32 / image.width as f32,
                dx: 0.0,
                dy: 0.0,
            }
        }
    }

    /// True if this transform leaves coordinates unchanged
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.dx == 0.0 && self.dy == 0.0
    }

    /// Transform a corrected-space box into view space.
    ///
    /// Edges are transformed individually and width/height derived from the
    /// transformed edges, so rounding never compounds across fields.
    pub fn apply(&self, rect: &ImageRect) -> ViewRect {
        let left = rect.left * self.scale - self.dx;
        let top = rect.top * self.scale - self.dy;
        let right = rect.right() * self.scale - self.dx;
        let bottom = rect.bottom() * self.scale - self.dy;
        ViewRect::new(left, top, right - left, bottom - top)
    }
}

/// Canonicalize the configured view size.
///
/// The pipeline always treats the configured view as portrait-oriented
/// (`width <= height`); callers in landscape must pre-swap. Absent a
/// configured size, the corrected image size is used and the view transform
/// reduces to the identity.
pub fn safe_view_size(corrected: Size, configured: Option<Size>) -> Size {
    match configured {
        Some(view) => Size::new(
            view.width.min(view.height),
            view.width.max(view.height),
        ),
        None => corrected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_sizes_is_identity() {
        let transform = ViewTransform::aspect_fill(Size::new(720, 1280), Size::new(720, 1280));
        assert!(transform.is_identity());
    }

    #[test]
    fn test_equal_aspect_scales_without_crop() {
        let transform = ViewTransform::aspect_fill(Size::new(720, 1280), Size::new(360, 640));
        assert_eq!(transform.scale, 0.5);
        assert_eq!(transform.dx, 0.0);
        assert_eq!(transform.dy, 0.0);
    }

    #[test]
    fn test_wider_image_crops_horizontally() {
        // 1280x720 image into a 720x720 view: heights match at scale 1,
        // 560 excess pixels split evenly on both sides.
        let transform = ViewTransform::aspect_fill(Size::new(1280, 720), Size::new(720, 720));
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.dx, 280.0);
        assert_eq!(transform.dy, 0.0);
    }

    #[test]
    fn test_taller_image_crops_vertically() {
        let transform = ViewTransform::aspect_fill(Size::new(720, 1280), Size::new(720, 720));
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.dx, 0.0);
        assert_eq!(transform.dy, 280.0);
    }

    #[test]
    fn test_exactly_one_crop_axis() {
        let cases = [
            (Size::new(1280, 720), Size::new(360, 640)),
            (Size::new(720, 1280), Size::new(640, 360)),
            (Size::new(640, 480), Size::new(1080, 1920)),
            (Size::new(480, 640), Size::new(1920, 1080)),
        ];
        for (image, view) in cases {
            let t = ViewTransform::aspect_fill(image, view);
            assert!(
                (t.dx == 0.0) != (t.dy == 0.0) || (t.dx == 0.0 && t.dy == 0.0),
                "both crop offsets non-zero for {:?} -> {:?}",
                image,
                view
            );
            assert!(t.dx >= 0.0 && t.dy >= 0.0);
        }
    }

    #[test]
    fn test_degenerate_sizes_guarded() {
        assert!(ViewTransform::aspect_fill(Size::new(0, 720), Size::new(360, 640)).is_identity());
        assert!(ViewTransform::aspect_fill(Size::new(720, 1280), Size::new(360, 0)).is_identity());
    }

    #[test]
    fn test_apply_transforms_edges() {
        let transform = ViewTransform {
            scale: 0.5,
            dx: 100.0,
            dy: 0.0,
        };
        let mapped = transform.apply(&ImageRect::new(400.0, 200.0, 300.0, 100.0));
        assert_eq!(mapped, ViewRect::new(100.0, 100.0, 150.0, 50.0));
        assert_eq!(mapped.right(), 250.0);
    }

    #[test]
    fn test_safe_view_size_canonicalizes_to_portrait() {
        let corrected = Size::new(720, 1280);
        assert_eq!(
            safe_view_size(corrected, Some(Size::new(640, 360))),
            Size::new(360, 640)
        );
        assert_eq!(
            safe_view_size(corrected, Some(Size::new(360, 640))),
            Size::new(360, 640)
        );
        assert_eq!(safe_view_size(corrected, None), corrected);
    }
}
