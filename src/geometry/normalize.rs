//! View-space boxes into orientation-rotated normalized ratios.

use crate::models::{NormalizedRect, Size, ViewRect};
use crate::options::ViewOrientation;

/// Normalize a view-space box to 0-1 ratios and rotate the normalized frame
/// for the requested UI orientation.
///
/// The portrait ratios are clamped to the view bounds first (out-of-window
/// detections are clamped, not rejected), then the orientation remap is a
/// rotation of the normalized coordinate frame, not of the pixel frame.
///
/// Returns `None` for a degenerate view size; the caller drops the candidate
/// instead of dividing by zero.
pub fn normalized_rect(
    view_box: &ViewRect,
    view: Size,
    orientation: ViewOrientation,
) -> Option<NormalizedRect> {
    if view.is_degenerate() {
        return None;
    }

    let view_w = view.width as f32;
    let view_h = view.height as f32;

    let left = (view_box.left / view_w).clamp(0.0, 1.0);
    let top = (view_box.top / view_h).clamp(0.0, 1.0);
    let width = (view_box.width / view_w).clamp(0.0, 1.0 - left);
    let height = (view_box.height / view_h).clamp(0.0, 1.0 - top);

    // The canonical orientation table. Landscape-right and landscape-left
    // are inverse rotations of each other; upside-down is its own inverse.
    Some(match orientation {
        ViewOrientation::Portrait => NormalizedRect::new(left, top, width, height),
        ViewOrientation::LandscapeRight => {
            NormalizedRect::new(top, 1.0 - left - width, height, width)
        }
        ViewOrientation::PortraitUpsideDown => {
            NormalizedRect::new(1.0 - left - width, 1.0 - top - height, width, height)
        }
        ViewOrientation::LandscapeLeft => {
            NormalizedRect::new(1.0 - top - height, left, height, width)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size {
        width: 720,
        height: 1280,
    };

    fn close(a: &NormalizedRect, b: &NormalizedRect) -> bool {
        (a.left - b.left).abs() < 1e-6
            && (a.top - b.top).abs() < 1e-6
            && (a.width - b.width).abs() < 1e-6
            && (a.height - b.height).abs() < 1e-6
    }

    #[test]
    fn test_portrait_is_plain_division() {
        let rect = normalized_rect(
            &ViewRect::new(72.0, 128.0, 144.0, 256.0),
            VIEW,
            ViewOrientation::Portrait,
        )
        .unwrap();
        assert!(close(&rect, &NormalizedRect::new(0.1, 0.1, 0.2, 0.2)));
    }

    #[test]
    fn test_landscape_right() {
        let rect = normalized_rect(
            &ViewRect::new(72.0, 128.0, 144.0, 256.0),
            VIEW,
            ViewOrientation::LandscapeRight,
        )
        .unwrap();
        assert!(close(&rect, &NormalizedRect::new(0.1, 0.7, 0.2, 0.2)));
    }

    #[test]
    fn test_upside_down_is_self_inverse() {
        let base = NormalizedRect::new(0.1, 0.2, 0.3, 0.4);
        let flipped = NormalizedRect::new(
            1.0 - base.left - base.width,
            1.0 - base.top - base.height,
            base.width,
            base.height,
        );
        let twice = NormalizedRect::new(
            1.0 - flipped.left - flipped.width,
            1.0 - flipped.top - flipped.height,
            flipped.width,
            flipped.height,
        );
        assert!(close(&twice, &base));
    }

    #[test]
    fn test_landscape_pair_is_inverse() {
        // Applying the landscape-right remap then the landscape-left remap
        // to the result must return the original normalized rect.
        let rects = [
            NormalizedRect::new(0.0, 0.0, 1.0, 1.0),
            NormalizedRect::new(0.1, 0.2, 0.3, 0.4),
            NormalizedRect::new(0.5, 0.5, 0.5, 0.5),
            NormalizedRect::new(0.9, 0.0, 0.1, 0.05),
        ];
        for r in rects {
            let lr = NormalizedRect::new(r.top, 1.0 - r.left - r.width, r.height, r.width);
            let ll = NormalizedRect::new(1.0 - lr.top - lr.height, lr.left, lr.height, lr.width);
            assert!(close(&ll, &r), "closure failed for {:?}", r);
        }
    }

    #[test]
    fn test_out_of_bounds_box_is_clamped() {
        let rect = normalized_rect(
            &ViewRect::new(-72.0, 1200.0, 1440.0, 256.0),
            VIEW,
            ViewOrientation::Portrait,
        )
        .unwrap();
        assert_eq!(rect.left, 0.0);
        assert_eq!(rect.width, 1.0);
        assert!(rect.top + rect.height <= 1.0 + 1e-6);
    }

    #[test]
    fn test_degenerate_view_is_none() {
        let rect = normalized_rect(
            &ViewRect::new(0.0, 0.0, 10.0, 10.0),
            Size::new(0, 1280),
            ViewOrientation::Portrait,
        );
        assert!(rect.is_none());
    }
}
