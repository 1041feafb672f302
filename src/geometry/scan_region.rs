//! The centered scan window and its containment test.

use crate::models::{Size, ViewRect};
use crate::options::ScanRatio;

/// Admissible view-space window for the configured ratio, centered and
/// symmetric on all sides.
pub fn scan_window(view: Size, ratio: ScanRatio) -> ViewRect {
    let view_w = view.width as f32;
    let view_h = view.height as f32;
    let scan_w = ratio.width * view_w;
    let scan_h = ratio.height * view_h;
    ViewRect::new(
        (view_w - scan_w) / 2.0,
        (view_h - scan_h) / 2.0,
        scan_w,
        scan_h,
    )
}

/// Full containment, not mere overlap: every edge of the candidate must lie
/// on or inside the window.
pub fn contains(window: &ViewRect, candidate: &ViewRect) -> bool {
    candidate.left >= window.left
        && candidate.top >= window.top
        && candidate.right() <= window.right()
        && candidate.bottom() <= window.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size {
        width: 720,
        height: 1280,
    };

    #[test]
    fn test_window_is_centered() {
        let window = scan_window(VIEW, ScanRatio::new(0.5, 0.25));
        assert_eq!(window, ViewRect::new(180.0, 480.0, 360.0, 320.0));
        // Symmetric margins.
        assert_eq!(window.left, 720.0 - window.right());
        assert_eq!(window.top, 1280.0 - window.bottom());
    }

    #[test]
    fn test_full_ratio_covers_view() {
        let window = scan_window(VIEW, ScanRatio::FULL);
        assert_eq!(window, ViewRect::new(0.0, 0.0, 720.0, 1280.0));
    }

    #[test]
    fn test_containment_requires_every_edge() {
        let window = scan_window(VIEW, ScanRatio::new(0.5, 0.5));
        let inside = ViewRect::new(200.0, 500.0, 100.0, 100.0);
        let overlapping = ViewRect::new(100.0, 500.0, 200.0, 100.0);
        let outside = ViewRect::new(0.0, 0.0, 50.0, 50.0);
        assert!(contains(&window, &inside));
        assert!(!contains(&window, &overlapping));
        assert!(!contains(&window, &outside));
    }

    #[test]
    fn test_edge_touching_counts_as_contained() {
        let window = scan_window(VIEW, ScanRatio::new(0.5, 0.5));
        let flush = ViewRect::new(window.left, window.top, window.width, window.height);
        assert!(contains(&window, &flush));
    }

    #[test]
    fn test_shrinking_ratio_never_admits_more() {
        let candidates = [
            ViewRect::new(300.0, 600.0, 60.0, 60.0),
            ViewRect::new(180.0, 480.0, 360.0, 320.0),
            ViewRect::new(10.0, 10.0, 50.0, 50.0),
            ViewRect::new(650.0, 1200.0, 60.0, 70.0),
        ];
        let mut previous = usize::MAX;
        for ratio in [1.0f32, 0.8, 0.5, 0.25, 0.1, 0.0] {
            let window = scan_window(VIEW, ScanRatio::new(ratio, ratio));
            let admitted = candidates
                .iter()
                .filter(|c| contains(&window, c))
                .count();
            assert!(admitted <= previous, "ratio {} admitted more", ratio);
            previous = admitted;
        }
    }
}
