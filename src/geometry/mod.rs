//! The pure coordinate pipeline.
//!
//! Every stage states which coordinate space it consumes and produces:
//! - rotation: raw sensor size -> corrected image size
//! - rectify: decoder boxes (sensor space) -> corrected image space
//! - view: corrected image space -> view space (aspect-fill scale + crop)
//! - normalize: view space -> orientation-rotated 0-1 ratios
//! - scan_region: the admissible window and its containment test, in view space
//!
//! All functions are pure; nothing here touches the decoder or the host.

/// View-space boxes into orientation-rotated normalized ratios
pub mod normalize;
/// Decoder-space boxes into corrected image space
pub mod rectify;
/// Canonical rotation states and the raw-to-corrected size swap
pub mod rotation;
/// The centered scan window and full-containment filtering
pub mod scan_region;
/// Aspect-fill mapping onto the preview view
pub mod view;

pub use normalize::normalized_rect;
pub use rectify::{rectify, unrectify};
pub use rotation::Rotation;
pub use scan_region::{contains, scan_window};
pub use view::{ViewTransform, safe_view_size};
