//! Scanner option resolution.
//!
//! The hosting application hands over a loosely-typed options bag (JSON).
//! Resolution is total: malformed or missing fields always degrade to a
//! permissive default (detect everything, no scan-window restriction,
//! portrait orientation) rather than failing the session.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FormatSet, Size};

/// Fractional extents of the centered scan window, each in [0, 1].
///
/// `{1, 1}` means the whole view is admissible and the scan-region filter is
/// skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanRatio {
    /// Window width as a fraction of the view width
    pub width: f32,
    /// Window height as a fraction of the view height
    pub height: f32,
}

impl ScanRatio {
    /// The unrestricted window
    pub const FULL: Self = Self {
        width: 1.0,
        height: 1.0,
    };

    /// Create a ratio, clamping each component to [0, 1] independently
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.clamp(0.0, 1.0),
            height: height.clamp(0.0, 1.0),
        }
    }

    /// True if the window covers the whole view
    pub fn is_full(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }
}

impl Default for ScanRatio {
    fn default() -> Self {
        Self::FULL
    }
}

/// UI orientation the normalized rectangles are rotated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewOrientation {
    /// Device upright (default)
    #[default]
    Portrait,
    /// Device rotated 90° counter-clockwise
    LandscapeLeft,
    /// Device rotated 90° clockwise
    LandscapeRight,
    /// Device upside down
    PortraitUpsideDown,
}

impl ViewOrientation {
    /// Match one of the four known orientation tags (case-sensitive, exact)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "portrait" => Some(Self::Portrait),
            "landscape-left" => Some(Self::LandscapeLeft),
            "landscape-right" => Some(Self::LandscapeRight),
            "portrait-upside-down" => Some(Self::PortraitUpsideDown),
            _ => None,
        }
    }

    /// The string tag for this orientation
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
            Self::PortraitUpsideDown => "portrait-upside-down",
        }
    }
}

/// Fully-resolved scanner settings.
///
/// Constructed once when the scanning session is created and immutable for
/// its lifetime; every frame reads the same resolved values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerOptions {
    /// Symbologies the decoder should report
    pub formats: FormatSet,
    /// Centered scan-window extents
    pub ratio: ScanRatio,
    /// UI orientation for the normalized output rectangles
    pub orientation: ViewOrientation,
    /// On-screen preview dimensions; `None` means map 1:1 onto the corrected image
    pub view_size: Option<Size>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            formats: FormatSet::ALL,
            ratio: ScanRatio::FULL,
            orientation: ViewOrientation::Portrait,
            view_size: None,
        }
    }
}

impl ScannerOptions {
    /// Resolve an untyped options bag into defaulted settings.
    ///
    /// Total over all inputs; never errors.
    pub fn resolve(bag: Option<&Value>) -> Self {
        let Some(bag) = bag else {
            return Self::default();
        };
        Self {
            formats: resolve_formats(bag.get("formats")),
            ratio: resolve_ratio(bag.get("ratio")),
            orientation: resolve_orientation(bag.get("orientation")),
            view_size: resolve_view_size(bag.get("viewSize")),
        }
    }
}

fn resolve_formats(value: Option<&Value>) -> FormatSet {
    match value.and_then(Value::as_array) {
        Some(names) if !names.is_empty() => {
            // A non-string entry degrades the whole set, like an unknown name.
            FormatSet::from_names(names.iter().map(|v| v.as_str().unwrap_or("all")))
        }
        _ => FormatSet::ALL,
    }
}

fn resolve_ratio(value: Option<&Value>) -> ScanRatio {
    let component = |key: &str| {
        value
            .and_then(|v| v.get(key))
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or(1.0)
    };
    ScanRatio::new(component("width"), component("height"))
}

fn resolve_orientation(value: Option<&Value>) -> ViewOrientation {
    value
        .and_then(Value::as_str)
        .and_then(ViewOrientation::from_tag)
        .unwrap_or_default()
}

fn resolve_view_size(value: Option<&Value>) -> Option<Size> {
    let value = value?;
    let dimension = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    };
    // Both fields must be present and numeric, or the value is treated as absent.
    let width = dimension("width")?;
    let height = dimension("height")?;
    Some(Size::new(width.max(0.0) as u32, height.max(0.0) as u32))
}
