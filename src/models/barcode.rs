use serde::{Deserialize, Serialize};

use super::rect::{NormalizedRect, RawRect, ViewRect};

/// Structured content the decoder recognized behind the raw value.
///
/// This is a closed set: only the payload types the hosting UI consumes are
/// surfaced; every other type the decoder may report is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StructuredPayload {
    /// Wi-Fi join credentials
    #[serde(rename_all = "camelCase")]
    Wifi {
        /// Network SSID
        ssid: String,
        /// Network password
        password: String,
        /// Decoder's numeric encryption type, passed through undecoded
        encryption_type: i32,
    },
    /// A bookmark-style URL
    #[serde(rename_all = "camelCase")]
    Url {
        /// Page title, may be empty
        title: String,
        /// The URL itself
        url: String,
    },
}

/// One detected symbol as reported by the native decoder, before any
/// geometry has been applied.
///
/// The bounding box is in raw sensor coordinates and may be absent when the
/// decoder could not resolve one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// Bounding box in raw sensor space, if the decoder reported one
    #[serde(default)]
    pub bounding_box: Option<RawRect>,
    /// The decoded bytes rendered as a string
    pub raw_value: String,
    /// The decoder's display rendition of the value
    pub display_value: String,
    /// Structured content, when the decoder recognized one of the supported types
    #[serde(default)]
    pub payload: Option<StructuredPayload>,
}

/// Final per-symbol output record.
///
/// `rect` and `normalized` are absent when the decoder reported no bounding
/// box (the decoded value is still delivered).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    /// The decoded bytes rendered as a string, passed through untouched
    pub raw_value: String,
    /// The decoder's display rendition, passed through untouched
    pub display_value: String,
    /// Bounding box in view-space pixels
    pub rect: Option<ViewRect>,
    /// Bounding box as orientation-rotated fractions of the view
    pub normalized: Option<NormalizedRect>,
    /// Structured content, when present
    pub payload: Option<StructuredPayload>,
}
