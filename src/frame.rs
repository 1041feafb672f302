//! Capture frame descriptor, as delivered by the frame-delivery collaborator.

use std::path::Path;

/// Where the pixels live. The geometry pipeline never reads them; the source
/// is handed through to the decoder untouched.
#[derive(Debug, Clone, Copy)]
pub enum FrameSource<'a> {
    /// Raw pixel buffer from the camera
    Buffer(&'a [u8]),
    /// Path to a still image on disk
    Path(&'a Path),
}

/// One captured frame or still image to scan.
///
/// `width`/`height` are the dimensions of the unrotated buffer as reported by
/// the sensor; `rotation` is the capture layer's rotation metadata in degrees.
/// Frames are transient: built per invocation, never retained.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The pixel source for the decoder
    pub source: FrameSource<'a>,
    /// Raw buffer width in pixels (pre-rotation)
    pub width: u32,
    /// Raw buffer height in pixels (pre-rotation)
    pub height: u32,
    /// Rotation metadata in degrees
    pub rotation: i32,
}

impl<'a> Frame<'a> {
    /// Frame over a camera buffer with its rotation metadata
    pub fn from_buffer(data: &'a [u8], width: u32, height: u32, rotation: i32) -> Self {
        Self {
            source: FrameSource::Buffer(data),
            width,
            height,
            rotation,
        }
    }

    /// Frame over a still image on disk.
    ///
    /// Image loaders apply EXIF rotation before reporting dimensions, so the
    /// frame is treated as already upright.
    pub fn from_path(path: &'a Path, width: u32, height: u32) -> Self {
        Self {
            source: FrameSource::Path(path),
            width,
            height,
            rotation: 0,
        }
    }
}
