//! Canonical sensor rotation states and the raw-to-corrected size swap.

use crate::models::Size;

/// Sensor rotation relative to upright, canonicalized to the four cardinal
/// states. Derived from capture-frame metadata on every invocation; never
/// user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Buffer is already upright
    #[default]
    Deg0,
    /// Buffer must be rotated 90° clockwise to become upright
    Deg90,
    /// Buffer is upside down
    Deg180,
    /// Buffer must be rotated 90° counter-clockwise to become upright
    Deg270,
}

impl Rotation {
    /// Canonicalize a platform-reported rotation in degrees.
    ///
    /// Any multiple-of-360 wraparound and negative values are handled;
    /// non-cardinal values fall back to `Deg0`.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => Self::Deg90,
            180 => Self::Deg180,
            270 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    /// Map an EXIF orientation tag (1-8) onto a rotation state.
    ///
    /// Mirrored variants collapse onto their non-mirrored equivalent: the
    /// geometry pipeline does not model horizontal flips, so a front-camera
    /// mirror only affects which way the host renders the preview, not the
    /// rectangle math. Out-of-range tags are treated as upright.
    pub fn from_exif(tag: u16) -> Self {
        match tag {
            1 | 2 => Self::Deg0,
            3 | 4 => Self::Deg180,
            5 | 6 => Self::Deg90,
            7 | 8 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    /// The rotation in degrees (0, 90, 180 or 270)
    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// True for the quarter turns that swap width and height
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// The rotation that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Self::Deg90 => Self::Deg270,
            Self::Deg270 => Self::Deg90,
            other => other,
        }
    }

    /// Orientation-corrected image size.
    ///
    /// The sensor reports the dimensions of the unrotated buffer; for quarter
    /// turns the visually-upright image has them swapped.
    pub fn corrected_size(self, raw: Size) -> Size {
        if self.is_quarter_turn() {
            Size::new(raw.height, raw.width)
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(90), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(180), Rotation::Deg180);
        assert_eq!(Rotation::from_degrees(270), Rotation::Deg270);
    }

    #[test]
    fn test_from_degrees_wraps() {
        assert_eq!(Rotation::from_degrees(450), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(-90), Rotation::Deg270);
        assert_eq!(Rotation::from_degrees(-360), Rotation::Deg0);
    }

    #[test]
    fn test_from_degrees_non_cardinal() {
        assert_eq!(Rotation::from_degrees(45), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(91), Rotation::Deg0);
    }

    #[test]
    fn test_exif_mirrored_collapse() {
        assert_eq!(Rotation::from_exif(2), Rotation::from_exif(1));
        assert_eq!(Rotation::from_exif(4), Rotation::from_exif(3));
        assert_eq!(Rotation::from_exif(5), Rotation::from_exif(6));
        assert_eq!(Rotation::from_exif(7), Rotation::from_exif(8));
        assert_eq!(Rotation::from_exif(0), Rotation::Deg0);
        assert_eq!(Rotation::from_exif(9), Rotation::Deg0);
    }

    #[test]
    fn test_corrected_size_swaps_quarter_turns() {
        let raw = Size::new(1280, 720);
        assert_eq!(Rotation::Deg0.corrected_size(raw), raw);
        assert_eq!(Rotation::Deg180.corrected_size(raw), raw);
        assert_eq!(Rotation::Deg90.corrected_size(raw), Size::new(720, 1280));
        assert_eq!(Rotation::Deg270.corrected_size(raw), Size::new(720, 1280));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Rotation::Deg90.inverse(), Rotation::Deg270);
        assert_eq!(Rotation::Deg270.inverse(), Rotation::Deg90);
        assert_eq!(Rotation::Deg180.inverse(), Rotation::Deg180);
        assert_eq!(Rotation::Deg0.inverse(), Rotation::Deg0);
    }
}
