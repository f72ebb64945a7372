use crate::foundation::error::{KineoError, KineoResult};

pub use kurbo::{Point, Vec2};

/// Absolute 0-based frame index in composition timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> KineoResult<Self> {
        if start.0 > end.0 {
            return Err(KineoError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate all frame indices in the range, in timeline order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> KineoResult<Self> {
        if den == 0 {
            return Err(KineoError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(KineoError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }
}

/// Output canvas dimensions in pixels.
///
/// The engine never touches pixels; the canvas is declared composition metadata that scenes use
/// for layout math and that the rendering host uses to size its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_rejects_inverted_bounds() {
        assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
        let r = FrameRange::new(FrameIndex(2), FrameIndex(7)).unwrap();
        assert_eq!(r.len_frames(), 5);
        assert!(r.contains(FrameIndex(2)));
        assert!(!r.contains(FrameIndex(7)));
    }

    #[test]
    fn frame_range_iterates_in_order() {
        let r = FrameRange::new(FrameIndex(3), FrameIndex(6)).unwrap();
        let got: Vec<u64> = r.iter().map(|f| f.0).collect();
        assert_eq!(got, vec![3, 4, 5]);
    }

    #[test]
    fn fps_rejects_zero_components() {
        assert!(Fps::new(0, 1).is_err());
        assert!(Fps::new(30, 0).is_err());
        let fps = Fps::new(30, 1).unwrap();
        assert_eq!(fps.as_f64(), 30.0);
        assert_eq!(fps.frames_to_secs(60.0), 2.0);
    }

    #[test]
    fn canvas_center_is_half_dimensions() {
        let c = Canvas {
            width: 1080,
            height: 1920,
        };
        assert_eq!(c.center(), Point::new(540.0, 960.0));
    }
}
