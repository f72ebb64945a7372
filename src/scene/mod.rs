//! The scene contract: a pure function from local frame to a visual-state tree.

use crate::foundation::core::{Canvas, Fps};

/// Visual-state tree types handed to the rendering host.
pub mod state;

pub use state::{Param, SceneState};

/// Everything a scene may read during one evaluation.
///
/// There is no ambient "current frame" context; the frame is threaded explicitly so a scene can
/// be unit-tested in isolation and evaluated from any worker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Frame offset within this scene's sequence window, starting at 0.
    pub local_frame: u64,
    /// Duration of this scene's sequence window in frames.
    pub duration_frames: u64,
    /// Global composition frame rate.
    pub fps: Fps,
    /// Declared output canvas.
    pub canvas: Canvas,
}

impl SceneCtx {
    /// Local frame as a signed value, convenient for delay arithmetic.
    pub fn frame_i64(&self) -> i64 {
        self.local_frame as i64
    }

    /// Local frame as a float.
    pub fn frame_f64(&self) -> f64 {
        self.local_frame as f64
    }

    /// Normalized progress through the sequence window in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        if self.duration_frames == 0 {
            0.0
        } else {
            self.local_frame as f64 / self.duration_frames as f64
        }
    }
}

/// A visually distinct scene sharing the common evaluation contract.
///
/// Implementations must be pure: the returned tree is a function of `ctx` alone, with no hidden
/// state, wall-clock reads, or unseeded randomness. `Send + Sync` is required so ranges can be
/// evaluated in parallel.
pub trait Scene: Send + Sync {
    /// Stable scene name, also used as the root node name.
    fn name(&self) -> &'static str;

    /// Compute the visual state for one local frame.
    fn evaluate(&self, ctx: &SceneCtx) -> SceneState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_based_fraction() {
        let ctx = SceneCtx {
            local_frame: 30,
            duration_frames: 120,
            fps: Fps::new(30, 1).unwrap(),
            canvas: Canvas {
                width: 1080,
                height: 1920,
            },
        };
        assert_eq!(ctx.progress(), 0.25);
        assert_eq!(ctx.frame_i64(), 30);
    }

    #[test]
    fn zero_duration_progress_is_zero() {
        let ctx = SceneCtx {
            local_frame: 0,
            duration_frames: 0,
            fps: Fps::new(30, 1).unwrap(),
            canvas: Canvas {
                width: 16,
                height: 16,
            },
        };
        assert_eq!(ctx.progress(), 0.0);
    }
}
