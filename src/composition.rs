//! The composition: ordered scenes with durations, declared metadata, and per-frame evaluation.

use std::fmt;

use crate::foundation::core::{Canvas, FrameIndex, Fps};
use crate::foundation::error::{KineoError, KineoResult};
use crate::scene::{Scene, SceneCtx, SceneState};
use crate::timeline::Timeline;

/// A scene bound to one timeline sequence.
pub struct SceneEntry {
    /// The scene evaluated while this sequence is active.
    pub scene: Box<dyn Scene>,
    /// Sequence duration in frames.
    pub duration_frames: u64,
}

/// A fully evaluated frame: the unit handed to the rendering host.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Evaluated global frame index.
    pub frame: FrameIndex,
    /// Index of the active sequence.
    pub sequence_index: usize,
    /// Name of the active scene.
    pub scene: String,
    /// Visual-state tree for this frame.
    pub state: SceneState,
}

/// An ordered list of scenes with durations plus declared composition metadata.
///
/// The sequence list is the source of truth for the total duration; the independently declared
/// total is validated against it at construction time. A mismatch is a fatal configuration
/// error, reported before any frame renders.
pub struct Composition {
    fps: Fps,
    canvas: Canvas,
    declared_duration_frames: u64,
    entries: Vec<SceneEntry>,
    timeline: Timeline,
}

// Scene boxes are opaque; report their names instead.
impl fmt::Debug for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("fps", &self.fps)
            .field("canvas", &self.canvas)
            .field("declared_duration_frames", &self.declared_duration_frames)
            .field(
                "scenes",
                &self
                    .entries
                    .iter()
                    .map(|e| e.scene.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Composition {
    /// Build and validate a composition.
    pub fn new(
        fps: Fps,
        canvas: Canvas,
        declared_duration_frames: u64,
        scenes: Vec<(Box<dyn Scene>, u64)>,
    ) -> KineoResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(KineoError::validation("canvas width/height must be > 0"));
        }

        let durations: Vec<u64> = scenes.iter().map(|(_, d)| *d).collect();
        let timeline = Timeline::new(&durations)?;

        let computed = timeline.total_frames();
        if computed != declared_duration_frames {
            return Err(KineoError::DurationMismatch {
                declared: declared_duration_frames,
                computed,
            });
        }

        let entries = scenes
            .into_iter()
            .map(|(scene, duration_frames)| SceneEntry {
                scene,
                duration_frames,
            })
            .collect();

        Ok(Self {
            fps,
            canvas,
            declared_duration_frames,
            entries,
            timeline,
        })
    }

    /// Validate composition invariants.
    ///
    /// `new` already validates; this re-check exists for callers that held the composition across
    /// configuration reloads and want the fail-fast guarantee again.
    pub fn validate(&self) -> KineoResult<()> {
        let computed = self.timeline.total_frames();
        if computed != self.declared_duration_frames {
            return Err(KineoError::DurationMismatch {
                declared: self.declared_duration_frames,
                computed,
            });
        }
        Ok(())
    }

    /// Declared composition frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Declared output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Total duration in frames.
    pub fn duration_frames(&self) -> u64 {
        self.declared_duration_frames
    }

    /// Number of sequences in the timeline.
    pub fn sequence_count(&self) -> usize {
        self.entries.len()
    }

    /// The underlying timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Evaluate the visual state for one global frame.
    ///
    /// Pure with respect to the composition: the result depends only on `frame` and the immutable
    /// scene declarations. Only the active scene is evaluated; all others are fully unmounted, so
    /// a scene always sees `local_frame = 0` at its own start.
    pub fn evaluate_frame(&self, frame: FrameIndex) -> KineoResult<EvaluatedFrame> {
        let resolved = self.timeline.resolve(frame)?;
        let entry = &self.entries[resolved.active_index];
        let ctx = SceneCtx {
            local_frame: resolved.local_frame,
            duration_frames: entry.duration_frames,
            fps: self.fps,
            canvas: self.canvas,
        };
        Ok(EvaluatedFrame {
            frame,
            sequence_index: resolved.active_index,
            scene: entry.scene.name().to_owned(),
            state: entry.scene.evaluate(&ctx),
        })
    }
}
