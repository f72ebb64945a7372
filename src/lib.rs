//! Kineo is a deterministic, frame-pure motion-graphics engine.
//!
//! Every visual state is a total function of `(frame, composition)`: no inter-frame state, no
//! wall-clock reads, no unseeded randomness. That makes evaluation order irrelevant, so frames
//! can be computed sequentially, in parallel, or on demand with identical results. The public
//! API is session-oriented:
//!
//! - Build and validate a [`Composition`] (the shipped one is [`scenes::agent_video`])
//! - Create a [`RenderSession`], which settles the asset gate barrier once
//! - Evaluate single frames or ranges into serializable [`SceneState`] trees
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Asset-readiness gates.
pub mod assets;
/// Frame-pure animation primitives: interpolation, easing, noise, springs, reveals.
pub mod animation;
/// The composition: scenes, durations, declared metadata.
pub mod composition;
/// Shared core types and the crate error type.
pub mod foundation;
/// The scene contract and visual-state tree.
pub mod scene;
/// The built-in composition and its scenes.
pub mod scenes;
/// Session-oriented evaluation API.
pub mod session;
/// Sequence timeline resolution.
pub mod timeline;

pub use crate::assets::gate::{GateOutcome, GateReport, GateSet, GateToken};
pub use crate::composition::{Composition, EvaluatedFrame, SceneEntry};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{KineoError, KineoResult};
pub use crate::scene::{Param, Scene, SceneCtx, SceneState};
pub use crate::session::{RenderSession, SessionOpts};
pub use crate::timeline::{ResolvedFrame, Sequence, Timeline};
