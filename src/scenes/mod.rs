//! The built-in "What is an Agent?" composition and its eleven scenes.

use crate::composition::Composition;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::KineoResult;
use crate::scene::Scene;

pub mod intro;
pub mod limitations;
pub mod running;
pub mod shared;
pub mod showcase;
pub mod solutions;

pub use intro::{BrainScene, IntroScene, QuestionScene};
pub use limitations::{ChatScene, ComparisonScene};
pub use running::RunningModeScene;
pub use showcase::{AgentProfileScene, VideoSurveillanceScene};
pub use solutions::{CapabilityScene, FlipDemoScene, ToolboxScene};

/// Total duration of the shipped composition in frames.
pub const AGENT_VIDEO_FRAMES: u64 = 1450;

/// The shipped vertical-video composition: 1080x1920 at 30 fps, 1450 frames,
/// eleven scenes.
pub fn agent_video() -> KineoResult<Composition> {
    let scenes: Vec<(Box<dyn Scene>, u64)> = vec![
        (Box::new(IntroScene), 70),
        (Box::new(AgentProfileScene), 120),
        (Box::new(VideoSurveillanceScene), 150),
        (Box::new(QuestionScene), 90),
        (Box::new(BrainScene), 120),
        (Box::new(ComparisonScene), 150),
        (Box::new(ChatScene), 180),
        (Box::new(ToolboxScene), 150),
        (Box::new(CapabilityScene), 120),
        (Box::new(FlipDemoScene), 100),
        (Box::new(RunningModeScene), 200),
    ];
    Composition::new(
        Fps::new(30, 1)?,
        Canvas {
            width: 1080,
            height: 1920,
        },
        AGENT_VIDEO_FRAMES,
        scenes,
    )
}
