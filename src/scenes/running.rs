//! Running phase: the think/act/observe loop.

use crate::animation::ease::Ease;
use crate::animation::interp::{ExtrapolateOpts, interpolate};
use crate::scene::{Scene, SceneCtx, SceneState};
use crate::scenes::shared::{self, palette};

const STEP_FRAMES: i64 = 30;
const STEPS: [&str; 3] = ["think", "act", "observe"];

/// Think → Act → Observe cycle with a pulsing highlight and a rotating loop badge.
pub struct RunningModeScene;

impl Scene for RunningModeScene {
    fn name(&self) -> &'static str {
        "running-mode"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let step = ((f / STEP_FRAMES) % 3) as usize;
        let frames_into_step = (f % STEP_FRAMES) as f64;

        let loop_rotation = interpolate(
            f as f64,
            [0.0, 300.0],
            [0.0, 360.0],
            ExtrapolateOpts::default(),
        );

        // Highlight ring expands and fades out at the start of each step.
        let ring_scale = interpolate(
            frames_into_step,
            [0.0, 10.0],
            [1.0, 1.1],
            ExtrapolateOpts::clamp_right(),
        );
        let ring_opacity = interpolate(
            frames_into_step,
            [0.0, 15.0],
            [0.8, 0.0],
            ExtrapolateOpts::clamp_right(),
        );

        // Activation settles over 9 frames with an ease-out.
        let settle = Ease::OutQuad.apply(frames_into_step / 9.0);

        let card = |index: usize, label: &str| {
            let active = index == step;
            let (scale, opacity) = if active {
                (1.0 + 0.05 * settle, 0.5 + 0.5 * settle)
            } else {
                (1.0, 0.5)
            };
            let mut node = SceneState::node(format!("step-{label}"))
                .text("label", label.to_uppercase())
                .flag("active", active)
                .num("scale", scale)
                .num("opacity", opacity)
                .text("accent", if active { palette::ORANGE } else { palette::WHITE });
            if active {
                node = node.child(
                    SceneState::node("pulse-ring")
                        .num("scale", ring_scale)
                        .num("opacity", ring_opacity),
                );
            }
            node
        };

        let caption = STEPS.iter().enumerate().fold(
            SceneState::node("caption"),
            |node, (i, label)| {
                node.child(
                    SceneState::node(format!("caption-{label}"))
                        .text("text", label.to_uppercase())
                        .text("color", if i == step { palette::ORANGE } else { "#666666" }),
                )
            },
        );

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.15))
            .child(card(0, STEPS[0]))
            .child(card(1, STEPS[1]))
            .child(card(2, STEPS[2]))
            .child(
                SceneState::node("loop-badge")
                    .num("rotation_deg", loop_rotation)
                    .text("color", palette::ORANGE),
            )
            .child(caption)
    }
}
