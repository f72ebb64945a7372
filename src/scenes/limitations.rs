//! Limitation phase: what the bare model can and cannot do.

use crate::animation::interp::{ExtrapolateOpts, interpolate};
use crate::scene::{Scene, SceneCtx, SceneState};
use crate::scenes::shared::{self, palette};

/// Brain rising out of the way while capability/limit rows pop in below.
pub struct ComparisonScene;

impl Scene for ComparisonScene {
    fn name(&self) -> &'static str {
        "comparison"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let clamp_right = ExtrapolateOpts::clamp_right();

        let brain = SceneState::node("brain")
            .num(
                "translate_y",
                interpolate(f as f64, [0.0, 30.0], [0.0, -400.0], clamp_right),
            )
            .num(
                "scale",
                interpolate(f as f64, [0.0, 30.0], [1.0, 0.8], clamp_right),
            )
            .num(
                // Scan line loops over the brain every 60 frames.
                "scan_y",
                interpolate(
                    (f % 60) as f64,
                    [0.0, 60.0],
                    [-200.0, 200.0],
                    ExtrapolateOpts::default(),
                ),
            );

        let row = |name: &str, delay, tag: &str, label: &str, accent: &str, ok: bool| {
            shared::pop_node(name, f, ctx.fps, delay)
                .text("tag", tag)
                .text("label", label)
                .text("accent", accent)
                .flag("ok", ok)
        };

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.1))
            .child(brain)
            .child(row(
                "row-capability",
                30,
                "SYS_CAPABILITY_01",
                "Reasoning & Chat",
                palette::GREEN,
                true,
            ))
            .child(row(
                "row-limit",
                60,
                "SYS_ERROR_LIMIT",
                "Perceive & Modify",
                palette::RED,
                false,
            ))
    }
}

/// Chat exchange ending in a strobing security warning.
pub struct ChatScene;

impl Scene for ChatScene {
    fn name(&self) -> &'static str {
        "chat"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();

        // Red alert strobe kicks in once the warning bar lands.
        let warning_active = f > 100;
        let strobe_opacity = if warning_active {
            interpolate(
                (f as f64).sin(),
                [-1.0, 1.0],
                [0.0, 0.3],
                ExtrapolateOpts::default(),
            )
        } else {
            0.0
        };

        let user = shared::pop_node("bubble-user", f, ctx.fps, 0)
            .text("tag", "USER_INPUT_STREAM")
            .text("text", "Delete the production database.");

        let reply = shared::typewriter(
            "I cannot directly access or modify external systems.",
            f,
            45,
            2.0,
        );
        let agent = shared::pop_node("bubble-agent", f, ctx.fps, 30)
            .text("tag", "AGENT_RESPONSE")
            .text("accent", palette::ORANGE)
            .text("revealed_text", reply);

        let warning = shared::pop_node("warning-bar", f, ctx.fps, 100)
            .text("tag", "SECURITY ENGAGED")
            .text("text", "Cannot Perceive or Modify")
            .text("accent", palette::RED);

        shared::scene_root(self.name())
            .child(SceneState::node("alert-overlay").num("opacity", strobe_opacity))
            .child(shared::binary_stream(f, 0.15))
            .child(user)
            .child(agent)
            .child(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::{Canvas, Fps};

    fn ctx(local_frame: u64, duration_frames: u64) -> SceneCtx {
        SceneCtx {
            local_frame,
            duration_frames,
            fps: Fps::new(30, 1).unwrap(),
            canvas: Canvas {
                width: 1080,
                height: 1920,
            },
        }
    }

    #[test]
    fn brain_holds_its_final_pose_after_thirty_frames() {
        let s = ComparisonScene.evaluate(&ctx(90, 150));
        let brain = s.find("brain").unwrap();
        assert_eq!(brain.get_num("translate_y"), Some(-400.0));
        assert_eq!(brain.get_num("scale"), Some(0.8));
    }

    #[test]
    fn scan_line_loops_every_sixty_frames() {
        let a = ComparisonScene.evaluate(&ctx(10, 150));
        let b = ComparisonScene.evaluate(&ctx(70, 150));
        assert_eq!(
            a.find("brain").unwrap().get_num("scan_y"),
            b.find("brain").unwrap().get_num("scan_y")
        );
    }

    #[test]
    fn chat_reply_types_out_after_its_delay() {
        let s = ChatScene.evaluate(&ctx(44, 180));
        assert_eq!(
            s.find("bubble-agent").unwrap().get_text("revealed_text"),
            Some("")
        );
        let s = ChatScene.evaluate(&ctx(179, 180));
        assert_eq!(
            s.find("bubble-agent").unwrap().get_text("revealed_text"),
            Some("I cannot directly access or modify external systems.")
        );
    }

    #[test]
    fn alert_strobe_waits_for_the_warning_bar() {
        let quiet = ChatScene.evaluate(&ctx(100, 180));
        assert_eq!(quiet.find("alert-overlay").unwrap().get_num("opacity"), Some(0.0));
        let strobing = ChatScene.evaluate(&ctx(150, 180));
        let op = strobing.find("alert-overlay").unwrap().get_num("opacity").unwrap();
        assert!(op >= 0.0 && op <= 0.3);
    }
}
