//! Solution phase: the toolkit, the capability matrix, and the interface flip.

use crate::animation::interp::{ExtrapolateOpts, interpolate};
use crate::scene::{Scene, SceneCtx, SceneState};
use crate::scenes::shared::{self, palette};

/// Brain wired to a toolbox through a pulsing data connector.
pub struct ToolboxScene;

impl Scene for ToolboxScene {
    fn name(&self) -> &'static str {
        "toolbox"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();

        // Data packet travels the connector every 40 frames.
        let packet_pct = interpolate(
            (f % 40) as f64,
            [0.0, 40.0],
            [0.0, 100.0],
            ExtrapolateOpts::default(),
        );

        let tool = |name: &str, delay, label: &str, accent: &str| {
            shared::pop_node(name, f, ctx.fps, delay)
                .text("label", label)
                .text("accent", accent)
        };

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.1))
            .child(shared::pop_node("brain", f, ctx.fps, 0).text("label", "LLM_CORE"))
            .child(shared::pop_node("connector", f, ctx.fps, 15).num("packet_pct", packet_pct))
            .child(
                SceneState::node("toolkit")
                    .text("heading", "TOOLKIT")
                    .text("accent", palette::ORANGE)
                    .child(tool("tool-files", 30, "Files", palette::BLUE))
                    .child(tool("tool-terminal", 40, "Terminal", palette::GREEN))
                    .child(tool("tool-browser", 50, "Browser", palette::ORANGE)),
            )
    }
}

/// Three gradient capability cards under a headline, all sharing one slow Ken Burns drift.
pub struct CapabilityScene;

impl Scene for CapabilityScene {
    fn name(&self) -> &'static str {
        "capability"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let extend = ExtrapolateOpts::extend();
        let bg_pan = interpolate(f as f64, [0.0, 200.0], [0.0, -10.0], extend);
        let bg_scale = interpolate(f as f64, [0.0, 200.0], [1.0, 1.2], extend);

        let card = |name: &str, delay, title: &str, gradient: &str| {
            shared::pop_node(name, f, ctx.fps, delay)
                .text("title", title)
                .text("gradient", gradient)
                .num("bg_pan_x", bg_pan)
                .num("bg_scale", bg_scale)
        };

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.15))
            .child(shared::pop_node("headline", f, ctx.fps, 0).text("text", "CAPABILITY MATRIX"))
            .child(card("card-apps", 15, "Apps", "purple-indigo"))
            .child(card("card-ppt", 25, "PPT", "orange-pink"))
            .child(card("card-search", 35, "Search", "blue-teal"))
    }
}

/// Card flipping from a legacy interface to the agent interface.
pub struct FlipDemoScene;

impl Scene for FlipDemoScene {
    fn name(&self) -> &'static str {
        "flip-demo"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();

        let rotation = interpolate(
            f as f64,
            [20.0, 60.0],
            [0.0, 180.0],
            ExtrapolateOpts::clamp_right(),
        )
        .max(0.0);
        let is_front = rotation <= 90.0;

        // Status dots on the back face pulse out of phase.
        let dot = |name: &str, phase: f64, color: &str| {
            let pulse = interpolate(
                ((f as f64 - phase) / 5.0).sin(),
                [-1.0, 1.0],
                [0.4, 1.0],
                ExtrapolateOpts::default(),
            );
            SceneState::node(name).num("opacity", pulse).text("color", color)
        };

        let face = if is_front {
            SceneState::node("face-front")
                .text("heading", "Legacy Interface")
                .text("title", "TOP VIEW")
        } else {
            SceneState::node("face-back")
                .text("heading", "Agent Interface")
                .text("title", "MANUS")
                .child(dot("dot-red", 0.0, palette::RED))
                .child(dot("dot-yellow", 2.0, "#eab308"))
                .child(dot("dot-green", 4.0, palette::GREEN))
        };

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.1))
            .child(
                SceneState::node("card")
                    .num("rotation_y_deg", rotation)
                    .flag("front_visible", is_front)
                    .child(face),
            )
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
    fn packet_loops_along_the_connector() {
        let s = ToolboxScene.evaluate(&ctx(20, 150));
        assert_eq!(s.find("connector").unwrap().get_num("packet_pct"), Some(50.0));
        let s = ToolboxScene.evaluate(&ctx(60, 150));
        assert_eq!(s.find("connector").unwrap().get_num("packet_pct"), Some(50.0));
    }

    #[test]
    fn tools_pop_in_sequence() {
        let s = ToolboxScene.evaluate(&ctx(45, 150));
        let files = s.find("tool-files").unwrap().get_num("scale").unwrap();
        let term = s.find("tool-terminal").unwrap().get_num("scale").unwrap();
        let browser = s.find("tool-browser").unwrap().get_num("scale").unwrap();
        assert!(files > term);
        assert!(term > 0.0);
        assert_eq!(browser, 0.0);
    }

    #[test]
    fn cards_share_one_ken_burns_drift() {
        let s = CapabilityScene.evaluate(&ctx(100, 120));
        let a = s.find("card-apps").unwrap();
        let b = s.find("card-search").unwrap();
        assert_eq!(a.get_num("bg_pan_x"), b.get_num("bg_pan_x"));
        assert_eq!(a.get_num("bg_scale"), b.get_num("bg_scale"));
    }

    #[test]
    fn flip_switches_faces_past_ninety_degrees() {
        let front = FlipDemoScene.evaluate(&ctx(19, 100));
        assert_eq!(front.find("card").unwrap().get_num("rotation_y_deg"), Some(0.0));
        assert!(front.find("face-front").is_some());
        assert!(front.find("face-back").is_none());

        let back = FlipDemoScene.evaluate(&ctx(99, 100));
        assert_eq!(back.find("card").unwrap().get_num("rotation_y_deg"), Some(180.0));
        assert!(back.find("face-back").is_some());
        assert!(back.find("face-front").is_none());
    }
}
