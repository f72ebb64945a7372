//! Opening phase: glitch intro, the two framing questions, and the model brain.

use crate::animation::interp::{ExtrapolateOpts, interpolate};
use crate::animation::noise::{element_seed, noise01};
use crate::animation::spring::{SpringConfig, spring};
use crate::scene::{Scene, SceneCtx, SceneState};
use crate::scenes::shared::{self, palette};
use kurbo::Point;

/// Title card: glitching bot icon popping in over a grid, then a decoding title.
pub struct IntroScene;

/// Noise-gated jitter: jumps only ~10% of frames, each element independently.
fn glitch_offset(frame: u64, gate_element: u64, value_element: u64, span: f64) -> f64 {
    if noise01(element_seed(frame, gate_element)) > 0.9 {
        (noise01(element_seed(frame, value_element)) - 0.5) * span
    } else {
        0.0
    }
}

impl Scene for IntroScene {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();

        let icon = SceneState::node("bot-icon")
            .num("jitter_x", glitch_offset(ctx.local_frame, 0, 1, 20.0))
            .num("jitter_y", glitch_offset(ctx.local_frame, 2, 3, 10.0))
            .child(
                SceneState::node("ghost-red")
                    .num("offset_x", 4.0)
                    .num("opacity", 0.5)
                    .text("color", palette::RED),
            )
            .child(
                SceneState::node("ghost-blue")
                    .num("offset_x", -4.0)
                    .num("opacity", 0.5)
                    .text("color", palette::BLUE),
            );

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.2))
            .child(shared::grid_background(f))
            .child(shared::pop_node("icon-panel", f, ctx.fps, 10).child(icon))
            .child(shared::decode_text("title", "AGENT_V2.0", f, 30))
    }
}

/// Two stacked question panels popping in with a gentle group float.
pub struct QuestionScene;

impl Scene for QuestionScene {
    fn name(&self) -> &'static str {
        "question"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let float_y = (f as f64 / 20.0).sin() * 10.0;

        let panels = SceneState::node("panels")
            .num("float_y", float_y)
            .child(
                shared::pop_node("panel-what", f, ctx.fps, 0)
                    .text("heading", "What is an Agent?")
                    .text("accent", palette::ORANGE),
            )
            .child(
                shared::pop_node("panel-how", f, ctx.fps, 15)
                    .text("heading", "How does it work?")
                    .text("accent", palette::GREEN),
            );

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.1))
            .child(shared::grid_background(f))
            .child(panels)
    }
}

/// Central brain with two spring-pop model stickers and drawn connector lines.
pub struct BrainScene;

fn connector(name: &str, start: Point, end: Point, frame: i64, delay: i64, color: &str) -> SceneState {
    let draw = interpolate(
        (frame - delay) as f64,
        [0.0, 15.0],
        [0.0, 100.0],
        ExtrapolateOpts::clamp_right(),
    );
    SceneState::node(name)
        .num("x1", start.x)
        .num("y1", start.y)
        .num("x2", end.x)
        .num("y2", end.y)
        .num("draw_pct", draw.max(0.0))
        .text("color", color)
}

impl Scene for BrainScene {
    fn name(&self) -> &'static str {
        "brain"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let center = ctx.canvas.center();
        let breathing = 1.0 + (f as f64 / 20.0).sin() * 0.05;

        let sticker_cfg = |delay| SpringConfig {
            delay_frames: delay,
            stiffness: 200.0,
            damping: 10.0,
        };
        let sticker = |name: &str, delay, label: &str, color: &str| {
            SceneState::node(name)
                .num("scale", spring(f, ctx.fps, &sticker_cfg(delay)))
                .text("label", label)
                .text("color", color)
        };

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.15))
            .child(shared::pop_node("brain", f, ctx.fps, 0).num("breathing_scale", breathing))
            .child(connector(
                "link-top",
                Point::new(center.x, center.y - 300.0),
                Point::new(center.x, center.y - 600.0),
                f,
                25,
                palette::BLUE,
            ))
            .child(connector(
                "link-bottom",
                Point::new(center.x, center.y + 300.0),
                Point::new(center.x, center.y + 600.0),
                f,
                40,
                palette::PURPLE,
            ))
            .child(sticker("sticker-top", 20, "[GPT-4o]", palette::BLUE))
            .child(sticker("sticker-bottom", 35, "[DEEPSEEK]", palette::PURPLE))
    }
}
