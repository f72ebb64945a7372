//! Showcase phase: the identity scan and the drone surveillance feed.

use crate::animation::interp::{ExtrapolateOpts, interpolate};
use crate::animation::noise::{element_seed, noise01};
use crate::scene::{Scene, SceneCtx, SceneState};
use crate::scenes::shared::{self, palette};

const LIVE_FEED_HEX: &str = "0x4F 0x4B 0x20 0x53 0x59 0x53 0x54 0x45 0x4D 0x20 0x49 0x4E 0x49 0x54 0x2E 0x2E 0x2E 0x20 0x4C 0x4F 0x41 0x44 0x49 0x4E 0x47 0x20 0x4E 0x45 0x55 0x52 0x41 0x4C 0x20 0x4E 0x45 0x54 0x57 0x4F 0x52 0x4B 0x20 0x4D 0x4F 0x44 0x45 0x4C 0x2E 0x2E 0x2E";

/// Portrait scan with Ken Burns drift, hologram flicker, and typewriter readout.
pub struct AgentProfileScene;

impl Scene for AgentProfileScene {
    fn name(&self) -> &'static str {
        "agent-profile"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let extend = ExtrapolateOpts::extend();

        let scan_pct = interpolate(
            f as f64,
            [15.0, 90.0],
            [0.0, 100.0],
            ExtrapolateOpts::clamp_right(),
        )
        .max(0.0);

        let portrait = SceneState::node("portrait")
            .num("scale", interpolate(f as f64, [0.0, 150.0], [1.1, 1.3], extend))
            .num("pan_y", interpolate(f as f64, [0.0, 150.0], [0.0, -20.0], extend))
            .num("flicker", 0.8 + noise01(element_seed(ctx.local_frame, 0)) * 0.2)
            .num("hue_deg", interpolate(f as f64, [0.0, 150.0], [0.0, 30.0], extend))
            .num("scan_pct", scan_pct)
            .text("accent", palette::CYAN);

        let readout = |name: &str, label: &str, value: &str, delay: i64| {
            SceneState::node(name)
                .text("label", label)
                .text("revealed_text", shared::typewriter(value, f, delay, 2.0))
        };

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.4))
            .child(portrait)
            .child(
                SceneState::node("readout")
                    .text("heading", "IDENTITY VERIFIED")
                    .child(readout("row-designation", "Designation", "OMEGA AGENT", 30))
                    .child(readout(
                        "row-clearance",
                        "Clearance",
                        "LEVEL 5 (UNRESTRICTED)",
                        60,
                    ))
                    .child(readout("row-status", "Status", "ONLINE / LISTENING", 90)),
            )
            .child(
                SceneState::node("live-feed")
                    .text("revealed_text", shared::typewriter(LIVE_FEED_HEX, f, 100, 0.5)),
            )
    }
}

/// Drifting drone-scope lens over a surveillance feed, with HUD readouts.
pub struct VideoSurveillanceScene;

impl Scene for VideoSurveillanceScene {
    fn name(&self) -> &'static str {
        "surveillance"
    }

    fn evaluate(&self, ctx: &SceneCtx) -> SceneState {
        let f = ctx.frame_i64();
        let unit = ExtrapolateOpts::default();

        let scope = SceneState::node("scope")
            .num(
                "offset_x",
                interpolate((f as f64 / 60.0).sin(), [-1.0, 1.0], [-50.0, 50.0], unit),
            )
            .num(
                "offset_y",
                interpolate((f as f64 / 80.0).cos(), [-1.0, 1.0], [-50.0, 50.0], unit),
            )
            .text("accent", palette::RED)
            .child(
                SceneState::node("lock-box")
                    .num(
                        "scale",
                        interpolate((f as f64 / 10.0).sin(), [-1.0, 1.0], [1.0, 1.05], unit),
                    )
                    .text("label", "TARGET LOCKED")
                    .text("confidence", "CONF: 99.9%"),
            );

        // Spectral analyzer bars jump with per-bar, per-frame noise.
        let analyzer = (0..10).fold(SceneState::node("analyzer"), |node, i| {
            let h = 20.0 + noise01(element_seed(ctx.local_frame, i)) * 80.0;
            node.child(SceneState::node(format!("bar-{i}")).num("height_pct", h))
        });

        let timecode = format!("{}:{:02}", f / 30, f % 30);

        shared::scene_root(self.name())
            .child(shared::binary_stream(f, 0.1))
            .child(scope)
            .child(
                SceneState::node("hud")
                    .text("header", "LIVE FEED // REC")
                    .text("camera", "CAM_04 [NIGHT_RAIN]")
                    .text("timecode", timecode)
                    .child(analyzer)
                    .child(SceneState::node("status-line").text(
                        "revealed_text",
                        shared::typewriter(
                            "TARGET: VEHICLE // SUPRA DETECTED... RAIN INTERFERENCE: HIGH... ENHANCING VISUALS...",
                            f,
                            0,
                            1.0,
                        ),
                    )),
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
    fn scan_wipe_runs_from_frame_15_to_90() {
        let before = AgentProfileScene.evaluate(&ctx(10, 120));
        assert_eq!(before.find("portrait").unwrap().get_num("scan_pct"), Some(0.0));
        let after = AgentProfileScene.evaluate(&ctx(119, 120));
        assert_eq!(after.find("portrait").unwrap().get_num("scan_pct"), Some(100.0));
    }

    #[test]
    fn flicker_stays_in_hologram_band() {
        for frame in [0, 13, 77, 119] {
            let s = AgentProfileScene.evaluate(&ctx(frame, 120));
            let v = s.find("portrait").unwrap().get_num("flicker").unwrap();
            assert!((0.8..1.0).contains(&v));
        }
    }

    #[test]
    fn readout_rows_type_in_order() {
        let s = AgentProfileScene.evaluate(&ctx(70, 120));
        let designation = s.find("row-designation").unwrap().get_text("revealed_text");
        let clearance = s.find("row-clearance").unwrap().get_text("revealed_text");
        let status = s.find("row-status").unwrap().get_text("revealed_text");
        assert_eq!(designation, Some("OMEGA AGENT"));
        assert_eq!(clearance, Some("LEVEL"));
        assert_eq!(status, Some(""));
    }

    #[test]
    fn timecode_counts_seconds_and_frames() {
        let s = VideoSurveillanceScene.evaluate(&ctx(95, 150));
        assert_eq!(s.find("hud").unwrap().get_text("timecode"), Some("3:05"));
    }

    #[test]
    fn analyzer_bars_are_reproducible_noise() {
        let a = VideoSurveillanceScene.evaluate(&ctx(42, 150));
        let b = VideoSurveillanceScene.evaluate(&ctx(42, 150));
        assert_eq!(a, b);
        for i in 0..10 {
            let h = a
                .find(&format!("bar-{i}"))
                .unwrap()
                .get_num("height_pct")
                .unwrap();
            assert!((20.0..100.0).contains(&h));
        }
    }
}
