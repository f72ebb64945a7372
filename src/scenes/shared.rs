//! Helpers shared by the built-in scenes: palette, pop-in, typewriter, decode, backdrop layers.

use crate::animation::interp::{ExtrapolateOpts, interpolate};
use crate::animation::noise::{element_seed, noise01};
use crate::animation::reveal::reveal_slice;
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::Fps;
use crate::scene::SceneState;

/// Shared color palette, expressed as the hex/CSS strings the host styling layer consumes.
pub mod palette {
    /// Accent orange.
    pub const ORANGE: &str = "#FF5D47";
    /// Plain white.
    pub const WHITE: &str = "#FFFFFF";
    /// Near-black background tone.
    pub const BLACK: &str = "#0D0D0D";
    /// Success/terminal green.
    pub const GREEN: &str = "#22c55e";
    /// Error red.
    pub const RED: &str = "#ef4444";
    /// Scanner cyan.
    pub const CYAN: &str = "#06b6d4";
    /// Label blue.
    pub const BLUE: &str = "#3b82f6";
    /// Label purple.
    pub const PURPLE: &str = "#a855f7";
    /// Backdrop gradient behind every scene.
    pub const BG_GRADIENT: &str = "radial-gradient(circle at center, #222222 0%, #000000 100%)";
}

/// Default pop-in physics used across the scenes.
pub fn pop_config(delay_frames: u64) -> SpringConfig {
    SpringConfig {
        delay_frames,
        stiffness: 120.0,
        damping: 12.0,
    }
}

/// Spring-driven "pop" pair: scale (may overshoot 1) and opacity (clamped to `[0, 1]`).
pub fn pop(frame: i64, fps: Fps, config: &SpringConfig) -> (f64, f64) {
    let s = spring(frame, fps, config);
    (s, s.clamp(0.0, 1.0))
}

/// A node that pops in with the default physics after `delay_frames`.
pub fn pop_node(name: &str, frame: i64, fps: Fps, delay_frames: u64) -> SceneState {
    let (scale, opacity) = pop(frame, fps, &pop_config(delay_frames));
    SceneState::node(name).num("scale", scale).num("opacity", opacity)
}

/// Typewriter reveal: the prefix of `text` visible at `frame`, one unit every `speed` frames,
/// starting after `delay` frames.
pub fn typewriter(text: &str, frame: i64, delay: i64, speed: f64) -> &str {
    reveal_slice(text, frame - delay, speed)
}

/// Decoding text reveal.
///
/// Reveal sweeps left to right over 40 frames; characters ahead of the sweep show a
/// noise-derived placeholder letter that re-rolls every frame, and each character fades in over
/// a 10-frame window staggered by 2 frames per position.
pub fn decode_text(name: &str, text: &str, frame: i64, delay: i64) -> SceneState {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len().max(1) as f64;
    let progress = interpolate(
        (frame - delay) as f64,
        [0.0, 40.0],
        [0.0, 1.0],
        ExtrapolateOpts::clamp_right(),
    );

    let mut node = SceneState::node(name)
        .text("text", text)
        .num("progress", progress);
    for (i, &ch) in chars.iter().enumerate() {
        let revealed = progress >= (i as f64 + 1.0) / len;
        let roll = noise01(element_seed(frame.max(0) as u64, i as u64));
        let placeholder = char::from(b'A' + (roll * 26.0) as u8);
        let opacity = interpolate(
            (frame - delay - 2 * i as i64) as f64,
            [0.0, 10.0],
            [0.0, 1.0],
            ExtrapolateOpts::clamp(),
        );
        node = node.child(
            SceneState::node(format!("char-{i}"))
                .text("glyph", if revealed { ch } else { placeholder }.to_string())
                .num("opacity", opacity)
                .flag("revealed", revealed)
                .text("color", if revealed { palette::WHITE } else { palette::GREEN }),
        );
    }
    node
}

const STREAM_ROWS: u64 = 8;
const STREAM_COLS: u64 = 48;

/// Scrolling binary backdrop.
///
/// Row contents are keyed by (row, column) only, so the stream text is stable across frames and
/// replays; motion comes from the scroll offset and a slow sine opacity pulse.
pub fn binary_stream(frame: i64, base_opacity: f64) -> SceneState {
    let scroll_y = interpolate(
        frame as f64,
        [0.0, 200.0],
        [0.0, -200.0],
        ExtrapolateOpts::extend(),
    );
    let pulse = interpolate(
        (frame as f64 / 15.0).sin(),
        [-1.0, 1.0],
        [base_opacity * 0.5, base_opacity],
        ExtrapolateOpts::default(),
    );

    let mut node = SceneState::node("binary-stream")
        .num("scroll_y", scroll_y)
        .num("opacity", pulse);
    for row in 0..STREAM_ROWS {
        let bits: String = (0..STREAM_COLS)
            .map(|col| {
                if noise01(element_seed(row, col)) < 0.5 {
                    '0'
                } else {
                    '1'
                }
            })
            .collect();
        node = node.child(SceneState::node(format!("row-{row}")).text("bits", bits));
    }
    node
}

/// Perspective grid backdrop drifting downwards.
pub fn grid_background(frame: i64) -> SceneState {
    let drift_y = interpolate(
        frame as f64,
        [0.0, 100.0],
        [0.0, 50.0],
        ExtrapolateOpts::extend(),
    );
    SceneState::node("grid-background")
        .num("drift_y", drift_y)
        .num("tilt_deg", 60.0)
        .num("opacity", 0.4)
}

/// Scene root with the shared backdrop gradient.
pub fn scene_root(name: &str) -> SceneState {
    SceneState::node(name).text("background", palette::BG_GRADIENT)
}
