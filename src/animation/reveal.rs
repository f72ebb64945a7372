/// Number of discrete units revealed after `elapsed_frames` at `speed` frames per unit.
///
/// `floor(max(0, elapsed) / speed)`. The caller clamps to the length of the underlying sequence.
/// Total over its domain: non-positive speeds are sanitized to the smallest positive value (a
/// configuration error caught by scene validation, not an evaluation-time panic).
pub fn reveal_count(elapsed_frames: i64, speed_frames_per_unit: f64) -> usize {
    if elapsed_frames <= 0 {
        return 0;
    }
    let speed = if speed_frames_per_unit.is_finite() && speed_frames_per_unit > 0.0 {
        speed_frames_per_unit
    } else {
        f64::MIN_POSITIVE
    };
    (elapsed_frames as f64 / speed).floor() as usize
}

/// Prefix of `text` revealed after `elapsed_frames`, respecting UTF-8 char boundaries.
pub fn reveal_slice(text: &str, elapsed_frames: i64, speed_frames_per_unit: f64) -> &str {
    let count = reveal_count(elapsed_frames, speed_frames_per_unit);
    match text.char_indices().nth(count) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
