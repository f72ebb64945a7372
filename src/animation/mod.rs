//! Pure, frame-indexed animation primitives.
//!
//! Every function here is a total, deterministic function of its arguments. None of them carry
//! state between calls; seeking to frame N never requires evaluating frames `0..N-1`. This is the
//! property that lets a composition be scrubbed and rendered out of order across workers.

/// Easing curves for normalized progress.
pub mod ease;
/// Piecewise-linear range mapping with per-side extrapolation.
pub mod interp;
/// Seeded deterministic noise for glitch/jitter effects.
pub mod noise;
/// Per-unit reveal timing (typewriter and decode effects).
pub mod reveal;
/// Closed-form damped-oscillator settling curve.
pub mod spring;
