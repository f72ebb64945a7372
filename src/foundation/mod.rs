//! Foundation types shared across the engine: frame/time units and error handling.

/// Frame, range, fps, and canvas primitives.
pub mod core;
/// Engine error and result types.
pub mod error;
