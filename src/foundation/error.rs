/// Crate-wide result alias.
pub type KineoResult<T> = Result<T, KineoError>;

/// Engine error type.
///
/// Validation errors are raised at composition-construction time and are fatal before any frame
/// renders. Evaluation errors cover caller mistakes on the per-frame path (out-of-range frames).
/// The pure animation primitives are total functions and never construct errors themselves.
#[derive(thiserror::Error, Debug)]
pub enum KineoError {
    /// Composition or configuration invariant violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation configuration invariant violated.
    #[error("animation error: {0}")]
    Animation(String),

    /// Per-frame evaluation failed due to caller error.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// A frame outside `[0, duration)` was requested.
    #[error("frame {frame} out of range [0, {duration})")]
    FrameOutOfRange {
        /// Requested global frame.
        frame: u64,
        /// Declared total composition duration in frames.
        duration: u64,
    },

    /// Declared total duration disagrees with the sum of sequence durations.
    #[error("declared duration {declared} frames != sum of sequence durations {computed} frames")]
    DurationMismatch {
        /// Total duration declared on the composition metadata.
        declared: u64,
        /// Sum of per-sequence durations.
        computed: u64,
    },

    /// Serialization at the host boundary failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Host-provided error passthrough.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for KineoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

impl KineoError {
    /// Construct a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct an animation error.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Construct an evaluation error.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Construct a serialization error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            KineoError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            KineoError::animation("x")
                .to_string()
                .contains("animation error:")
        );
        assert!(
            KineoError::evaluation("x")
                .to_string()
                .contains("evaluation error:")
        );
    }

    #[test]
    fn out_of_range_names_frame_and_duration() {
        let err = KineoError::FrameOutOfRange {
            frame: 1500,
            duration: 1450,
        };
        let s = err.to_string();
        assert!(s.contains("1500"));
        assert!(s.contains("1450"));
    }

    #[test]
    fn duration_mismatch_names_both_totals() {
        let err = KineoError::DurationMismatch {
            declared: 1080,
            computed: 1450,
        };
        let s = err.to_string();
        assert!(s.contains("1080"));
        assert!(s.contains("1450"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = KineoError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
