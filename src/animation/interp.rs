/// Per-side extrapolation behavior for [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Continue the linear slope unbounded outside the input range.
    Extend,
    /// Hold the boundary output value outside the input range.
    Clamp,
}

/// Extrapolation options for both sides of the input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtrapolateOpts {
    /// Behavior below `in_min`.
    pub left: Extrapolate,
    /// Behavior above `in_max`.
    pub right: Extrapolate,
}

impl Default for ExtrapolateOpts {
    fn default() -> Self {
        Self::extend()
    }
}

impl ExtrapolateOpts {
    /// Extend the slope on both sides (the default).
    pub fn extend() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
        }
    }

    /// Clamp on both sides.
    pub fn clamp() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }

    /// Clamp only below `in_min`.
    pub fn clamp_left() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Extend,
        }
    }

    /// Clamp only above `in_max`.
    ///
    /// The most common option in scene code: holds the final value once an animation completes.
    pub fn clamp_right() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Clamp,
        }
    }
}

/// Map `input` linearly from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Total over all finite inputs: a degenerate input range (`in_min == in_max`) yields `out_min`
/// rather than dividing by zero. The input range must be increasing for extrapolation sides to be
/// meaningful; output ranges may be decreasing.
pub fn interpolate(input: f64, input_range: [f64; 2], output_range: [f64; 2], opts: ExtrapolateOpts) -> f64 {
    let [in_min, in_max] = input_range;
    let [out_min, out_max] = output_range;

    if in_min == in_max {
        return out_min;
    }

    let mut t = (input - in_min) / (in_max - in_min);
    if t < 0.0 && opts.left == Extrapolate::Clamp {
        t = 0.0;
    }
    if t > 1.0 && opts.right == Extrapolate::Clamp {
        t = 1.0;
    }

    out_min + (out_max - out_min) * t
}
