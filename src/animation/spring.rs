use crate::foundation::core::Fps;
use crate::foundation::error::{KineoError, KineoResult};

/// Damped-oscillator configuration for [`spring`].
///
/// Constructed fresh per call site and consumed immediately; never persisted. Higher stiffness
/// gives a faster rise and (when under-damped) more overshoot; higher damping suppresses
/// oscillation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Frames to wait before the spring starts moving.
    pub delay_frames: u64,
    /// Oscillator stiffness, must be > 0.
    pub stiffness: f64,
    /// Oscillator damping, must be > 0.
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            delay_frames: 0,
            stiffness: 100.0,
            damping: 10.0,
        }
    }
}

impl SpringConfig {
    /// Config with a start delay and default physics.
    pub fn delayed(delay_frames: u64) -> Self {
        Self {
            delay_frames,
            ..Self::default()
        }
    }

    /// Validate static invariants. Called at composition-construction time; the sampling path
    /// stays total by sanitizing instead of erroring.
    pub fn validate(&self) -> KineoResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(KineoError::animation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !self.damping.is_finite() || self.damping <= 0.0 {
            return Err(KineoError::animation(
                "spring damping must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Settling value of a unit-mass damped harmonic oscillator released at 0 toward equilibrium 1.
///
/// Closed-form solution with `x(0) = 0`, `x'(0) = 0`, evaluated at
/// `t = (elapsed_frames - delay_frames) / fps` seconds. Returns exactly 0 for any elapsed frame at
/// or before the delay, and converges to 1 as elapsed frames grow. Each call is independent: no
/// integration state is carried between frames, so frame N never requires frames `0..N-1`.
pub fn spring(elapsed_frames: i64, fps: Fps, config: &SpringConfig) -> f64 {
    let active = elapsed_frames - config.delay_frames as i64;
    if active <= 0 {
        return 0.0;
    }

    let t = fps.frames_to_secs(active as f64);
    let stiffness = config.stiffness.max(f64::MIN_POSITIVE);
    let damping = config.damping.max(0.0);

    let omega0 = stiffness.sqrt();
    let zeta = damping / (2.0 * omega0);

    if zeta < 1.0 {
        // Under-damped: decaying oscillation around 1 (this branch overshoots).
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega0 * t).exp();
        1.0 - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else if zeta == 1.0 {
        // Critically damped: fastest settle without crossing 1.
        let decay = (-omega0 * t).exp();
        1.0 - decay * (1.0 + omega0 * t)
    } else {
        // Over-damped: two real decay rates.
        let root = (zeta * zeta - 1.0).sqrt();
        let s1 = -omega0 * (zeta - root);
        let s2 = -omega0 * (zeta + root);
        1.0 + (s2 * (s1 * t).exp() - s1 * (s2 * t).exp()) / (s1 - s2)
    }
}
