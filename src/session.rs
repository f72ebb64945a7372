//! Session-oriented evaluation API: the host-facing entry point.

use crate::assets::gate::{GateOutcome, GateReport, GateSet};
use crate::composition::{Composition, EvaluatedFrame};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::KineoResult;
use rayon::prelude::*;
use std::time::Duration;

/// Options controlling session behavior.
#[derive(Clone, Debug)]
pub struct SessionOpts {
    /// Evaluate ranges with frame-level parallelism (rayon).
    pub parallel: bool,
    /// Upper bound on the one-time asset gate barrier. Gates still pending at the deadline
    /// settle as degraded rather than blocking the render forever.
    pub gate_timeout: Duration,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            gate_timeout: Duration::from_secs(10),
        }
    }
}

/// A validated composition ready for frame evaluation.
///
/// Construction front-loads everything that may fail or block: composition validation (fatal on
/// configuration errors such as a duration mismatch) and the one-time asset gate barrier. After
/// `new` returns, every evaluation call is pure and non-blocking, so frames may be computed in
/// any order by any number of workers with identical results.
pub struct RenderSession {
    comp: Composition,
    gate_reports: Vec<GateReport>,
    opts: SessionOpts,
}

impl RenderSession {
    /// Validate the composition, wait once on the gate barrier, and return a ready session.
    pub fn new(comp: Composition, gates: GateSet, opts: SessionOpts) -> KineoResult<Self> {
        comp.validate()?;
        let gate_reports = gates.wait_all(opts.gate_timeout);
        let degraded = gate_reports
            .iter()
            .filter(|r| matches!(r.outcome, GateOutcome::Degraded(_)))
            .count();
        if degraded > 0 {
            tracing::warn!(degraded, "session starting with degraded asset gates");
        }
        Ok(Self {
            comp,
            gate_reports,
            opts,
        })
    }

    /// The composition driven by this session.
    pub fn composition(&self) -> &Composition {
        &self.comp
    }

    /// Settled gate outcomes, for host-side reporting.
    pub fn gate_reports(&self) -> &[GateReport] {
        &self.gate_reports
    }

    /// Evaluate the visual state for a single frame.
    #[tracing::instrument(skip(self))]
    pub fn evaluate_frame(&self, frame: FrameIndex) -> KineoResult<EvaluatedFrame> {
        self.comp.evaluate_frame(frame)
    }

    /// Evaluate every frame in `range`, in timeline order.
    ///
    /// With `opts.parallel` the frames are computed across rayon workers; output order and
    /// content are identical to sequential evaluation.
    #[tracing::instrument(skip(self))]
    pub fn evaluate_range(&self, range: FrameRange) -> KineoResult<Vec<EvaluatedFrame>> {
        let frames: Vec<FrameIndex> = range.iter().collect();
        if self.opts.parallel {
            frames
                .into_par_iter()
                .map(|f| self.comp.evaluate_frame(f))
                .collect()
        } else {
            frames
                .into_iter()
                .map(|f| self.comp.evaluate_frame(f))
                .collect()
        }
    }
}
