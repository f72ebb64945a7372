use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Terminal state of one readiness gate.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum GateOutcome {
    /// The gated resource is ready.
    Ready,
    /// The resource failed or timed out; rendering proceeds with the named fallback state.
    Degraded(String),
}

/// Settled gate reported to the host after the barrier.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GateReport {
    /// Gate name as passed to [`GateSet::begin`].
    pub name: String,
    /// How the gate settled.
    pub outcome: GateOutcome,
}

#[derive(Debug)]
struct GateSlot {
    name: String,
    outcome: Option<GateOutcome>,
}

#[derive(Debug, Default)]
struct Shared {
    slots: Mutex<Vec<GateSlot>>,
    settled: Condvar,
}

/// One-time readiness barrier for external resources (theme, fonts, media probes).
///
/// Composition setup calls [`begin`](Self::begin) for each resource it depends on; loaders
/// resolve their tokens from any thread. [`wait_all`](Self::wait_all) blocks once, before any
/// frame evaluation starts. This is the single legitimate suspension point in the engine; the
/// pure per-frame path never blocks.
#[derive(Clone, Debug, Default)]
pub struct GateSet {
    shared: Arc<Shared>,
}

/// Resolution handle for one gate. Consuming it settles the gate exactly once.
#[derive(Debug)]
pub struct GateToken {
    shared: Arc<Shared>,
    index: usize,
}

impl GateSet {
    /// Create an empty gate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named gate and return its resolution token.
    pub fn begin(&self, name: impl Into<String>) -> GateToken {
        let mut slots = self.shared.slots.lock().expect("gate lock poisoned");
        slots.push(GateSlot {
            name: name.into(),
            outcome: None,
        });
        GateToken {
            shared: Arc::clone(&self.shared),
            index: slots.len() - 1,
        }
    }

    /// Block until every registered gate has settled or `timeout` elapses.
    ///
    /// Gates still pending at the deadline settle as degraded ("continue-or-fail", never hang):
    /// the render proceeds with fallback state and the degradation is logged and reported. Late
    /// `resolve` calls on already-settled gates are ignored.
    pub fn wait_all(&self, timeout: Duration) -> Vec<GateReport> {
        let deadline = Instant::now() + timeout;
        let mut slots = self.shared.slots.lock().expect("gate lock poisoned");
        loop {
            if slots.iter().all(|s| s.outcome.is_some()) {
                break;
            }
            let now = Instant::now();
            if now >= deadline {
                for slot in slots.iter_mut().filter(|s| s.outcome.is_none()) {
                    tracing::warn!(gate = %slot.name, "gate timed out; continuing degraded");
                    slot.outcome = Some(GateOutcome::Degraded("timed out".to_owned()));
                }
                break;
            }
            let (guard, _) = self
                .shared
                .settled
                .wait_timeout(slots, deadline - now)
                .expect("gate lock poisoned");
            slots = guard;
        }

        slots
            .iter()
            .map(|s| GateReport {
                name: s.name.clone(),
                outcome: s.outcome.clone().expect("all gates settled"),
            })
            .collect()
    }
}

impl GateToken {
    /// Name of the gate this token resolves.
    pub fn name(&self) -> String {
        let slots = self.shared.slots.lock().expect("gate lock poisoned");
        slots[self.index].name.clone()
    }

    /// Settle the gate. A gate that failed must still resolve: pass
    /// [`GateOutcome::Degraded`] rather than dropping the token on the floor.
    pub fn resolve(self, outcome: GateOutcome) {
        let mut slots = self.shared.slots.lock().expect("gate lock poisoned");
        let slot = &mut slots[self.index];
        if slot.outcome.is_some() {
            // Already settled (e.g. by the wait_all timeout fallback).
            tracing::debug!(gate = %slot.name, "late gate resolution ignored");
            return;
        }
        if let GateOutcome::Degraded(reason) = &outcome {
            tracing::warn!(gate = %slot.name, %reason, "gate resolved degraded");
        }
        slot.outcome = Some(outcome);
        self.shared.settled.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn empty_set_settles_immediately() {
        let gates = GateSet::new();
        let reports = gates.wait_all(Duration::from_millis(1));
        assert!(reports.is_empty());
    }

    #[test]
    fn resolved_before_wait_reports_ready() {
        let gates = GateSet::new();
        let token = gates.begin("theme");
        token.resolve(GateOutcome::Ready);
        let reports = gates.wait_all(Duration::from_millis(1));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "theme");
        assert_eq!(reports[0].outcome, GateOutcome::Ready);
    }

    #[test]
    fn resolution_from_another_thread_unblocks_wait() {
        let gates = GateSet::new();
        let token = gates.begin("portrait");
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            token.resolve(GateOutcome::Ready);
        });
        let reports = gates.wait_all(Duration::from_secs(5));
        handle.join().unwrap();
        assert_eq!(reports[0].outcome, GateOutcome::Ready);
    }

    #[test]
    fn timeout_degrades_instead_of_hanging() {
        let gates = GateSet::new();
        let _token = gates.begin("drone-feed");
        let reports = gates.wait_all(Duration::from_millis(10));
        assert!(matches!(reports[0].outcome, GateOutcome::Degraded(_)));
    }

    #[test]
    fn failed_gate_resolves_degraded_not_fatal() {
        let gates = GateSet::new();
        let token = gates.begin("theme");
        token.resolve(GateOutcome::Degraded("fetch failed".to_owned()));
        let reports = gates.wait_all(Duration::from_millis(1));
        assert_eq!(
            reports[0].outcome,
            GateOutcome::Degraded("fetch failed".to_owned())
        );
    }

    #[test]
    fn late_resolution_after_timeout_is_ignored() {
        let gates = GateSet::new();
        let token = gates.begin("slow");
        let reports = gates.wait_all(Duration::from_millis(5));
        assert!(matches!(reports[0].outcome, GateOutcome::Degraded(_)));
        token.resolve(GateOutcome::Ready);
        let reports = gates.wait_all(Duration::from_millis(1));
        assert!(matches!(reports[0].outcome, GateOutcome::Degraded(_)));
    }
}
