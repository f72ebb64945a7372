//! Asset readiness signaling.
//!
//! The engine never loads assets itself; hosts gate rendering on their own loaders through
//! [`gate::GateSet`].

/// One-time start-of-run readiness barrier.
pub mod gate;
