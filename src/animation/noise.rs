/// Deterministic pseudo-random generator (SplitMix64).
///
/// Not cryptographically secure; only statistical spread across the visible range matters. The
/// same seed yields the same stream on every platform, which is what makes glitch effects
/// reproducible under out-of-order and multi-process rendering.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from an integer seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Deterministic noise value in `[0, 1)` for a single seed.
pub fn noise01(seed: u64) -> f64 {
    Rng64::new(seed.wrapping_mul(0xD6E8_FEB8_6659_FD93)).next_f64_01()
}

/// Compose a per-element seed from a frame index and an element index.
///
/// Different elements glitch independently at the same frame, and each element replays
/// identically when the frame is re-evaluated.
pub fn element_seed(frame: u64, element: u64) -> u64 {
    frame
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(element.wrapping_mul(0xD6E8_FEB8_6659_FD93))
}
