//! Reproducible synthetic signals for regression tests

/// Simple linear congruential generator for reproducible randomness
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator; equal seeds give equal streams
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Next raw 64-bit state
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `[0.0, 1.0]`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }

    /// Uniform value in `[lo, hi]`
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Random walk of `len` samples starting at 0, with steps in `[-step, step]`.
pub fn random_walk(len: usize, step: f64, seed: u32) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    let mut y = 0.0;
    (0..len)
        .map(|_| {
            let current = y;
            y += rng.range_f64(-step, step);
            current
        })
        .collect()
}

/// Flat baseline with a single-sample spike of `height` at each position.
///
/// Positions outside `0..len` are ignored.
pub fn spike_train(len: usize, positions: &[usize], height: f64) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    for &p in positions {
        if let Some(sample) = signal.get_mut(p) {
            *sample = height;
        }
    }
    signal
}

/// Spikes of `height` every `spacing` samples over uniform noise in
/// `[-noise, noise]`.
pub fn noisy_spikes(len: usize, spacing: usize, height: f64, noise: f64, seed: u32) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    (0..len)
        .map(|i| {
            let base = rng.range_f64(-noise, noise);
            if spacing > 0 && i % spacing == spacing / 2 {
                base + height
            } else {
                base
            }
        })
        .collect()
}
