use rand::{rngs::StdRng, RngCore, SeedableRng};

/// The single source of randomness for deck construction, drawing, shop
/// generation and boss selection.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some((self.next_u64() % len as u64) as usize)
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for RngState {
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Replays a fixed list of values, wrapping around at the end. An empty list
/// always yields zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedSequence {
    values: Vec<u64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn zeros() -> Self {
        Self::default()
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedSequence {
    fn next_u64(&mut self) -> u64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
