use rand::{rngs::StdRng, Rng, SeedableRng};

/// Share of donors marked available at load time.
pub const AVAILABILITY_PROBABILITY: f64 = 0.7;

/// Source of the per-donor availability flag, drawn once per donor at load.
pub trait AvailabilitySource: Send {
    fn next_available(&mut self) -> bool;
}

pub struct RandomAvailability<R> {
    rng: R,
    probability: f64,
}

impl RandomAvailability<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAvailability<R> {
    pub fn new(rng: R) -> Self {
        Self::with_probability(rng, AVAILABILITY_PROBABILITY)
    }

    pub fn with_probability(rng: R, probability: f64) -> Self {
        Self {
            rng,
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl<R: Rng + Send> AvailabilitySource for RandomAvailability<R> {
    fn next_available(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }
}
