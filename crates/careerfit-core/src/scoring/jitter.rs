//! Confidence jitter sources.
//!
//! Confidence is a base value per recommendation plus a small random
//! spread. The randomness lives behind [`ConfidenceJitter`] so the rest of
//! the scoring pipeline stays a pure function of the responses.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Produces the jitter added on top of a confidence base.
pub trait ConfidenceJitter: std::fmt::Debug + Send + Sync {
    /// Return a value in `[0, span)`.
    fn sample(&mut self, span: f64) -> f64;
}

/// Uniform jitter from a PCG generator.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: Mcg128Xsl64,
}

impl RandomJitter {
    /// Seeded for reproducibility, or from entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self { rng }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ConfidenceJitter for RandomJitter {
    fn sample(&mut self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        self.rng.gen::<f64>() * span
    }
}

/// Always zero: confidence is exactly the base for the recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl ConfidenceJitter for NoJitter {
    fn sample(&mut self, _span: f64) -> f64 {
        0.0
    }
}

/// A fixed fraction of the span, clamped into `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl ConfidenceJitter for FixedJitter {
    fn sample(&mut self, span: f64) -> f64 {
        let fraction = if self.0.is_finite() {
            self.0.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        };
        span * fraction
    }
}
