//! Top-level configuration for the band simulation.

use crate::chain::ChainConfig;
use crate::error::LanyardError;
use crate::float::Float;
use crate::smoothing::SmoothingConfig;

/// Configuration for a [`Band`](crate::band::Band).
///
/// # Builder Pattern
/// ```
/// use lanyard::config::BandConfig;
///
/// let config: BandConfig<f32> = BandConfig::new()
///     .with_ribbon_samples(32)
///     .with_stabilizer_fraction(0.25);
/// ```
pub struct BandConfig<F: Float> {
    /// Chain assembly parameters.
    pub chain: ChainConfig<F>,
    /// Jitter filter parameters for the innermost links.
    pub smoothing: SmoothingConfig<F>,
    /// Facing-correction strength. Default: 0.25.
    pub stabilizer_fraction: F,
    /// Points sampled along the curve into the ribbon buffer each frame.
    /// Default: 32.
    pub ribbon_samples: usize,
}

impl<F: Float> BandConfig<F> {
    pub fn new() -> Self {
        BandConfig {
            chain: ChainConfig::new(),
            smoothing: SmoothingConfig::new(),
            stabilizer_fraction: F::from_f32(0.25),
            ribbon_samples: 32,
        }
    }

    pub fn with_chain(mut self, chain: ChainConfig<F>) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingConfig<F>) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_stabilizer_fraction(mut self, fraction: F) -> Self {
        self.stabilizer_fraction = fraction;
        self
    }

    pub fn with_ribbon_samples(mut self, samples: usize) -> Self {
        self.ribbon_samples = samples;
        self
    }

    pub fn validate(&self) -> Result<(), LanyardError> {
        if self.ribbon_samples < 2 {
            return Err(LanyardError::InvalidSampleCount);
        }
        self.smoothing.validate()?;
        self.chain.validate()?;
        Ok(())
    }
}

impl<F: Float> Default for BandConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
