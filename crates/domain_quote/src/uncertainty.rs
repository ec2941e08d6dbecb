//! Estimation uncertainty
//!
//! An estimate is deliberately not a firm price: the final premium is scaled
//! by a factor drawn uniformly from `[0.9, 1.1)`, so two identical requests
//! usually produce different figures. The factor comes from an
//! [`UncertaintySource`] so tests can pin it and simulations can seed it.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::QuoteError;

/// Lower bound (inclusive) of the standard uncertainty band
pub const UNCERTAINTY_LOW: Decimal = dec!(0.9);
/// Upper bound (exclusive) of the standard uncertainty band
pub const UNCERTAINTY_HIGH: Decimal = dec!(1.1);

// Factors are drawn on a grid of one millionth.
const FACTOR_SCALE: u32 = 6;

/// Supplies the multiplicative uncertainty factor for one estimate
pub trait UncertaintySource {
    fn factor(&mut self) -> Decimal;
}

impl<T: UncertaintySource + ?Sized> UncertaintySource for &mut T {
    fn factor(&mut self) -> Decimal {
        (**self).factor()
    }
}

/// Always returns the same factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUncertainty(pub Decimal);

impl FixedUncertainty {
    /// A factor of exactly 1.0, exposing the base premium unchanged
    pub fn neutral() -> Self {
        Self(Decimal::ONE)
    }
}

impl UncertaintySource for FixedUncertainty {
    fn factor(&mut self) -> Decimal {
        self.0
    }
}

/// Draws factors uniformly from `[low, high)`
#[derive(Debug, Clone)]
pub struct UniformUncertainty<R> {
    rng: R,
    low: i64,
    high: i64,
}

impl UniformUncertainty<ThreadRng> {
    /// Standard band backed by the thread-local generator
    pub fn from_entropy() -> Self {
        Self::standard(rand::rng())
    }
}

impl UniformUncertainty<ChaCha20Rng> {
    /// Standard band backed by a seeded ChaCha20 generator
    ///
    /// The same seed yields the same sequence of factors.
    pub fn seeded(seed: u64) -> Self {
        Self::standard(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformUncertainty<R> {
    /// Standard `[0.9, 1.1)` band over the given generator
    pub fn standard(rng: R) -> Self {
        Self {
            rng,
            low: 900_000,
            high: 1_100_000,
        }
    }

    /// Custom band over the given generator
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeNumeric` unless `0 < low < high`.
    pub fn with_bounds(rng: R, low: Decimal, high: Decimal) -> Result<Self, QuoteError> {
        if low <= Decimal::ZERO || high <= low {
            return Err(QuoteError::out_of_range(
                "uncertainty",
                format!("[{}, {})", low, high),
                "bounds must satisfy 0 < low < high",
            ));
        }
        let scaled = |bound: Decimal| {
            bound
                .checked_mul(Decimal::from(10_i64.pow(FACTOR_SCALE)))
                .and_then(|scaled| scaled.trunc().to_i64())
                .ok_or_else(|| QuoteError::out_of_range("uncertainty", bound, "bound too large"))
        };
        let (low, high) = (scaled(low)?, scaled(high)?);
        if high <= low {
            return Err(QuoteError::out_of_range(
                "uncertainty",
                format!("[{}, {})", low, high),
                "band narrower than the factor resolution",
            ));
        }
        Ok(Self { rng, low, high })
    }

    /// Inclusive lower bound of the band
    pub fn low(&self) -> Decimal {
        Decimal::new(self.low, FACTOR_SCALE)
    }

    /// Exclusive upper bound of the band
    pub fn high(&self) -> Decimal {
        Decimal::new(self.high, FACTOR_SCALE)
    }
}

impl<R: Rng> UncertaintySource for UniformUncertainty<R> {
    fn factor(&mut self) -> Decimal {
        let draw = self.rng.random_range(self.low..self.high);
        Decimal::new(draw, FACTOR_SCALE)
    }
}
