//! Premium quote value object
//!
//! The estimator produces an annual figure; the monthly instalment is
//! derived from the already-rounded annual premium, not from the raw value.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError};

/// Premium payment frequency offered on a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumFrequency {
    /// Annual premium
    Annual,
    /// Monthly premium
    Monthly,
}

impl PremiumFrequency {
    /// Returns the number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PremiumFrequency::Annual => 1,
            PremiumFrequency::Monthly => 12,
        }
    }
}

/// Estimated premium in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuote {
    pub annual_premium: Money,
    pub monthly_premium: Money,
}

impl PremiumQuote {
    /// Builds a quote from an unrounded annual amount
    ///
    /// Both figures round half away from zero, which for the non-negative
    /// amounts produced by rating is ordinary "round half up":
    /// `annual = round(amount)`, `monthly = round(annual / 12)`.
    pub fn from_annual(amount: Decimal, currency: Currency) -> Self {
        let annual = round_half_up(amount);
        let per_year = Decimal::from(PremiumFrequency::Monthly.payments_per_year());
        let monthly = round_half_up(annual / per_year);

        Self {
            annual_premium: Money::new(annual, currency),
            monthly_premium: Money::new(monthly, currency),
        }
    }

    /// Amount due per payment at the given frequency
    pub fn per_payment(&self, frequency: PremiumFrequency) -> Money {
        match frequency {
            PremiumFrequency::Annual => self.annual_premium,
            PremiumFrequency::Monthly => self.monthly_premium,
        }
    }

    /// Annual premium as an integer
    ///
    /// # Errors
    ///
    /// `MoneyError::Overflow` when a tuned rating table pushes the premium
    /// past `i64`.
    pub fn annual_whole(&self) -> Result<i64, MoneyError> {
        self.annual_premium.whole_units()
    }

    /// Monthly premium as an integer
    pub fn monthly_whole(&self) -> Result<i64, MoneyError> {
        self.monthly_premium.whole_units()
    }

    pub fn currency(&self) -> Currency {
        self.annual_premium.currency()
    }
}

// Rounded before the 4dp storage precision of Money can nudge a value onto
// the midpoint.
fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
