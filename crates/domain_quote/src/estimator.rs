//! Premium estimation
//!
//! [`PremiumEstimator`] turns a [`QuoteRequest`] into a premium quote and a
//! risk assessment. Rating is a fixed chain of steps applied in this order:
//!
//! ```text
//! base            = table.base_premium
//! base           *= min(value / divisor, cap)
//! base           += vehicle_age * age_loading
//! base           *= driver age factor
//! base           *= experience factor
//! base           *= location * mileage * coverage * deductible   (one at a time)
//! base           *= 1 + previous_claims * claim_loading
//! premium         = base * uncertainty factor
//! annual, monthly = round(premium), round(annual / 12)
//! ```
//!
//! Everything up to the uncertainty factor is deterministic and available
//! through [`PremiumEstimator::base_premium`].

use std::sync::Arc;

use core_kernel::{Clock, Currency, SystemClock};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::QuoteError;
use crate::premium::PremiumQuote;
use crate::rating::RatingTable;
use crate::request::QuoteRequest;
use crate::risk::{self, RiskAssessment};
use crate::uncertainty::{UncertaintySource, UniformUncertainty};

/// Result of one estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub quote: PremiumQuote,
    pub risk: RiskAssessment,
    /// Premium before the uncertainty factor
    pub base_premium: Decimal,
    /// Factor drawn for this estimate
    pub uncertainty_factor: Decimal,
}

impl Estimate {
    pub fn into_parts(self) -> (PremiumQuote, RiskAssessment) {
        (self.quote, self.risk)
    }
}

/// Motor premium estimator
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent callers. Randomness is supplied per call.
#[derive(Clone)]
pub struct PremiumEstimator {
    table: RatingTable,
    clock: Arc<dyn Clock>,
    currency: Currency,
}

impl PremiumEstimator {
    /// Creates an estimator with the standard table and the system clock
    pub fn new() -> Self {
        let table = RatingTable::standard();
        let currency = table.metadata.currency;
        Self {
            table,
            clock: Arc::new(SystemClock),
            currency,
        }
    }

    /// Uses a different rating table, adopting its currency
    pub fn with_rating_table(mut self, table: RatingTable) -> Self {
        self.currency = table.metadata.currency;
        self.table = table;
        self
    }

    /// Uses a different source for the current year
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Quotes in a different currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn rating_table(&self) -> &RatingTable {
        &self.table
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Deterministic premium before the uncertainty factor
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails [`QuoteRequest::validate`].
    pub fn base_premium(&self, request: &QuoteRequest) -> Result<Decimal, QuoteError> {
        let current_year = self.clock.current_year();
        request.validate(current_year)?;
        Ok(self.rate(request, request.vehicle_age(current_year)))
    }

    /// Estimates a premium using real randomness
    pub fn estimate(&self, request: &QuoteRequest) -> Result<Estimate, QuoteError> {
        self.estimate_with(request, &mut UniformUncertainty::from_entropy())
    }

    /// Estimates a premium drawing the uncertainty factor from `source`
    ///
    /// # Arguments
    ///
    /// * `request` - The quote request
    /// * `source` - Supplies the uncertainty factor; use
    ///   [`FixedUncertainty::neutral`](crate::uncertainty::FixedUncertainty::neutral)
    ///   to obtain the base premium exactly
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails [`QuoteRequest::validate`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let estimator = PremiumEstimator::new().with_clock(FixedClock::year(2025));
    /// let estimate = estimator.estimate_with(&request, &mut UniformUncertainty::seeded(7))?;
    /// println!("{} per year", estimate.quote.annual_premium);
    /// ```
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            vehicle_year = request.vehicle_year,
            location = %request.location,
            coverage = %request.coverage_type,
        )
    )]
    pub fn estimate_with(
        &self,
        request: &QuoteRequest,
        source: &mut impl UncertaintySource,
    ) -> Result<Estimate, QuoteError> {
        let current_year = self.clock.current_year();
        request.validate(current_year)?;

        let vehicle_age = request.vehicle_age(current_year);
        let base_premium = self.rate(request, vehicle_age);
        let uncertainty_factor = source.factor();
        let quote = PremiumQuote::from_annual(base_premium * uncertainty_factor, self.currency);
        let risk = risk::assess(request, vehicle_age);

        debug!(
            %base_premium,
            %uncertainty_factor,
            annual = %quote.annual_premium,
            monthly = %quote.monthly_premium,
            highest_risk = %risk.highest_severity(),
            "Premium estimated"
        );

        Ok(Estimate {
            quote,
            risk,
            base_premium,
            uncertainty_factor,
        })
    }

    fn rate(&self, request: &QuoteRequest, vehicle_age: i32) -> Decimal {
        let table = &self.table;

        let mut premium = table.base_premium;
        premium *= table.vehicle_value_factor(request.vehicle_value);
        premium += Decimal::from(vehicle_age) * table.vehicle_age_loading;

        premium *= table.age_factor(request.driver_age);
        premium *= table.experience_factor(request.driving_experience);

        premium *= table.location_multiplier(request.location);
        premium *= table.mileage_multiplier(request.annual_mileage);
        premium *= table.coverage_multiplier(request.coverage_type);
        premium *= table.deductible_discount(request.deductible);

        premium *= table.claims_factor(request.previous_claims);
        premium
    }
}

impl Default for PremiumEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PremiumEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PremiumEstimator")
            .field("product_code", &self.table.metadata.product_code)
            .field("current_year", &self.clock.current_year())
            .field("currency", &self.currency)
            .finish()
    }
}
