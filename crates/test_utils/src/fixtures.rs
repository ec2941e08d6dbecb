//! Pre-built Test Fixtures
//!
//! Provides ready-to-use quote data. The reference request is the worked
//! example used throughout the test suite: rated in 2025 its base premium is
//! exactly 665.

use core_kernel::FixedClock;
use domain_quote::{
    AnnualMileage, CoverageType, Deductible, Location, PremiumEstimator, QuoteForm, QuoteRequest,
    RatingTable,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Year every fixture is rated in
pub const REFERENCE_YEAR: i32 = 2025;

/// Fixture for quote requests
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// Suburban third-party quote for a 2015 vehicle worth 20,000
    pub fn reference_request() -> QuoteRequest {
        QuoteRequest {
            vehicle_make: "Toyota".to_string(),
            vehicle_model: "Corolla".to_string(),
            vehicle_year: 2015,
            vehicle_value: dec!(20000),
            driver_age: 30,
            driving_experience: 10,
            location: Location::Suburban,
            annual_mileage: AnnualMileage::Medium,
            coverage_type: CoverageType::ThirdParty,
            deductible: Deductible::D500,
            previous_claims: 0,
        }
    }

    /// Base premium of the reference request
    pub fn reference_base_premium() -> Decimal {
        dec!(665)
    }

    /// Young, inexperienced urban driver with claims on comprehensive cover
    pub fn high_risk_request() -> QuoteRequest {
        QuoteRequest {
            vehicle_make: "Subaru".to_string(),
            vehicle_model: "Impreza WRX".to_string(),
            vehicle_year: 2012,
            vehicle_value: dec!(35000),
            driver_age: 21,
            driving_experience: 2,
            location: Location::Urban,
            annual_mileage: AnnualMileage::High,
            coverage_type: CoverageType::Comprehensive,
            deductible: Deductible::D250,
            previous_claims: 2,
        }
    }

    /// The reference request as it would arrive from the form
    pub fn reference_form() -> QuoteForm {
        QuoteForm {
            vehicle_make: Some("Toyota".to_string()),
            vehicle_model: Some("Corolla".to_string()),
            vehicle_year: Some("2015".to_string()),
            vehicle_value: Some("20000".to_string()),
            driver_age: Some("30".to_string()),
            driving_experience: Some("10".to_string()),
            location: Some("suburban".to_string()),
            annual_mileage: Some("medium".to_string()),
            coverage_type: Some("third-party".to_string()),
            deductible: Some("500".to_string()),
            previous_claims: Some("0".to_string()),
        }
    }
}

/// Fixture for estimators
pub struct EstimatorFixtures;

impl EstimatorFixtures {
    /// Standard table, clock pinned to [`REFERENCE_YEAR`]
    pub fn reference() -> PremiumEstimator {
        PremiumEstimator::new().with_clock(FixedClock::year(REFERENCE_YEAR))
    }

    /// Given table, clock pinned to [`REFERENCE_YEAR`]
    pub fn with_table(table: RatingTable) -> PremiumEstimator {
        Self::reference().with_rating_table(table)
    }
}

/// Fixture for rating table documents
pub struct RatingTableFixtures;

impl RatingTableFixtures {
    /// The standard table as a JSON document
    pub fn standard_json() -> String {
        serde_json::to_string_pretty(&RatingTable::standard())
            .expect("standard table serializes")
    }
}
