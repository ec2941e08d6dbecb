//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating quote requests that satisfy
//! every precondition of the estimator when rated in
//! [`REFERENCE_YEAR`](crate::fixtures::REFERENCE_YEAR).

use domain_quote::{AnnualMileage, CoverageType, Deductible, Location, QuoteRequest, MIN_VEHICLE_YEAR};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::REFERENCE_YEAR;

pub fn location_strategy() -> impl Strategy<Value = Location> {
    prop::sample::select(Location::ALL.to_vec())
}

pub fn mileage_strategy() -> impl Strategy<Value = AnnualMileage> {
    prop::sample::select(AnnualMileage::ALL.to_vec())
}

pub fn coverage_strategy() -> impl Strategy<Value = CoverageType> {
    prop::sample::select(CoverageType::ALL.to_vec())
}

pub fn deductible_strategy() -> impl Strategy<Value = Deductible> {
    prop::sample::select(Deductible::ALL.to_vec())
}

/// Vehicle values from 0 to 150,000.00 in cents
pub fn vehicle_value_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..15_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for valid quote requests
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        (
            MIN_VEHICLE_YEAR..=REFERENCE_YEAR,
            vehicle_value_strategy(),
            16u32..100u32,
            0u32..60u32,
        ),
        (
            location_strategy(),
            mileage_strategy(),
            coverage_strategy(),
            deductible_strategy(),
            0u32..10u32,
        ),
    )
        .prop_map(
            |(
                (vehicle_year, vehicle_value, driver_age, driving_experience),
                (location, annual_mileage, coverage_type, deductible, previous_claims),
            )| QuoteRequest {
                vehicle_make: "Ford".to_string(),
                vehicle_model: "Focus".to_string(),
                vehicle_year,
                vehicle_value,
                driver_age,
                driving_experience,
                location,
                annual_mileage,
                coverage_type,
                deductible,
                previous_claims,
            },
        )
}
