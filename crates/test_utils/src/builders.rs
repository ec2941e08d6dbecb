//! Test Data Builders
//!
//! Provides a builder for quote requests. Tests specify only the fields they
//! care about; everything else comes from the reference request.

use domain_quote::{AnnualMileage, CoverageType, Deductible, Location, QuoteRequest};
use rust_decimal::Decimal;

use crate::fixtures::QuoteFixtures;

/// Builder for constructing test quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder seeded with the reference request
    pub fn new() -> Self {
        Self {
            request: QuoteFixtures::reference_request(),
        }
    }

    pub fn with_vehicle(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.request.vehicle_make = make.into();
        self.request.vehicle_model = model.into();
        self
    }

    pub fn with_vehicle_year(mut self, year: i32) -> Self {
        self.request.vehicle_year = year;
        self
    }

    pub fn with_vehicle_value(mut self, value: Decimal) -> Self {
        self.request.vehicle_value = value;
        self
    }

    pub fn with_driver_age(mut self, age: u32) -> Self {
        self.request.driver_age = age;
        self
    }

    pub fn with_driving_experience(mut self, years: u32) -> Self {
        self.request.driving_experience = years;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.request.location = location;
        self
    }

    pub fn with_annual_mileage(mut self, mileage: AnnualMileage) -> Self {
        self.request.annual_mileage = mileage;
        self
    }

    pub fn with_coverage(mut self, coverage: CoverageType) -> Self {
        self.request.coverage_type = coverage;
        self
    }

    pub fn with_deductible(mut self, deductible: Deductible) -> Self {
        self.request.deductible = deductible;
        self
    }

    pub fn with_previous_claims(mut self, claims: u32) -> Self {
        self.request.previous_claims = claims;
        self
    }

    /// Builds the request
    pub fn build(self) -> QuoteRequest {
        self.request
    }
}
