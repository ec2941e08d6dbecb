//! Rating tables
//!
//! Every coefficient the estimator uses lives in a [`RatingTable`] rather
//! than in the calculation itself. The standard table reproduces the
//! published motor tariff; alternative tables can be loaded from JSON so
//! pricing can be tuned without code changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::rating::RatingTable;
//!
//! let table = RatingTable::from_path("tariffs/motor_2025.json")?;
//! assert_eq!(table.metadata.product_code, "MOTOR_STD");
//! ```

use core_kernel::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::request::{AnnualMileage, CoverageType, Deductible, Location};

/// Errors that can occur while loading a rating table
#[derive(Debug, Error)]
pub enum RatingTableError {
    /// Failed to parse the table document
    #[error("Failed to parse rating table: {0}")]
    ParseError(String),

    /// Table file not found or unreadable
    #[error("Rating table file not found: {0}")]
    FileNotFound(String),

    /// A coefficient would make the premium meaningless
    #[error("Invalid rating coefficient {name}: {reason}")]
    InvalidCoefficient {
        name: String,
        reason: String,
    },
}

/// Descriptive data carried with a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingMetadata {
    /// Product code identifier
    pub product_code: String,
    /// Version of the tariff
    pub version: String,
    /// Currency premiums are quoted in
    pub currency: Currency,
}

/// Coefficients for the motor premium calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RatingTable {
    pub metadata: RatingMetadata,
    /// Starting premium before any factor is applied
    pub base_premium: Decimal,
    /// Vehicle value that corresponds to a factor of 1.0
    pub vehicle_value_divisor: Decimal,
    /// Upper bound on the vehicle value factor
    pub vehicle_value_cap: Decimal,
    /// Amount added per year of vehicle age
    pub vehicle_age_loading: Decimal,
    /// Drivers strictly younger than this are loaded
    pub young_driver_age: u32,
    pub young_driver_factor: Decimal,
    /// Drivers strictly older than this are loaded
    pub senior_driver_age: u32,
    pub senior_driver_factor: Decimal,
    /// Drivers with strictly fewer years of experience are loaded
    pub inexperienced_years: u32,
    pub inexperienced_factor: Decimal,
    pub location: BTreeMap<Location, Decimal>,
    pub annual_mileage: BTreeMap<AnnualMileage, Decimal>,
    pub coverage: BTreeMap<CoverageType, Decimal>,
    pub deductible: BTreeMap<Deductible, Decimal>,
    /// Loading per previous claim
    pub claim_loading: Decimal,
}

impl Default for RatingTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RatingTable {
    /// The standard motor tariff
    pub fn standard() -> Self {
        Self {
            metadata: RatingMetadata {
                product_code: "MOTOR_STD".to_string(),
                version: "1.0".to_string(),
                currency: Currency::USD,
            },
            base_premium: dec!(500),
            vehicle_value_divisor: dec!(20000),
            vehicle_value_cap: dec!(3),
            vehicle_age_loading: dec!(20),
            young_driver_age: 25,
            young_driver_factor: dec!(1.8),
            senior_driver_age: 65,
            senior_driver_factor: dec!(1.3),
            inexperienced_years: 5,
            inexperienced_factor: dec!(1.4),
            location: BTreeMap::from([
                (Location::Urban, dec!(1.3)),
                (Location::Suburban, dec!(1.0)),
                (Location::Rural, dec!(0.8)),
            ]),
            annual_mileage: BTreeMap::from([
                (AnnualMileage::Low, dec!(0.9)),
                (AnnualMileage::Medium, dec!(1.0)),
                (AnnualMileage::High, dec!(1.2)),
            ]),
            coverage: BTreeMap::from([
                (CoverageType::Comprehensive, dec!(1.5)),
                (CoverageType::ThirdParty, dec!(1.0)),
                (CoverageType::Commercial, dec!(2.0)),
            ]),
            deductible: BTreeMap::from([
                (Deductible::D250, dec!(1.0)),
                (Deductible::D500, dec!(0.95)),
                (Deductible::D1000, dec!(0.9)),
                (Deductible::D2000, dec!(0.85)),
            ]),
            claim_loading: dec!(0.3),
        }
    }

    /// Parses and checks a table from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed JSON or unknown keys, and
    /// `InvalidCoefficient` if [`RatingTable::check`] rejects the table.
    pub fn from_json(json: &str) -> Result<Self, RatingTableError> {
        let table: RatingTable = serde_json::from_str(json)
            .map_err(|e| RatingTableError::ParseError(e.to_string()))?;
        table.check()?;
        Ok(table)
    }

    /// Loads a table from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RatingTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RatingTableError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Rejects coefficients that would produce a negative or undefined premium
    pub fn check(&self) -> Result<(), RatingTableError> {
        if self.vehicle_value_divisor <= Decimal::ZERO {
            return Err(invalid("vehicleValueDivisor", "must be greater than zero"));
        }
        let non_negative = [
            ("basePremium", self.base_premium),
            ("vehicleValueCap", self.vehicle_value_cap),
            ("vehicleAgeLoading", self.vehicle_age_loading),
            ("claimLoading", self.claim_loading),
        ];
        for (name, value) in non_negative {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(invalid(name, "must not be negative"));
            }
        }

        let factors = [
            ("youngDriverFactor", self.young_driver_factor),
            ("seniorDriverFactor", self.senior_driver_factor),
            ("inexperiencedFactor", self.inexperienced_factor),
        ];
        for (name, value) in factors {
            check_multiplier(name, value)?;
        }
        for (key, value) in &self.location {
            check_multiplier(&format!("location.{}", key), *value)?;
        }
        for (key, value) in &self.annual_mileage {
            check_multiplier(&format!("annualMileage.{}", key), *value)?;
        }
        for (key, value) in &self.coverage {
            check_multiplier(&format!("coverage.{}", key), *value)?;
        }
        for (key, value) in &self.deductible {
            check_multiplier(&format!("deductible.{}", key), *value)?;
        }
        Ok(())
    }

    /// `min(value / divisor, cap)`
    pub fn vehicle_value_factor(&self, vehicle_value: Decimal) -> Decimal {
        (vehicle_value / self.vehicle_value_divisor).min(self.vehicle_value_cap)
    }

    /// Driver age band factor
    pub fn age_factor(&self, driver_age: u32) -> Decimal {
        if driver_age < self.young_driver_age {
            self.young_driver_factor
        } else if driver_age > self.senior_driver_age {
            self.senior_driver_factor
        } else {
            Decimal::ONE
        }
    }

    /// Driving experience factor
    pub fn experience_factor(&self, years: u32) -> Decimal {
        if years < self.inexperienced_years {
            self.inexperienced_factor
        } else {
            Decimal::ONE
        }
    }

    // Tuned tables may omit entries; a missing entry is neutral.

    pub fn location_multiplier(&self, location: Location) -> Decimal {
        self.location.get(&location).copied().unwrap_or(Decimal::ONE)
    }

    pub fn mileage_multiplier(&self, mileage: AnnualMileage) -> Decimal {
        self.annual_mileage.get(&mileage).copied().unwrap_or(Decimal::ONE)
    }

    pub fn coverage_multiplier(&self, coverage: CoverageType) -> Decimal {
        self.coverage.get(&coverage).copied().unwrap_or(Decimal::ONE)
    }

    pub fn deductible_discount(&self, deductible: Deductible) -> Decimal {
        self.deductible.get(&deductible).copied().unwrap_or(Decimal::ONE)
    }

    /// `1 + previous_claims * claim_loading`
    pub fn claims_factor(&self, previous_claims: u32) -> Decimal {
        Decimal::ONE + Decimal::from(previous_claims) * self.claim_loading
    }
}

fn invalid(name: &str, reason: &str) -> RatingTableError {
    RatingTableError::InvalidCoefficient {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn check_multiplier(name: &str, value: Decimal) -> Result<(), RatingTableError> {
    if value <= Decimal::ZERO {
        return Err(invalid(name, "must be greater than zero"));
    }
    Ok(())
}
