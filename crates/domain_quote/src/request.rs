//! Quote request model
//!
//! A [`QuoteRequest`] is the fully typed input to the estimator. The closed
//! sets (location, mileage band, coverage type, deductible) are enums, so an
//! unexpected value is rejected when the request is built rather than
//! surfacing as a missing table entry half-way through rating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

/// Oldest model year accepted for quoting
pub const MIN_VEHICLE_YEAR: i32 = 1990;

/// Where the vehicle is primarily kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Urban, Location::Suburban, Location::Rural];

    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Urban => "urban",
            Location::Suburban => "suburban",
            Location::Rural => "rural",
        }
    }
}

impl FromStr for Location {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urban" => Ok(Location::Urban),
            "suburban" => Ok(Location::Suburban),
            "rural" => Ok(Location::Rural),
            _ => Err(QuoteError::invalid_enum("location", s)),
        }
    }
}

impl TryFrom<String> for Location {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annual mileage band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum AnnualMileage {
    Low,
    Medium,
    High,
}

impl AnnualMileage {
    pub const ALL: [AnnualMileage; 3] = [AnnualMileage::Low, AnnualMileage::Medium, AnnualMileage::High];

    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnualMileage::Low => "low",
            AnnualMileage::Medium => "medium",
            AnnualMileage::High => "high",
        }
    }
}

impl FromStr for AnnualMileage {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(AnnualMileage::Low),
            "medium" => Ok(AnnualMileage::Medium),
            "high" => Ok(AnnualMileage::High),
            _ => Err(QuoteError::invalid_enum("annualMileage", s)),
        }
    }
}

impl TryFrom<String> for AnnualMileage {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AnnualMileage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of cover requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum CoverageType {
    /// Own-damage plus third-party liability
    Comprehensive,
    /// Liability to others only
    ThirdParty,
    /// Business use
    Commercial,
}

impl CoverageType {
    pub const ALL: [CoverageType; 3] = [
        CoverageType::Comprehensive,
        CoverageType::ThirdParty,
        CoverageType::Commercial,
    ];

    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Comprehensive => "comprehensive",
            CoverageType::ThirdParty => "third-party",
            CoverageType::Commercial => "commercial",
        }
    }
}

impl FromStr for CoverageType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comprehensive" => Ok(CoverageType::Comprehensive),
            "third-party" => Ok(CoverageType::ThirdParty),
            "commercial" => Ok(CoverageType::Commercial),
            _ => Err(QuoteError::invalid_enum("coverageType", s)),
        }
    }
}

impl TryFrom<String> for CoverageType {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voluntary deductible, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Deductible {
    D250,
    D500,
    D1000,
    D2000,
}

impl Deductible {
    pub const ALL: [Deductible; 4] = [
        Deductible::D250,
        Deductible::D500,
        Deductible::D1000,
        Deductible::D2000,
    ];

    /// Returns the deductible amount
    pub fn amount(&self) -> u32 {
        match self {
            Deductible::D250 => 250,
            Deductible::D500 => 500,
            Deductible::D1000 => 1000,
            Deductible::D2000 => 2000,
        }
    }
}

impl TryFrom<u32> for Deductible {
    type Error = QuoteError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            250 => Ok(Deductible::D250),
            500 => Ok(Deductible::D500),
            1000 => Ok(Deductible::D1000),
            2000 => Ok(Deductible::D2000),
            other => Err(QuoteError::invalid_enum("deductible", other.to_string())),
        }
    }
}

impl From<Deductible> for u32 {
    fn from(deductible: Deductible) -> Self {
        deductible.amount()
    }
}

impl FromStr for Deductible {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: u32 = s
            .trim()
            .parse()
            .map_err(|_| QuoteError::invalid_enum("deductible", s))?;
        Deductible::try_from(amount)
    }
}

impl fmt::Display for Deductible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

/// A fully typed request for a motor premium estimate
///
/// Field names serialize in camelCase so a request can be posted straight
/// from the quote form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    /// Market value of the vehicle
    pub vehicle_value: Decimal,
    pub driver_age: u32,
    /// Years holding a licence
    pub driving_experience: u32,
    pub location: Location,
    pub annual_mileage: AnnualMileage,
    pub coverage_type: CoverageType,
    pub deductible: Deductible,
    pub previous_claims: u32,
}

impl QuoteRequest {
    /// Age of the vehicle in whole years, as of `current_year`
    pub fn vehicle_age(&self, current_year: i32) -> i32 {
        current_year - self.vehicle_year
    }

    /// Checks the numeric preconditions of the estimator
    ///
    /// # Errors
    ///
    /// * `MissingRequiredField` for a blank make or model
    /// * `OutOfRangeNumeric` for a model year outside
    ///   `MIN_VEHICLE_YEAR..=current_year`, a negative vehicle value, or a
    ///   driver age of zero
    pub fn validate(&self, current_year: i32) -> Result<(), QuoteError> {
        if self.vehicle_make.trim().is_empty() {
            return Err(QuoteError::missing("vehicleMake"));
        }
        if self.vehicle_model.trim().is_empty() {
            return Err(QuoteError::missing("vehicleModel"));
        }
        if self.vehicle_year < MIN_VEHICLE_YEAR || self.vehicle_year > current_year {
            return Err(QuoteError::out_of_range(
                "vehicleYear",
                self.vehicle_year,
                format!("must be between {} and {}", MIN_VEHICLE_YEAR, current_year),
            ));
        }
        if self.vehicle_value.is_sign_negative() && !self.vehicle_value.is_zero() {
            return Err(QuoteError::out_of_range(
                "vehicleValue",
                self.vehicle_value,
                "must not be negative",
            ));
        }
        if self.driver_age == 0 {
            return Err(QuoteError::out_of_range(
                "driverAge",
                self.driver_age,
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Request document as posted, before closed-set values are checked
///
/// [`into_request`](Self::into_request) names the offending field when a
/// value falls outside its set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestDocument {
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub vehicle_value: Decimal,
    pub driver_age: i64,
    pub driving_experience: i64,
    pub location: String,
    pub annual_mileage: String,
    pub coverage_type: String,
    /// Accepts `500` or `"500"`
    pub deductible: serde_json::Value,
    pub previous_claims: i64,
}

impl QuoteRequestDocument {
    /// Converts the document into a typed request
    ///
    /// # Errors
    ///
    /// * `InvalidEnumValue` for a closed-set field outside its set
    /// * `OutOfRangeNumeric` for a negative age, experience or claim count
    pub fn into_request(self) -> Result<QuoteRequest, QuoteError> {
        let deductible = match self.deductible {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };

        Ok(QuoteRequest {
            vehicle_make: self.vehicle_make,
            vehicle_model: self.vehicle_model,
            vehicle_year: self.vehicle_year,
            vehicle_value: self.vehicle_value,
            driver_age: count("driverAge", self.driver_age)?,
            driving_experience: count("drivingExperience", self.driving_experience)?,
            location: self.location.parse()?,
            annual_mileage: self.annual_mileage.parse()?,
            coverage_type: self.coverage_type.parse()?,
            deductible: deductible.parse()?,
            previous_claims: count("previousClaims", self.previous_claims)?,
        })
    }
}

impl TryFrom<QuoteRequestDocument> for QuoteRequest {
    type Error = QuoteError;

    fn try_from(document: QuoteRequestDocument) -> Result<Self, Self::Error> {
        document.into_request()
    }
}

/// Narrows a signed count to `u32`, rejecting negatives
pub(crate) fn count(field: &'static str, value: i64) -> Result<u32, QuoteError> {
    if value < 0 {
        return Err(QuoteError::out_of_range(field, value, "must not be negative"));
    }
    u32::try_from(value).map_err(|_| QuoteError::out_of_range(field, value, "too large"))
}
