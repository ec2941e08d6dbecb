//! Raw quote form intake
//!
//! The quote form is filled in over three input steps (vehicle, driver,
//! coverage) and every value arrives as text. [`QuoteForm`] holds that raw
//! input and is the only place where strings are coerced into a
//! [`QuoteRequest`]; the estimator itself never sees unparsed values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QuoteError;
use crate::request::{count, AnnualMileage, CoverageType, Deductible, Location, QuoteRequest};

/// Input steps of the quote form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStep {
    Vehicle,
    Driver,
    Coverage,
}

impl FormStep {
    pub const ALL: [FormStep; 3] = [FormStep::Vehicle, FormStep::Driver, FormStep::Coverage];

    /// Field names that must be filled before leaving this step
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            FormStep::Vehicle => &["vehicleMake", "vehicleModel", "vehicleYear", "vehicleValue"],
            FormStep::Driver => &["driverAge", "drivingExperience", "location", "annualMileage"],
            FormStep::Coverage => &["coverageType", "deductible", "previousClaims"],
        }
    }

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            FormStep::Vehicle => 1,
            FormStep::Driver => 2,
            FormStep::Coverage => 3,
        }
    }

    /// The step following this one, if any
    pub fn next(&self) -> Option<FormStep> {
        match self {
            FormStep::Vehicle => Some(FormStep::Driver),
            FormStep::Driver => Some(FormStep::Coverage),
            FormStep::Coverage => None,
        }
    }
}

/// Quote form as submitted, one optional string per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteForm {
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<String>,
    pub vehicle_value: Option<String>,
    pub driver_age: Option<String>,
    pub driving_experience: Option<String>,
    pub location: Option<String>,
    pub annual_mileage: Option<String>,
    pub coverage_type: Option<String>,
    pub deductible: Option<String>,
    pub previous_claims: Option<String>,
}

impl QuoteForm {
    /// Raw value of a field by its form name
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "vehicleMake" => &self.vehicle_make,
            "vehicleModel" => &self.vehicle_model,
            "vehicleYear" => &self.vehicle_year,
            "vehicleValue" => &self.vehicle_value,
            "driverAge" => &self.driver_age,
            "drivingExperience" => &self.driving_experience,
            "location" => &self.location,
            "annualMileage" => &self.annual_mileage,
            "coverageType" => &self.coverage_type,
            "deductible" => &self.deductible,
            "previousClaims" => &self.previous_claims,
            _ => return None,
        };
        value.as_deref()
    }

    /// Sets a field by its form name; returns false for unknown names
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "vehicleMake" => &mut self.vehicle_make,
            "vehicleModel" => &mut self.vehicle_model,
            "vehicleYear" => &mut self.vehicle_year,
            "vehicleValue" => &mut self.vehicle_value,
            "driverAge" => &mut self.driver_age,
            "drivingExperience" => &mut self.driving_experience,
            "location" => &mut self.location,
            "annualMileage" => &mut self.annual_mileage,
            "coverageType" => &mut self.coverage_type,
            "deductible" => &mut self.deductible,
            "previousClaims" => &mut self.previous_claims,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Required fields of `step` that are absent or blank
    pub fn missing_fields(&self, step: FormStep) -> Vec<&'static str> {
        step.required_fields()
            .iter()
            .copied()
            .filter(|name| is_blank(self.field(name)))
            .collect()
    }

    /// Whether `step` may be left
    pub fn is_step_complete(&self, step: FormStep) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Coerces the raw input into a typed request
    ///
    /// Fields are checked in form order and the first problem is reported.
    ///
    /// # Errors
    ///
    /// * `MissingRequiredField` for an absent or blank field
    /// * `InvalidNumber` for a numeric field that does not parse
    /// * `OutOfRangeNumeric` for a negative age, experience or claim count
    /// * `InvalidEnumValue` for a closed-set field outside its set
    pub fn into_request(self) -> Result<QuoteRequest, QuoteError> {
        Ok(QuoteRequest {
            vehicle_make: required(&self.vehicle_make, "vehicleMake")?.to_string(),
            vehicle_model: required(&self.vehicle_model, "vehicleModel")?.to_string(),
            vehicle_year: number(&self.vehicle_year, "vehicleYear")?,
            vehicle_value: number::<Decimal>(&self.vehicle_value, "vehicleValue")?,
            driver_age: count("driverAge", number(&self.driver_age, "driverAge")?)?,
            driving_experience: count(
                "drivingExperience",
                number(&self.driving_experience, "drivingExperience")?,
            )?,
            location: required(&self.location, "location")?.parse::<Location>()?,
            annual_mileage: required(&self.annual_mileage, "annualMileage")?.parse::<AnnualMileage>()?,
            coverage_type: required(&self.coverage_type, "coverageType")?.parse::<CoverageType>()?,
            deductible: required(&self.deductible, "deductible")?.parse::<Deductible>()?,
            previous_claims: count(
                "previousClaims",
                number(&self.previous_claims, "previousClaims")?,
            )?,
        })
    }
}

impl TryFrom<QuoteForm> for QuoteRequest {
    type Error = QuoteError;

    fn try_from(form: QuoteForm) -> Result<Self, Self::Error> {
        form.into_request()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, QuoteError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(QuoteError::missing(field)),
    }
}

fn number<T: FromStr>(value: &Option<String>, field: &'static str) -> Result<T, QuoteError> {
    let raw = required(value, field)?;
    raw.parse().map_err(|_| QuoteError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
