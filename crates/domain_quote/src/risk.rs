//! Risk assessment
//!
//! Alongside the premium, a quote shows five categorical risk indicators.
//! They are derived directly from the request, never from the premium, and
//! involve no randomness.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QuoteError;
use crate::request::{Location, QuoteRequest};

/// Severity of a single risk indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Lower-case name, as used for styling
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five indicators, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactorKind {
    DriverAge,
    DrivingExperience,
    LocationRisk,
    VehicleAge,
    ClaimsHistory,
}

impl RiskFactorKind {
    pub const ORDER: [RiskFactorKind; 5] = [
        RiskFactorKind::DriverAge,
        RiskFactorKind::DrivingExperience,
        RiskFactorKind::LocationRisk,
        RiskFactorKind::VehicleAge,
        RiskFactorKind::ClaimsHistory,
    ];

    /// Index of this indicator in display order
    pub fn position(&self) -> usize {
        match self {
            RiskFactorKind::DriverAge => 0,
            RiskFactorKind::DrivingExperience => 1,
            RiskFactorKind::LocationRisk => 2,
            RiskFactorKind::VehicleAge => 3,
            RiskFactorKind::ClaimsHistory => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactorKind::DriverAge => "Driver Age",
            RiskFactorKind::DrivingExperience => "Driving Experience",
            RiskFactorKind::LocationRisk => "Location Risk",
            RiskFactorKind::VehicleAge => "Vehicle Age",
            RiskFactorKind::ClaimsHistory => "Claims History",
        }
    }
}

/// One categorical risk indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub label: String,
    pub severity: RiskLevel,
}

impl RiskFactor {
    fn new(kind: RiskFactorKind, severity: RiskLevel) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            severity,
        }
    }
}

/// Exactly five risk factors in [`RiskFactorKind::ORDER`]
///
/// Deserialization enforces the order and the labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RiskFactor>", into = "Vec<RiskFactor>")]
pub struct RiskAssessment {
    factors: [RiskFactor; 5],
}

impl RiskAssessment {
    /// The factors, in display order
    pub fn factors(&self) -> &[RiskFactor] {
        &self.factors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RiskFactor> {
        self.factors.iter()
    }

    /// Severity of a given indicator
    pub fn get(&self, kind: RiskFactorKind) -> RiskLevel {
        self.factors[kind.position()].severity
    }

    /// The most severe level across all indicators
    pub fn highest_severity(&self) -> RiskLevel {
        self.factors
            .iter()
            .map(|f| f.severity)
            .max()
            .unwrap_or(RiskLevel::Low)
    }

    /// Number of indicators at `level`
    pub fn count_at(&self, level: RiskLevel) -> usize {
        self.factors.iter().filter(|f| f.severity == level).count()
    }
}

impl TryFrom<Vec<RiskFactor>> for RiskAssessment {
    type Error = QuoteError;

    fn try_from(factors: Vec<RiskFactor>) -> Result<Self, Self::Error> {
        let count = factors.len();
        let factors: [RiskFactor; 5] = factors.try_into().map_err(|_| {
            QuoteError::out_of_range("riskFactors", count, "expected exactly 5 factors")
        })?;

        for (factor, kind) in factors.iter().zip(RiskFactorKind::ORDER) {
            if factor.kind != kind {
                return Err(QuoteError::invalid_enum(
                    "riskFactors",
                    format!("{:?} where {:?} belongs", factor.kind, kind),
                ));
            }
            if factor.label != kind.label() {
                return Err(QuoteError::invalid_enum("riskFactors", factor.label.clone()));
            }
        }
        Ok(Self { factors })
    }
}

impl From<RiskAssessment> for Vec<RiskFactor> {
    fn from(assessment: RiskAssessment) -> Self {
        assessment.factors.into()
    }
}

impl<'a> IntoIterator for &'a RiskAssessment {
    type Item = &'a RiskFactor;
    type IntoIter = std::slice::Iter<'a, RiskFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Driver age: under 25 is high, over 65 medium, otherwise low
pub fn driver_age_risk(driver_age: u32) -> RiskLevel {
    if driver_age < 25 {
        RiskLevel::High
    } else if driver_age > 65 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Driving experience: under five years is high
pub fn experience_risk(years: u32) -> RiskLevel {
    if years < 5 {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

pub fn location_risk(location: Location) -> RiskLevel {
    match location {
        Location::Urban => RiskLevel::High,
        Location::Suburban => RiskLevel::Medium,
        Location::Rural => RiskLevel::Low,
    }
}

/// Vehicle age: over 10 years is high, 6 to 10 medium
pub fn vehicle_age_risk(vehicle_age: i32) -> RiskLevel {
    if vehicle_age > 10 {
        RiskLevel::High
    } else if vehicle_age > 5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn claims_risk(previous_claims: u32) -> RiskLevel {
    match previous_claims {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

/// Builds the five-factor assessment for a request
pub fn assess(request: &QuoteRequest, vehicle_age: i32) -> RiskAssessment {
    RiskAssessment {
        factors: [
            RiskFactor::new(RiskFactorKind::DriverAge, driver_age_risk(request.driver_age)),
            RiskFactor::new(
                RiskFactorKind::DrivingExperience,
                experience_risk(request.driving_experience),
            ),
            RiskFactor::new(RiskFactorKind::LocationRisk, location_risk(request.location)),
            RiskFactor::new(RiskFactorKind::VehicleAge, vehicle_age_risk(vehicle_age)),
            RiskFactor::new(RiskFactorKind::ClaimsHistory, claims_risk(request.previous_claims)),
        ],
    }
}
