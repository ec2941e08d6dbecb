//! Risk Assessment Tests
//!
//! - `assessment_tests` - the five-factor assessment for whole requests
//! - `band_tests` - boundaries of each indicator

use domain_quote::risk::{self, assess};
use domain_quote::{FixedUncertainty, Location, RiskFactorKind, RiskLevel};
use test_utils::{
    assert_risk_levels, assert_risk_order, EstimatorFixtures, QuoteFixtures, QuoteRequestBuilder,
};

use RiskLevel::{High, Low, Medium};

mod assessment_tests {
    use super::*;

    #[test]
    fn test_reference_request_assessment() {
        let estimate = EstimatorFixtures::reference()
            .estimate_with(&QuoteFixtures::reference_request(), &mut FixedUncertainty::neutral())
            .unwrap();

        // Vehicle is exactly 10 years old, which is still the medium band
        assert_risk_levels(&estimate.risk, [Low, Low, Medium, Medium, Low]);
        assert_risk_order(&estimate.risk);
    }

    #[test]
    fn test_high_risk_request_is_high_everywhere() {
        let risk = assess(&QuoteFixtures::high_risk_request(), 13);

        assert_risk_levels(&risk, [High, High, High, High, High]);
        assert_eq!(risk.count_at(High), 5);
        assert_eq!(risk.highest_severity(), High);
    }

    #[test]
    fn test_assessment_ignores_premium_factors() {
        let cheap = QuoteRequestBuilder::new()
            .with_coverage(domain_quote::CoverageType::ThirdParty)
            .build();
        let expensive = QuoteRequestBuilder::new()
            .with_coverage(domain_quote::CoverageType::Commercial)
            .with_deductible(domain_quote::Deductible::D250)
            .build();

        assert_eq!(assess(&cheap, 10), assess(&expensive, 10));
    }

    #[test]
    fn test_get_by_kind() {
        let request = QuoteRequestBuilder::new()
            .with_location(Location::Urban)
            .with_previous_claims(1)
            .build();
        let risk = assess(&request, 2);

        assert_eq!(risk.get(RiskFactorKind::LocationRisk), High);
        assert_eq!(risk.get(RiskFactorKind::ClaimsHistory), Medium);
        assert_eq!(risk.get(RiskFactorKind::VehicleAge), Low);
    }

    #[test]
    fn test_serializes_as_list_of_five() {
        let risk = assess(&QuoteFixtures::reference_request(), 10);
        let json = serde_json::to_value(&risk).unwrap();

        let factors = json.as_array().unwrap();
        assert_eq!(factors.len(), 5);
        assert_eq!(factors[0]["label"], "Driver Age");
        assert_eq!(factors[2]["severity"], "medium");
    }

    #[test]
    fn test_for_loop_over_reference() {
        let risk = assess(&QuoteFixtures::reference_request(), 10);
        let mut labels = Vec::new();
        for factor in &risk {
            labels.push(factor.kind.label());
        }
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[4], "Claims History");
    }
}

mod band_tests {
    use super::*;

    #[test]
    fn test_driver_age_bands() {
        assert_eq!(risk::driver_age_risk(17), High);
        assert_eq!(risk::driver_age_risk(24), High);
        assert_eq!(risk::driver_age_risk(25), Low);
        assert_eq!(risk::driver_age_risk(65), Low);
        assert_eq!(risk::driver_age_risk(66), Medium);
    }

    #[test]
    fn test_experience_bands() {
        assert_eq!(risk::experience_risk(0), High);
        assert_eq!(risk::experience_risk(4), High);
        assert_eq!(risk::experience_risk(5), Low);
    }

    #[test]
    fn test_location_bands() {
        assert_eq!(risk::location_risk(Location::Urban), High);
        assert_eq!(risk::location_risk(Location::Suburban), Medium);
        assert_eq!(risk::location_risk(Location::Rural), Low);
    }

    #[test]
    fn test_brand_new_vehicle_is_low() {
        assert_eq!(risk::vehicle_age_risk(0), Low);
    }

    #[test]
    fn test_many_claims_is_high() {
        assert_eq!(risk::claims_risk(7), High);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(High.label(), "High");
        assert_eq!(Medium.as_str(), "medium");
        assert_eq!(format!("{}", Low), "Low");
    }
}
