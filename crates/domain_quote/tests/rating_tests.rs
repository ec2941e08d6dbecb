//! Rating Table Tests
//!
//! - `coefficient_tests` - the standard coefficients, one table at a time
//! - `loading_tests` - tables parsed from JSON documents and files
//! - `tuning_tests` - effect of a tuned table on estimates

use domain_quote::{
    AnnualMileage, CoverageType, Deductible, Location, RatingTable, RatingTableError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{EstimatorFixtures, QuoteFixtures, QuoteRequestBuilder, RatingTableFixtures};

mod coefficient_tests {
    use super::*;

    #[test]
    fn test_location_multipliers() {
        let table = RatingTable::standard();
        assert_eq!(table.location_multiplier(Location::Urban), dec!(1.3));
        assert_eq!(table.location_multiplier(Location::Suburban), dec!(1.0));
        assert_eq!(table.location_multiplier(Location::Rural), dec!(0.8));
    }

    #[test]
    fn test_mileage_multipliers() {
        let table = RatingTable::standard();
        assert_eq!(table.mileage_multiplier(AnnualMileage::Low), dec!(0.9));
        assert_eq!(table.mileage_multiplier(AnnualMileage::Medium), dec!(1.0));
        assert_eq!(table.mileage_multiplier(AnnualMileage::High), dec!(1.2));
    }

    #[test]
    fn test_coverage_multipliers() {
        let table = RatingTable::standard();
        assert_eq!(table.coverage_multiplier(CoverageType::Comprehensive), dec!(1.5));
        assert_eq!(table.coverage_multiplier(CoverageType::ThirdParty), dec!(1.0));
        assert_eq!(table.coverage_multiplier(CoverageType::Commercial), dec!(2.0));
    }

    #[test]
    fn test_deductible_discounts() {
        let table = RatingTable::standard();
        assert_eq!(table.deductible_discount(Deductible::D250), dec!(1.0));
        assert_eq!(table.deductible_discount(Deductible::D500), dec!(0.95));
        assert_eq!(table.deductible_discount(Deductible::D1000), dec!(0.9));
        assert_eq!(table.deductible_discount(Deductible::D2000), dec!(0.85));
    }

    #[test]
    fn test_experience_and_claims_factors() {
        let table = RatingTable::standard();
        assert_eq!(table.experience_factor(4), dec!(1.4));
        assert_eq!(table.experience_factor(5), dec!(1.0));
        assert_eq!(table.claims_factor(0), dec!(1.0));
        assert_eq!(table.claims_factor(2), dec!(1.6));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(RatingTable::default(), RatingTable::standard());
    }
}

mod loading_tests {
    use super::*;

    #[test]
    fn test_standard_document_loads_back() {
        let table = RatingTable::from_json(&RatingTableFixtures::standard_json()).unwrap();
        assert_eq!(table, RatingTable::standard());
    }

    #[test]
    fn test_document_uses_wire_names_as_keys() {
        let json = RatingTableFixtures::standard_json();
        assert!(json.contains("\"third-party\""));
        assert!(json.contains("\"2000\""));
        assert!(json.contains("\"productCode\": \"MOTOR_STD\""));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&RatingTableFixtures::standard_json()).unwrap();
        value["loyaltyDiscount"] = serde_json::json!("0.1");

        let err = RatingTable::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, RatingTableError::ParseError(_)));
    }

    #[test]
    fn test_unknown_location_key_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&RatingTableFixtures::standard_json()).unwrap();
        value["location"]["coastal"] = serde_json::json!("1.1");

        let err = RatingTable::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("coastal"), "{err}");
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&RatingTableFixtures::standard_json()).unwrap();
        value["coverage"]["commercial"] = serde_json::json!("0");

        let err = RatingTable::from_json(&value.to_string()).unwrap_err();
        match err {
            RatingTableError::InvalidCoefficient { name, .. } => {
                assert_eq!(name, "coverage.commercial")
            }
            other => panic!("Expected InvalidCoefficient, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_claim_loading_rejected() {
        let mut table = RatingTable::standard();
        table.claim_loading = dec!(-0.1);
        assert!(table.check().is_err());
    }

    #[test]
    fn test_missing_file_reported() {
        let err = RatingTable::from_path("/nonexistent/motor_tariff.json").unwrap_err();
        assert!(matches!(err, RatingTableError::FileNotFound(ref p) if p.contains("motor_tariff.json")));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rating_table_{}.json", std::process::id()));
        std::fs::write(&path, RatingTableFixtures::standard_json()).unwrap();

        let table = RatingTable::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.metadata.version, "1.0");
    }
}

mod tuning_tests {
    use super::*;

    #[test]
    fn test_omitted_location_is_neutral() {
        let mut table = RatingTable::standard();
        table.location.remove(&Location::Urban);
        let estimator = EstimatorFixtures::with_table(table);

        let urban = QuoteRequestBuilder::new().with_location(Location::Urban).build();
        let suburban = QuoteFixtures::reference_request();

        assert_eq!(
            estimator.base_premium(&urban).unwrap(),
            estimator.base_premium(&suburban).unwrap()
        );
    }

    #[test]
    fn test_tuned_base_premium_scales_value_component() {
        let mut table = RatingTable::standard();
        table.base_premium = dec!(1000);
        let estimator = EstimatorFixtures::with_table(table);

        // (1000 * 1.0 + 200) * 0.95
        assert_eq!(
            estimator.base_premium(&QuoteFixtures::reference_request()).unwrap(),
            dec!(1140)
        );
    }

    #[test]
    fn test_table_currency_adopted() {
        let mut table = RatingTable::standard();
        table.metadata.currency = core_kernel::Currency::GBP;
        let estimator = EstimatorFixtures::with_table(table);

        assert_eq!(estimator.currency(), core_kernel::Currency::GBP);
    }

    #[test]
    fn test_zero_claim_loading_removes_claims_effect() {
        let mut table = RatingTable::standard();
        table.claim_loading = Decimal::ZERO;
        let estimator = EstimatorFixtures::with_table(table);

        let claims = QuoteRequestBuilder::new().with_previous_claims(4).build();
        assert_eq!(estimator.base_premium(&claims).unwrap(), dec!(665));
    }
}
