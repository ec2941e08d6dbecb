//! CLI Layer Tests
//!
//! # Test Organization
//!
//! - `input_tests` - parsing typed requests and raw form documents
//! - `estimator_config_tests` - building estimators from configuration
//! - `error_response_tests` - machine-readable error bodies
//! - `property_tests` - rendering invariants over generated requests

use std::path::PathBuf;

use core_kernel::Currency;
use domain_quote::{RatingTable, RiskLevel};
use interface_cli::config::CliConfig;
use interface_cli::error::CliError;
use interface_cli::view::EstimateView;
use interface_cli::{build_estimator, parse_request, render, run_estimate, UncertaintyMode};
use rust_decimal_macros::dec;
use test_utils::{assert_estimate_well_formed, QuoteFixtures, REFERENCE_YEAR};

fn reference_config() -> CliConfig {
    CliConfig {
        current_year: Some(REFERENCE_YEAR),
        ..CliConfig::default()
    }
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("motor-quote-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// INPUT TESTS
// ============================================================================

mod input_tests {
    use super::*;

    #[test]
    fn test_parse_typed_request() {
        let json = serde_json::to_string(&QuoteFixtures::reference_request()).unwrap();
        let request = parse_request(&json, false).unwrap();
        assert_eq!(request, QuoteFixtures::reference_request());
    }

    #[test]
    fn test_parse_form_request() {
        let json = serde_json::to_string(&QuoteFixtures::reference_form()).unwrap();
        let request = parse_request(&json, true).unwrap();
        assert_eq!(request, QuoteFixtures::reference_request());
    }

    #[test]
    fn test_form_with_missing_field() {
        let json = r#"{"vehicleMake": "Toyota"}"#;
        let err = parse_request(json, true).unwrap_err();
        let response = err.to_response();

        assert_eq!(response.error, "missing_field");
        assert_eq!(response.field.as_deref(), Some("vehicleModel"));
    }

    #[test]
    fn test_malformed_json_is_invalid_input() {
        let err = parse_request("{not json", false).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
        assert_eq!(err.to_response().error, "invalid_input");
    }
}

// ============================================================================
// ESTIMATOR CONFIG TESTS
// ============================================================================

mod estimator_config_tests {
    use super::*;

    #[test]
    fn test_neutral_mode_yields_base_premium() {
        let estimator = build_estimator(&reference_config(), None).unwrap();
        let estimate = run_estimate(
            &estimator,
            &QuoteFixtures::reference_request(),
            UncertaintyMode::Neutral,
        )
        .unwrap();

        assert_eq!(estimate.quote.annual_whole().unwrap(), 665);
        assert_eq!(estimate.quote.monthly_whole().unwrap(), 55);
    }

    #[test]
    fn test_seeded_mode_is_reproducible() {
        let estimator = build_estimator(&reference_config(), None).unwrap();
        let request = QuoteFixtures::high_risk_request();

        let first = run_estimate(&estimator, &request, UncertaintyMode::Seeded(99)).unwrap();
        let second = run_estimate(&estimator, &request, UncertaintyMode::Seeded(99)).unwrap();

        assert_eq!(first.quote, second.quote);
        assert_estimate_well_formed(&first);
    }

    #[test]
    fn test_random_mode_is_well_formed() {
        let estimator = build_estimator(&reference_config(), None).unwrap();
        let estimate = run_estimate(
            &estimator,
            &QuoteFixtures::reference_request(),
            UncertaintyMode::Random,
        )
        .unwrap();

        assert_estimate_well_formed(&estimate);
        assert_eq!(estimate.risk.highest_severity(), RiskLevel::Medium);
    }

    #[test]
    fn test_year_argument_overrides_config() {
        let estimator = build_estimator(&reference_config(), Some(2030)).unwrap();
        assert_eq!(estimator.current_year(), 2030);
    }

    #[test]
    fn test_configured_currency() {
        let config = CliConfig {
            currency: "eur".to_string(),
            ..reference_config()
        };
        let estimator = build_estimator(&config, None).unwrap();
        assert_eq!(estimator.currency(), Currency::EUR);
    }

    #[test]
    fn test_unknown_currency_is_configuration_error() {
        let config = CliConfig {
            currency: "XYZ".to_string(),
            ..reference_config()
        };
        let err = build_estimator(&config, None).unwrap_err();
        assert_eq!(err.to_response().error, "configuration_error");
    }

    #[test]
    fn test_rating_table_file_is_used() {
        let mut table = RatingTable::standard();
        table.base_premium = dec!(1000);
        let path = write_temp("table.json", &serde_json::to_string(&table).unwrap());

        let config = CliConfig {
            rating_table_path: Some(path.clone()),
            ..reference_config()
        };
        let estimator = build_estimator(&config, None).unwrap();
        std::fs::remove_file(&path).ok();

        // (1000 + 200) * 0.95
        let base = estimator
            .base_premium(&QuoteFixtures::reference_request())
            .unwrap();
        assert_eq!(base, dec!(1140));
    }

    #[test]
    fn test_missing_rating_table_file() {
        let config = CliConfig {
            rating_table_path: Some(PathBuf::from("/nonexistent/motor-quote/table.json")),
            ..reference_config()
        };
        let err = build_estimator(&config, None).unwrap_err();
        assert_eq!(err.to_response().error, "rating_table_error");
    }
}

// ============================================================================
// ERROR RESPONSE TESTS
// ============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_unknown_location_names_the_field() {
        let mut form = QuoteFixtures::reference_form();
        form.location = Some("downtown".to_string());
        let json = serde_json::to_string(&form).unwrap();

        let response = parse_request(&json, true).unwrap_err().to_response();
        assert_eq!(response.error, "invalid_enum_value");
        assert_eq!(response.field.as_deref(), Some("location"));
        assert!(response.message.contains("downtown"));
    }

    #[test]
    fn test_typed_request_with_unknown_location_names_the_field() {
        let mut json = serde_json::to_value(QuoteFixtures::reference_request()).unwrap();
        json["location"] = serde_json::Value::from("unknown");

        let err = parse_request(&json.to_string(), false).unwrap_err();
        let response = err.to_response();
        assert_eq!(response.error, "invalid_enum_value");
        assert_eq!(response.field.as_deref(), Some("location"));
    }

    #[test]
    fn test_typed_request_with_negative_driver_age() {
        let mut json = serde_json::to_value(QuoteFixtures::reference_request()).unwrap();
        json["driverAge"] = serde_json::Value::from(-3);

        let response = parse_request(&json.to_string(), false).unwrap_err().to_response();
        assert_eq!(response.error, "out_of_range");
        assert_eq!(response.field.as_deref(), Some("driverAge"));
    }

    #[test]
    fn test_malformed_environment_is_configuration_error() {
        let vars = [("QUOTE_CURRENCY", "GBP"), ("QUOTE_SEED", "abc")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        let environment = config::Environment::with_prefix("QUOTE").source(Some(vars));

        let err = CliError::from(CliConfig::from_environment(environment).unwrap_err());
        assert_eq!(err.to_response().error, "configuration_error");
    }

    #[test]
    fn test_out_of_range_vehicle_year() {
        let estimator = build_estimator(&reference_config(), None).unwrap();
        let mut request = QuoteFixtures::reference_request();
        request.vehicle_year = REFERENCE_YEAR + 5;

        let err = run_estimate(&estimator, &request, UncertaintyMode::Neutral).unwrap_err();
        let response = err.to_response();
        assert_eq!(response.error, "out_of_range");
        assert_eq!(response.field.as_deref(), Some("vehicleYear"));
    }

    #[test]
    fn test_response_omits_empty_field() {
        let err = parse_request("[]", false).unwrap_err();
        let json = render(&err.to_response(), false).unwrap();
        assert!(!json.contains("\"field\""));
    }

    #[test]
    fn test_rendered_view_round_trips_as_json() {
        let estimator = build_estimator(&reference_config(), None).unwrap();
        let estimate = run_estimate(
            &estimator,
            &QuoteFixtures::reference_request(),
            UncertaintyMode::Neutral,
        )
        .unwrap();

        let json = render(&EstimateView::try_from(&estimate).unwrap(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"]["annual"], "$665");
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::quote_request_strategy;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn rendered_view_agrees_with_estimate(request in quote_request_strategy(), seed in any::<u64>()) {
            let estimator = build_estimator(&reference_config(), None).unwrap();
            let estimate = run_estimate(&estimator, &request, UncertaintyMode::Seeded(seed)).unwrap();
            let view = EstimateView::try_from(&estimate).unwrap();

            prop_assert_eq!(view.risk_factors.len(), 5);
            prop_assert_eq!(view.display.annual, format!("${}", view.annual_premium));
            prop_assert_eq!(view.display.monthly, format!("${}", view.monthly_premium));
            prop_assert!(view.annual_premium >= 0);
        }
    }
}
