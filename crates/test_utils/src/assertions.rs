//! Custom Test Assertions
//!
//! Provides assertion helpers for estimates that give more meaningful
//! failure messages than bare `assert!`.

use domain_quote::{Estimate, PremiumQuote, RiskAssessment, RiskFactorKind, RiskLevel};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Asserts that the annual premium lies within the uncertainty band of `base`
///
/// The band is `[round(base * 0.9), round(base * 1.1)]`.
///
/// # Panics
///
/// Panics if the premium falls outside the band
pub fn assert_premium_within_band(quote: &PremiumQuote, base: Decimal) {
    let low = round(base * dec!(0.9));
    let high = round(base * dec!(1.1));
    let annual = quote.annual_premium.amount();

    assert!(
        annual >= low && annual <= high,
        "Annual premium {} outside uncertainty band [{}, {}] for base {}",
        annual,
        low,
        high,
        base
    );
}

/// Asserts the monthly premium is the rounded twelfth of the annual premium
pub fn assert_monthly_consistent(quote: &PremiumQuote) {
    let expected = round(quote.annual_premium.amount() / dec!(12));
    assert_eq!(
        quote.monthly_premium.amount(),
        expected,
        "Monthly premium {} is not round({} / 12)",
        quote.monthly_premium.amount(),
        quote.annual_premium.amount()
    );
}

/// Asserts the five risk levels, given in display order
pub fn assert_risk_levels(risk: &RiskAssessment, expected: [RiskLevel; 5]) {
    let actual: Vec<RiskLevel> = risk.iter().map(|f| f.severity).collect();
    assert_eq!(actual, expected.to_vec(), "Risk levels differ");
}

/// Asserts the assessment has five factors in display order
pub fn assert_risk_order(risk: &RiskAssessment) {
    let kinds: Vec<RiskFactorKind> = risk.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, RiskFactorKind::ORDER.to_vec(), "Risk factors out of order");

    let labels: Vec<&str> = risk.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Driver Age",
            "Driving Experience",
            "Location Risk",
            "Vehicle Age",
            "Claims History"
        ]
    );
}

/// Asserts every invariant that holds for any estimate
pub fn assert_estimate_well_formed(estimate: &Estimate) {
    assert!(
        estimate.quote.annual_premium.amount() >= Decimal::ZERO,
        "Negative annual premium {}",
        estimate.quote.annual_premium
    );
    assert_eq!(estimate.quote.annual_premium.amount().fract(), Decimal::ZERO);
    assert_monthly_consistent(&estimate.quote);
    assert_premium_within_band(&estimate.quote, estimate.base_premium);
    assert_risk_order(&estimate.risk);
}

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
