//! Rendering of estimates
//!
//! The estimator returns typed values; this module shapes them the way the
//! quote page consumes them, with whole-unit figures and ready-made display
//! strings.

use core_kernel::MoneyError;
use domain_quote::{Estimate, RiskFactor};
use serde::Serialize;

/// Estimate as rendered for a front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateView {
    pub annual_premium: i64,
    pub monthly_premium: i64,
    pub currency: String,
    pub display: DisplayAmounts,
    pub risk_factors: Vec<RiskFactorView>,
}

/// Formatted premiums, e.g. `$665`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayAmounts {
    pub annual: String,
    pub monthly: String,
}

/// One risk indicator with its label, display value and styling level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFactorView {
    pub label: String,
    pub value: String,
    pub level: String,
}

impl From<&RiskFactor> for RiskFactorView {
    fn from(factor: &RiskFactor) -> Self {
        Self {
            label: factor.label.clone(),
            value: factor.severity.label().to_string(),
            level: factor.severity.as_str().to_string(),
        }
    }
}

impl TryFrom<&Estimate> for EstimateView {
    type Error = MoneyError;

    fn try_from(estimate: &Estimate) -> Result<Self, Self::Error> {
        let quote = &estimate.quote;

        Ok(Self {
            annual_premium: quote.annual_whole()?,
            monthly_premium: quote.monthly_whole()?,
            currency: quote.currency().code().to_string(),
            display: DisplayAmounts {
                annual: quote.annual_premium.display_whole(),
                monthly: quote.monthly_premium.display_whole(),
            },
            risk_factors: estimate.risk.iter().map(RiskFactorView::from).collect(),
        })
    }
}
