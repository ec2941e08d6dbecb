//! Motor Quote Domain
//!
//! This crate implements the premium estimator behind the online motor
//! quote. It is infrastructure-agnostic: a presentation layer collects the
//! form, hands over a [`QuoteRequest`], and renders the resulting
//! [`Estimate`].
//!
//! # Components
//!
//! - **Request**: typed input with closed enums for location, mileage,
//!   coverage and deductible
//! - **Rating**: table-driven coefficients, loadable from JSON
//! - **Uncertainty**: injectable source of the estimation factor
//! - **Risk**: five categorical indicators shown next to the price
//! - **Form**: coercion of raw form input into a request
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_quote::{PremiumEstimator, QuoteForm};
//!
//! let request = form.into_request()?;
//! let estimate = PremiumEstimator::new().estimate(&request)?;
//! let (quote, risk) = estimate.into_parts();
//! ```

pub mod error;
pub mod request;
pub mod rating;
pub mod uncertainty;
pub mod risk;
pub mod premium;
pub mod estimator;
pub mod form;

pub use error::QuoteError;
pub use request::{
    AnnualMileage, CoverageType, Deductible, Location, QuoteRequest, QuoteRequestDocument,
    MIN_VEHICLE_YEAR,
};
pub use rating::{RatingMetadata, RatingTable, RatingTableError};
pub use uncertainty::{FixedUncertainty, UncertaintySource, UniformUncertainty};
pub use risk::{RiskAssessment, RiskFactor, RiskFactorKind, RiskLevel};
pub use premium::{PremiumFrequency, PremiumQuote};
pub use estimator::{Estimate, PremiumEstimator};
pub use form::{FormStep, QuoteForm};
