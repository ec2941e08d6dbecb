//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! quote estimator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built requests, forms and rating tables
//! - `builders`: Builder for quote requests with sensible defaults
//! - `assertions`: Assertion helpers for premiums and risk assessments
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
