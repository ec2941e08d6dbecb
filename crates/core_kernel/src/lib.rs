//! Core Kernel - Foundational types for the quote estimator
//!
//! This crate provides the building blocks shared by the rating domain and
//! the presentation layer:
//! - Money types with precise decimal arithmetic
//! - A calendar abstraction so "the current year" can be pinned in tests
//! - The common error type

pub mod money;
pub mod calendar;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use calendar::{Clock, SystemClock, FixedClock};
pub use error::CoreError;
