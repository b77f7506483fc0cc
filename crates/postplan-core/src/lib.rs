//! # Postplan Core
//!
//! The domain layer of the content planner.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post and platform models, the filter engine, calendar range calculation,
//! day bucketing, and the repository port the store adapters implement.

pub mod calendar;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
