//! # Analytics
//!
//! The scoring core: a carbon-liability calculator and an ESG composite scorer.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   databases or clocks. It depends only on `core-types` and `configuration`.
//! - **Stateless Calculation:** Both calculators take an immutable input record and
//!   return a fresh value. They hold only their parameters, so one instance can be
//!   shared freely across threads.
//!
//! ## Public API
//!
//! - `CarbonScoreCalculator`: Net carbon liability with a capped purchase discount.
//! - `EsgCompositeScorer`: Rounded mean of the three ESG sub-scores.
//! - `self_check`: Evaluates the known-answer regression vectors.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod carbon;
pub mod error;
pub mod esg;
pub mod numeric;
pub mod self_check;

// Re-export the key components to create a clean, public-facing API.
pub use carbon::CarbonScoreCalculator;
pub use error::AnalyticsError;
pub use esg::{DEFAULT_PRECISION, EsgCompositeScorer};
pub use self_check::{KnownAnswer, known_answers, self_check};
