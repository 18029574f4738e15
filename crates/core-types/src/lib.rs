//! # Core Types
//!
//! The shared vocabulary of the workspace: the input records consumed by the
//! calculators in `analytics`, the bounded `Fraction` newtype, and the
//! holder/holding data model that callers use to decide which ESG score is current.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate performs no I/O and depends on no other workspace crate.
//! - **Validated at construction:** Values that must stay within [0, 1] are only
//!   representable through `Fraction`, so downstream calculators never re-check them.

pub mod enums;
pub mod error;
pub mod fraction;
pub mod holdings;
pub mod inputs;

// Re-export the core types to provide a clean public API.
pub use enums::{AssetClass, HolderKind, InstrumentType};
pub use error::CoreError;
pub use fraction::Fraction;
pub use holdings::{EsgScoreRecord, Holder, Holding, Instrument};
pub use inputs::{CarbonInputs, EsgInputs};
