//! # Riskify Module
//!
//! Numeric risk-literacy analysis: finds risk statements in text, renders
//! icon-array pictographs and generates comprehension questions.
//!
//! ## Components
//! - `extractor`: percentage and "X in Y" pattern matching
//! - `icon_array`: 10x10 pictograph PNG rendering
//! - `mcq`: multiple-choice question generation
//! - `numeracy`: the Berlin Numeracy Test bank and scoring

pub mod extractor;
pub mod icon_array;
pub mod mcq;
pub mod numeracy;

pub use extractor::{RiskAnalyzer, RiskItem, RiskKind, RiskReport};
pub use mcq::{Choice, Mcq};
pub use numeracy::{NumeracyScore, PublicQuestion, UserResponse};
