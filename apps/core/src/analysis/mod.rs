//! # EquiCheck Module
//!
//! Readability and cultural-equity analysis for health communication texts.
//!
//! ## Components
//! - `readability`: SMOG, Gunning-Fog and Flesch-Kincaid grade formulas
//! - `keywords`: Cultural Tailoring Score (CTS) weighted keyword matching
//! - `analyzer`: Combined report orchestrator

pub mod analyzer;
pub mod keywords;
pub mod readability;

pub use analyzer::{EquiCheck, EquiCheckReport};
pub use keywords::{CtsAnalysis, CtsLexicon, KeywordMatch};
pub use readability::{Readability, ReadabilityScores};
