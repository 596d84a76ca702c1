//! EquiCheck - readability and cultural tailoring analysis.
//!
//! Combines the readability formulas with the CTS keyword lexicon into a
//! single report. Empty input short-circuits to the null/empty shape so
//! downstream consumers always see the same JSON structure.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::keywords::{CtsAnalysis, CtsLexicon};
use super::readability::{Readability, ReadabilityScores};
use crate::models::{DocumentMetadata, ScrapedDocument};

/// Combined EquiCheck report for a text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquiCheckReport {
    pub readability: ReadabilityScores,
    pub cts_keywords: CtsAnalysis,
    /// Source metadata, present when the text came from the scraper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

/// The EquiCheck analysis engine.
pub struct EquiCheck {
    lexicon: CtsLexicon,
}

impl EquiCheck {
    /// Create an analyzer around a loaded keyword lexicon.
    pub fn new(lexicon: CtsLexicon) -> Self {
        info!("Initialized EquiCheck with {} CTS keywords", lexicon.len());
        Self { lexicon }
    }

    /// Analyze raw text for readability and CTS keywords.
    pub fn analyze(&self, text: &str) -> EquiCheckReport {
        if text.trim().is_empty() {
            warn!("Empty text provided for analysis");
            return EquiCheckReport {
                readability: ReadabilityScores::empty(),
                cts_keywords: CtsAnalysis::default(),
                metadata: None,
            };
        }

        let readability = Readability::analyze(text);
        let cts_keywords = self.lexicon.analyze(text);
        info!(
            "EquiCheck complete: avg grade {:?}, {} keyword matches",
            readability.average_grade_level, cts_keywords.total_matches
        );

        EquiCheckReport {
            readability,
            cts_keywords,
            metadata: None,
        }
    }

    /// Analyze a scraped document, carrying its metadata into the report.
    pub fn analyze_document(&self, doc: &ScrapedDocument) -> EquiCheckReport {
        let mut report = self.analyze(&doc.text);
        report.metadata = Some(doc.metadata.clone());
        report
    }
}
