//! Cultural Tailoring Score (CTS) keyword analysis.
//!
//! Loads a weighted keyword lexicon from CSV (`keyword,category,weight`)
//! and counts whole-word, case-insensitive occurrences in a text,
//! aggregated per category as raw and weighted counts.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AppError, Result};

/// One lexicon entry with its pre-compiled word-boundary matcher.
#[derive(Debug)]
struct LexiconEntry {
    keyword: String,
    category: String,
    weight: f64,
    matcher: Regex,
}

/// CSV row shape expected in the keyword file.
#[derive(Debug, Deserialize)]
struct KeywordRow {
    keyword: String,
    category: String,
    weight: Option<f64>,
}

/// A keyword that was found in the analyzed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub category: String,
    pub count: usize,
    pub weight: f64,
}

/// Raw and weighted match counts for one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub count: usize,
    pub weighted_count: f64,
}

/// Full CTS keyword analysis for a text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CtsAnalysis {
    pub total_matches: usize,
    pub matches_by_category: HashMap<String, CategoryStats>,
    pub matched_keywords: Vec<KeywordMatch>,
}

/// The CTS keyword lexicon, loaded once at startup.
#[derive(Debug, Default)]
pub struct CtsLexicon {
    entries: Vec<LexiconEntry>,
}

impl CtsLexicon {
    /// Load a lexicon from a CSV file with a `keyword,category,weight` header.
    ///
    /// Keywords are case-folded and trimmed; rows with an empty keyword or
    /// category are skipped; a missing weight defaults to 1.0.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            AppError::Config(format!("Could not read keyword file {}: {}", path.display(), e))
        })?;

        let mut entries = Vec::new();
        for row in reader.deserialize::<KeywordRow>() {
            let row = row?;
            let keyword = row.keyword.trim().to_lowercase();
            let category = row.category.trim().to_string();
            if keyword.is_empty() || category.is_empty() {
                continue;
            }

            let pattern = format!(r"(?i)\b{}\b", regex::escape(&keyword));
            let matcher = Regex::new(&pattern)
                .map_err(|e| AppError::Config(format!("Invalid keyword pattern: {}", e)))?;

            entries.push(LexiconEntry {
                keyword,
                category,
                weight: row.weight.unwrap_or(1.0),
                matcher,
            });
        }

        info!("Loaded {} CTS keywords from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Load a lexicon, falling back to an empty one with a warning when the
    /// file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!("CTS keywords unavailable ({}), keyword analysis will be empty", e);
                Self::default()
            }
        }
    }

    /// Number of keywords in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count whole-word, case-insensitive keyword matches in `text`.
    pub fn analyze(&self, text: &str) -> CtsAnalysis {
        if self.entries.is_empty() {
            return CtsAnalysis::default();
        }

        let mut matched_keywords = Vec::new();
        for entry in &self.entries {
            let count = entry.matcher.find_iter(text).count();
            if count > 0 {
                matched_keywords.push(KeywordMatch {
                    keyword: entry.keyword.clone(),
                    category: entry.category.clone(),
                    count,
                    weight: entry.weight,
                });
            }
        }

        let mut matches_by_category: HashMap<String, CategoryStats> = HashMap::new();
        for m in &matched_keywords {
            let stats = matches_by_category.entry(m.category.clone()).or_default();
            stats.count += m.count;
            stats.weighted_count += m.count as f64 * m.weight;
        }

        CtsAnalysis {
            total_matches: matched_keywords.iter().map(|m| m.count).sum(),
            matches_by_category,
            matched_keywords,
        }
    }
}
