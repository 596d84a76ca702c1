//! Numeric risk-statement extraction.
//!
//! Scans text for percentage expressions (`45%`, `3.5 %`) and ratio
//! phrasings (`1 in 100`, `5 out of 1,000`), normalizes each to a 0-100
//! probability and captures the surrounding context.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::icon_array;
use super::mcq::Mcq;
use crate::error::Result;

/// Characters of context captured on each side of a match.
const CONTEXT_WINDOW: usize = 50;

// Compile patterns once at startup. expect() is acceptable here: a failure
// means the literal pattern itself is wrong, which is unrecoverable.
static PERCENTAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:\.\d+)?)\s?%").expect("Invalid regex: percentage pattern")
});

static X_IN_Y_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+(?:in|out of)\s+([\d,]+)").expect("Invalid regex: x-in-y pattern")
});

/// Format a risk statement was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    Percentage,
    XInY,
}

/// One extracted risk statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskItem {
    #[serde(rename = "type")]
    pub kind: RiskKind,
    /// Numerator for `x_in_y` statements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u64>,
    /// Denominator for `x_in_y` statements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u64>,
    /// Normalized probability as a percentage.
    pub value: f64,
    /// Surrounding text of the match, newlines flattened.
    pub context: String,
    /// Path of the rendered icon array, when artifacts were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_array_path: Option<String>,
    /// Generated comprehension question.
    pub mcq: Mcq,
}

/// Full risk analysis for a text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub risks: Vec<RiskItem>,
}

/// Analyzes text to find and interpret numerical risk data.
pub struct RiskAnalyzer;

impl RiskAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Run the full risk analysis. When `artifacts_dir` is given, a 10x10
    /// icon array PNG is rendered per finding as `risk_<index>_icon.png`.
    pub fn run(&self, text: &str, artifacts_dir: Option<&Path>) -> Result<RiskReport> {
        let mut risks: Vec<RiskItem> = Vec::new();

        // Percentages first, then ratios, preserving match order within each.
        for caps in PERCENTAGE_PATTERN.captures_iter(text) {
            let value: f64 = caps[1].parse().unwrap_or(0.0);
            let item = self.build_item(
                RiskKind::Percentage,
                None,
                None,
                value,
                context_of(text, &caps),
                risks.len(),
                artifacts_dir,
            )?;
            risks.push(item);
        }

        for caps in X_IN_Y_PATTERN.captures_iter(text) {
            let x: u64 = caps[1].replace(',', "").parse().unwrap_or(0);
            let y: u64 = caps[2].replace(',', "").parse().unwrap_or(0);
            let value = if y != 0 {
                (x as f64 / y as f64) * 100.0
            } else {
                0.0
            };
            let item = self.build_item(
                RiskKind::XInY,
                Some(x),
                Some(y),
                value,
                context_of(text, &caps),
                risks.len(),
                artifacts_dir,
            )?;
            risks.push(item);
        }

        info!("Found {} risk statements", risks.len());
        Ok(RiskReport { risks })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_item(
        &self,
        kind: RiskKind,
        x: Option<u64>,
        y: Option<u64>,
        value: f64,
        context: String,
        index: usize,
        artifacts_dir: Option<&Path>,
    ) -> Result<RiskItem> {
        let icon_array_path = match artifacts_dir {
            Some(dir) => {
                let path = dir.join(format!("risk_{}_icon.png", index));
                icon_array::render(value, &path)?;
                Some(path.to_string_lossy().into_owned())
            }
            None => None,
        };

        Ok(RiskItem {
            kind,
            x,
            y,
            value,
            context,
            icon_array_path,
            mcq: Mcq::generate(value),
        })
    }
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Context of the full match within a capture set.
fn context_of(text: &str, caps: &Captures) -> String {
    caps.get(0)
        .map(|m| extract_context(text, m.start(), m.end()))
        .unwrap_or_default()
}

/// Extract up to `CONTEXT_WINDOW` characters on each side of a match,
/// trimmed and with newlines flattened to spaces. Byte offsets are widened
/// to the nearest UTF-8 char boundary.
fn extract_context(text: &str, match_start: usize, match_end: usize) -> String {
    let mut start = match_start.saturating_sub(CONTEXT_WINDOW);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (match_end + CONTEXT_WINDOW).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    text[start..end].trim().replace('\n', " ")
}
