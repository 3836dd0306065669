//! Core data models for Candor
//!
//! These models are used throughout the codebase for representing
//! detected flags, analysis results, and report roll-ups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity floor and ceiling for a finished flag.
pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 5;

/// Flags at or above this severity count as high-severity.
pub const HIGH_SEVERITY: u8 = 4;

/// Generate a deterministic suggestion ID for a detected flag.
///
/// This ensures flags have stable IDs across repeated analyses of the
/// same text, enabling:
/// - Deduplicating coaching suggestions for recurring phrases
/// - Suppression by ID in caller-side storage
///
/// The ID is a 16-character hex string derived from hashing:
/// - category name (which lexicon produced it)
/// - pattern index (which pattern within that lexicon)
/// - position (byte offset of the match)
///
/// IDs are stable only while the lexicon is unchanged: editing a
/// category's pattern list renumbers pattern indices and produces
/// different IDs for the same text. Callers persisting suggestion IDs
/// must treat a lexicon edit as an ID reset.
pub fn deterministic_suggestion_id(category: &str, pattern_index: usize, position: usize) -> String {
    // MD5 keeps ids stable across Rust/compiler versions, unlike DefaultHasher.
    let input = format!("{category}\n{pattern_index}\n{position}");
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)[..16].to_string()
}

/// A single detected low-confidence phrase occurrence
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfidenceFlag {
    /// The matched substring, original casing preserved
    pub phrase: String,
    /// Contextual excerpt around the match
    pub snippet: String,
    /// Name of the category lexicon that produced this flag
    pub category: String,
    /// Severity 1..=5 after all pipeline adjustments
    pub severity: u8,
    /// Stable suggestion identifier (see [`deterministic_suggestion_id`])
    pub suggestion_id: String,
    /// Byte offset of the match in the original text
    pub position: usize,
}

impl ConfidenceFlag {
    /// Whether this flag counts as high-severity
    pub fn is_high_severity(&self) -> bool {
        self.severity >= HIGH_SEVERITY
    }
}

/// Result of a full analysis pass over one input text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected flags, ascending by position
    pub flags: Vec<ConfidenceFlag>,
    /// The original input text
    pub text: String,
    /// Wall-clock duration of the analysis
    pub processing_time_ms: u64,
    /// Number of flags detected
    pub flag_count: usize,
    /// Mean severity across flags, 0 when no flags
    pub average_severity: f64,
    /// Whether any flag has severity >= [`HIGH_SEVERITY`]
    pub has_high_severity_flags: bool,
}

/// Per-category statistics in a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryStats {
    pub count: usize,
    pub average_severity: f64,
}

/// Report roll-up for rendering: confidence score, breakdown, and flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 0-100, higher = more assured
    pub confidence_score: u8,
    pub flag_count: usize,
    pub average_severity: f64,
    pub has_high_severity_flags: bool,
    pub processing_time_ms: u64,
    /// Flags grouped by category
    pub categories: BTreeMap<String, CategoryStats>,
    pub flags: Vec<ConfidenceFlag>,
}

impl AnalysisReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            confidence_score: crate::engine::calculate_confidence_score(result),
            flag_count: result.flag_count,
            average_severity: result.average_severity,
            has_high_severity_flags: result.has_high_severity_flags,
            processing_time_ms: result.processing_time_ms,
            categories: crate::engine::category_breakdown(result),
            flags: result.flags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_id_deterministic() {
        let a = deterministic_suggestion_id("hedging", 2, 14);
        let b = deterministic_suggestion_id("hedging", 2, 14);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_suggestion_id_varies_by_inputs() {
        let base = deterministic_suggestion_id("hedging", 2, 14);
        assert_ne!(base, deterministic_suggestion_id("apologizing", 2, 14));
        assert_ne!(base, deterministic_suggestion_id("hedging", 3, 14));
        assert_ne!(base, deterministic_suggestion_id("hedging", 2, 15));
    }

    #[test]
    fn test_high_severity_threshold() {
        let mut flag = ConfidenceFlag {
            severity: 3,
            ..Default::default()
        };
        assert!(!flag.is_high_severity());
        flag.severity = 4;
        assert!(flag.is_high_severity());
    }
}
