//! Summary statistics and the 0-100 confidence score
//!
//! # Scoring Formula
//!
//! ```text
//! score = clamp(100 - severityPenalty - densityPenalty - highSeverityPenalty, 0, 100)
//!
//! severityPenalty     = (averageSeverity / 5) * 50
//! densityPenalty      = min(30, (flagCount / wordCount * 100) * 5)
//! highSeverityPenalty = 10 when any flag has severity >= 4
//! ```
//!
//! Rounded to the nearest integer. An empty flag list scores exactly 100.

use crate::models::{AnalysisResult, CategoryStats, ConfidenceFlag, HIGH_SEVERITY};
use std::collections::BTreeMap;

/// Mean severity across flags, 0 when there are none.
pub(crate) fn average_severity(flags: &[ConfidenceFlag]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }
    let total: u32 = flags.iter().map(|f| u32::from(f.severity)).sum();
    f64::from(total) / flags.len() as f64
}

/// Whether any flag reached the high-severity threshold.
pub(crate) fn has_high_severity(flags: &[ConfidenceFlag]) -> bool {
    flags.iter().any(|f| f.severity >= HIGH_SEVERITY)
}

/// Compute the 0-100 confidence score for a finished analysis.
/// Higher means more assured language.
pub fn calculate_confidence_score(result: &AnalysisResult) -> u8 {
    if result.flags.is_empty() {
        return 100;
    }

    let word_count = result.text.split_whitespace().count().max(1) as f64;
    let severity_penalty = result.average_severity / 5.0 * 50.0;
    let density_penalty = ((result.flag_count as f64 / word_count) * 100.0 * 5.0).min(30.0);
    let high_severity_penalty = if result.has_high_severity_flags {
        10.0
    } else {
        0.0
    };

    let score = 100.0 - severity_penalty - density_penalty - high_severity_penalty;
    score.clamp(0.0, 100.0).round() as u8
}

/// Group flags by category: count and mean severity per category.
pub fn category_breakdown(result: &AnalysisResult) -> BTreeMap<String, CategoryStats> {
    let mut totals: BTreeMap<String, (usize, u32)> = BTreeMap::new();
    for flag in &result.flags {
        let entry = totals.entry(flag.category.clone()).or_default();
        entry.0 += 1;
        entry.1 += u32::from(flag.severity);
    }

    totals
        .into_iter()
        .map(|(category, (count, total))| {
            (
                category,
                CategoryStats {
                    count,
                    average_severity: f64::from(total) / count as f64,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(category: &str, severity: u8) -> ConfidenceFlag {
        ConfidenceFlag {
            category: category.to_string(),
            severity,
            ..Default::default()
        }
    }

    fn result(text: &str, flags: Vec<ConfidenceFlag>) -> AnalysisResult {
        let flag_count = flags.len();
        let average_severity = average_severity(&flags);
        let has_high_severity_flags = has_high_severity(&flags);
        AnalysisResult {
            flags,
            text: text.to_string(),
            processing_time_ms: 0,
            flag_count,
            average_severity,
            has_high_severity_flags,
        }
    }

    #[test]
    fn test_empty_result_scores_exactly_100() {
        assert_eq!(calculate_confidence_score(&result("", vec![])), 100);
    }

    #[test]
    fn test_average_severity_zero_without_flags() {
        assert_eq!(average_severity(&[]), 0.0);
    }

    #[test]
    fn test_score_penalizes_severity_and_density() {
        // 1 flag of severity 2 in a 10-word text:
        // severity penalty = 2/5*50 = 20
        // density penalty  = min(30, 1/10*100*5) = 30
        // no high-severity penalty
        let text = "one two three four five six seven eight nine ten";
        let r = result(text, vec![flag("hedging", 2)]);
        assert_eq!(calculate_confidence_score(&r), 50);
    }

    #[test]
    fn test_high_severity_penalty_applies() {
        let text: String = std::iter::repeat("word ").take(100).collect();
        // severity penalty = 4/5*50 = 40, density = min(30, 1/100*500) = 5
        let r = result(text.trim_end(), vec![flag("apologizing", 4)]);
        assert_eq!(calculate_confidence_score(&r), 45);
        assert!(r.has_high_severity_flags);
    }

    #[test]
    fn test_worst_case_penalties_floor_the_score() {
        // severity penalty caps at 50, density at 30, high-severity at 10
        let flags: Vec<ConfidenceFlag> = (0..20).map(|_| flag("hedging", 5)).collect();
        let r = result("a b c", flags);
        assert_eq!(calculate_confidence_score(&r), 10);
    }

    #[test]
    fn test_breakdown_groups_by_category() {
        let r = result(
            "some text here",
            vec![
                flag("hedging", 2),
                flag("hedging", 4),
                flag("apologizing", 3),
            ],
        );
        let breakdown = category_breakdown(&r);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown["hedging"].count, 2);
        assert_eq!(breakdown["hedging"].average_severity, 3.0);
        assert_eq!(breakdown["apologizing"].count, 1);
        assert_eq!(breakdown["apologizing"].average_severity, 3.0);
    }

    #[test]
    fn test_breakdown_empty_for_clean_text() {
        let r = result("all good", vec![]);
        assert!(category_breakdown(&r).is_empty());
    }
}
