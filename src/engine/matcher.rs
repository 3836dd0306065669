//! Raw pattern occurrence scan
//!
//! Finds every occurrence of every category pattern in the normalized
//! (ASCII-lowercased) input. Literal phrases use an overlapping substring
//! search that resumes one byte past each hit, so `"aa"` against `"aaa"`
//! yields offsets 0 and 1. Regex patterns use global non-overlapping
//! matching. Categories are evaluated independently: the same span can
//! produce flags in more than one category.

use crate::lexicon::{LexiconStore, PatternKind};
use memchr::memmem;

/// A provisional flag before intensifier, clustering, and snippet passes
#[derive(Debug, Clone)]
pub(crate) struct RawMatch {
    /// Index into the store's category list
    pub category: usize,
    /// Index of the pattern within its category
    pub pattern_index: usize,
    /// Byte offset of the match in the (normalized == original) text
    pub position: usize,
    /// Byte length of the matched span
    pub len: usize,
    /// Working severity, seeded with the pattern's base weight
    pub severity: u8,
}

/// Scan the lowercased input for every pattern of every category.
pub(crate) fn find_matches(store: &LexiconStore, lowered: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();

    for (category, lexicon) in store.categories().iter().enumerate() {
        for (pattern_index, pattern) in lexicon.patterns.iter().enumerate() {
            match &pattern.kind {
                PatternKind::Literal(phrase) => {
                    let finder = memmem::Finder::new(phrase.as_bytes());
                    let mut from = 0;
                    while let Some(offset) = finder.find(&lowered.as_bytes()[from..]) {
                        let position = from + offset;
                        matches.push(RawMatch {
                            category,
                            pattern_index,
                            position,
                            len: phrase.len(),
                            severity: pattern.base_weight,
                        });
                        // Resume one byte past the hit: overlapping
                        // occurrences are reported.
                        from = position + 1;
                        if from >= lowered.len() {
                            break;
                        }
                    }
                }
                PatternKind::Regex(regex) => {
                    for m in regex.find_iter(lowered) {
                        matches.push(RawMatch {
                            category,
                            pattern_index,
                            position: m.start(),
                            len: m.len(),
                            severity: pattern.base_weight,
                        });
                    }
                }
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{CategorySeed, LexiconStore, PatternSeed};

    fn store_with(patterns: &'static [(PatternSeed, u8)]) -> LexiconStore {
        let seed = CategorySeed {
            name: "test",
            patterns,
            intensifiers: &[],
        };
        let assured = CategorySeed {
            name: "assured",
            patterns: &[(PatternSeed::Lit("i will"), 3)],
            intensifiers: &[],
        };
        LexiconStore::from_seeds(&[seed], &assured).expect("valid seeds")
    }

    #[test]
    fn test_literal_finds_all_occurrences() {
        let store = store_with(&[(PatternSeed::Lit("maybe"), 2)]);
        let lowered = "maybe it works, maybe it does not";
        let matches = find_matches(&store, lowered);
        let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 16]);
    }

    #[test]
    fn test_literal_scan_is_overlapping() {
        let store = store_with(&[(PatternSeed::Lit("aa"), 1)]);
        let matches = find_matches(&store, "aaa");
        let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1], "literal scan resumes at start + 1");
    }

    #[test]
    fn test_regex_matches_are_non_overlapping() {
        let store = store_with(&[(PatternSeed::Re(r"aa"), 1)]);
        let matches = find_matches(&store, "aaaa");
        let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_match_carries_pattern_index_and_weight() {
        let store = store_with(&[
            (PatternSeed::Lit("first"), 1),
            (PatternSeed::Lit("second"), 4),
        ]);
        let matches = find_matches(&store, "second first");
        let second = matches
            .iter()
            .find(|m| m.pattern_index == 1)
            .expect("'second' should match");
        assert_eq!(second.position, 0);
        assert_eq!(second.severity, 4);
        assert_eq!(second.len, "second".len());
    }

    #[test]
    fn test_no_matches_in_clean_text() {
        let store = store_with(&[(PatternSeed::Lit("maybe"), 2)]);
        assert!(find_matches(&store, "the report is finished").is_empty());
    }

    #[test]
    fn test_literal_at_end_of_text() {
        let store = store_with(&[(PatternSeed::Lit("sorry"), 2)]);
        let matches = find_matches(&store, "i am sorry");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].position, 5);
    }
}
