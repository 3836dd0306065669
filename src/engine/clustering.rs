//! Locality-based clustering bonus
//!
//! Flags that occur in locally dense regions read worse than the same
//! phrases scattered across a long message, so each flag sitting in a
//! cluster of 3+ flags within a bounded word window gains one severity
//! point. This is a per-flag local-density test: two flags in the same
//! dense cluster each receive the bonus independently.
//!
//! Precondition: matches are sorted ascending by position, which makes
//! word positions monotonic and lets the neighbor scan stop at the first
//! neighbor outside the window.

use crate::engine::matcher::RawMatch;
use crate::models::{MAX_SEVERITY, MIN_SEVERITY};

/// Word position of each match: the number of whitespace-delimited
/// tokens started strictly before the match's byte offset. Computed in a
/// single pass over the text.
pub(crate) fn word_positions(text: &str, matches: &[RawMatch]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(matches.len());
    let mut words = 0usize;
    let mut in_word = false;
    let mut next = 0;

    for (offset, ch) in text.char_indices() {
        while next < matches.len() && matches[next].position == offset {
            positions.push(words);
            next += 1;
        }
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            words += 1;
        }
    }
    // Matches can't start at text.len(), but tolerate anything left over.
    while next < matches.len() {
        positions.push(words);
        next += 1;
    }

    positions
}

/// Apply the clustering bonus in place, then clamp every severity to the
/// final 1..=5 range.
pub(crate) fn apply_cluster_bonus(
    text: &str,
    window_words: usize,
    min_cluster_size: usize,
    matches: &mut [RawMatch],
) {
    if matches.len() >= min_cluster_size {
        let words = word_positions(text, matches);

        for i in 0..matches.len() {
            let mut neighbors = 1; // the flag itself
            for j in (0..i).rev() {
                if words[i] - words[j] <= window_words {
                    neighbors += 1;
                } else {
                    break;
                }
            }
            for j in (i + 1)..matches.len() {
                if words[j] - words[i] <= window_words {
                    neighbors += 1;
                } else {
                    break;
                }
            }
            if neighbors >= min_cluster_size {
                matches[i].severity = matches[i].severity.saturating_add(1);
            }
        }
    }

    for m in matches.iter_mut() {
        m.severity = m.severity.clamp(MIN_SEVERITY, MAX_SEVERITY);
    }
}
