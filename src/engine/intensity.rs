//! Intensifier severity bonus
//!
//! Each raw match gains one severity point per pooled-intensifier token
//! found in a fixed window of normalized text immediately preceding it.
//! Severities are uncapped at this stage; the clustering pass clamps to
//! the final 1..=5 range.

use crate::engine::matcher::RawMatch;
use crate::lexicon::LexiconStore;

/// Back up to the nearest char boundary at or before `index`.
pub(crate) fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Apply the intensifier bonus to every match in place.
pub(crate) fn apply_intensifier_bonus(
    store: &LexiconStore,
    lowered: &str,
    window_bytes: usize,
    matches: &mut [RawMatch],
) {
    let pool = store.intensifier_pool();
    for m in matches.iter_mut() {
        let start = floor_char_boundary(lowered, m.position.saturating_sub(window_bytes));
        let window = &lowered[start..m.position];
        let bonus = window
            .split_whitespace()
            .filter(|token| pool.contains(*token))
            .count();
        m.severity = m.severity.saturating_add(bonus as u8);
    }
}
