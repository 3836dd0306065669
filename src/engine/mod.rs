//! Confidence-flag detection engine
//!
//! The engine turns one block of text into a positionally-anchored,
//! severity-scored flag list plus aggregate statistics:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Engine                            │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Match every lexicon pattern (overlapping literals)  │
//! │  2. Add intensifier bonuses from the preceding window   │
//! │  3. Sort flags by position                              │
//! │  4. Add clustering bonuses, clamp severity to 1..=5     │
//! │  5. Build snippets and suggestion ids                   │
//! │  6. Aggregate counts, averages, and timings             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Analysis is a pure function of `(LexiconStore, text)`: total over all
//! inputs, no engine-held mutable state, deterministic apart from the
//! wall-clock `processing_time_ms` field. The engine holds only immutable
//! data after construction and may be shared across threads.
//!
//! `quick_scan` and `detect_confidence` bypass the pipeline for cheap
//! boolean answers.

mod aggregate;
mod clustering;
mod intensity;
mod matcher;
mod snippet;

pub use aggregate::{calculate_confidence_score, category_breakdown};

use crate::config::EngineConfig;
use crate::lexicon::{LexiconStore, PatternKind};
use crate::models::{deterministic_suggestion_id, AnalysisResult, ConfidenceFlag};
use std::time::{Duration, Instant};
use tracing::debug;

/// Monotonic time source for `processing_time_ms`.
///
/// Injectable so tests can pin timing without branching production logic
/// on an execution environment.
pub trait Clock: Send + Sync {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Default wall-clock implementation backed by [`Instant`]
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Lexicon-driven confidence-flag detection engine
pub struct Engine {
    store: LexiconStore,
    config: EngineConfig,
    clock: Box<dyn Clock>,
}

impl Engine {
    /// Create an engine over a lexicon store with default tuning.
    pub fn new(store: LexiconStore) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
            clock: Box::<MonotonicClock>::default(),
        }
    }

    /// Override the tuning knobs (window sizes, cluster minimum).
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the time source (tests use a fixed clock).
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The lexicon store this engine evaluates
    pub fn store(&self) -> &LexiconStore {
        &self.store
    }

    /// Run the full detection pipeline over `text`.
    ///
    /// Total over its input domain: empty, whitespace-only, very long,
    /// or symbol-only input always yields a well-formed result, possibly
    /// with zero flags.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let started = self.clock.now();

        // ASCII lowercasing preserves byte offsets and char boundaries,
        // so positions in the normalized copy are positions in the
        // original.
        let lowered = text.to_ascii_lowercase();

        let mut matches = matcher::find_matches(&self.store, &lowered);
        intensity::apply_intensifier_bonus(
            &self.store,
            &lowered,
            self.config.intensifier_window_chars,
            &mut matches,
        );

        // Stable sort: equal positions keep category/pattern seed order.
        matches.sort_by_key(|m| m.position);

        clustering::apply_cluster_bonus(
            text,
            self.config.cluster_window_words,
            self.config.min_cluster_size,
            &mut matches,
        );

        let flags: Vec<ConfidenceFlag> = matches
            .into_iter()
            .map(|m| {
                let category = &self.store.categories()[m.category].name;
                ConfidenceFlag {
                    phrase: text[m.position..m.position + m.len].to_string(),
                    snippet: snippet::build_snippet(
                        text,
                        m.position,
                        m.len,
                        self.config.context_chars,
                    ),
                    category: category.clone(),
                    severity: m.severity,
                    suggestion_id: deterministic_suggestion_id(
                        category,
                        m.pattern_index,
                        m.position,
                    ),
                    position: m.position,
                }
            })
            .collect();

        let flag_count = flags.len();
        let average_severity = aggregate::average_severity(&flags);
        let has_high_severity_flags = aggregate::has_high_severity(&flags);
        let processing_time_ms = self
            .clock
            .now()
            .saturating_sub(started)
            .as_millis()
            .min(u128::from(u64::MAX)) as u64;

        debug!(
            flag_count,
            average_severity, processing_time_ms, "analysis complete"
        );

        AnalysisResult {
            flags,
            text: text.to_string(),
            processing_time_ms,
            flag_count,
            average_severity,
            has_high_severity_flags,
        }
    }

    /// Cheap boolean pre-check limited to the highest-weight patterns.
    ///
    /// Evaluates only patterns with `base_weight >= 4`, short-circuits on
    /// the first match, and skips intensifier and clustering adjustments.
    /// A `false` here is an approximation, not a guarantee that a full
    /// scan reports no severity-4 flag: bonuses can raise a lower-weight
    /// flag's final severity past the threshold.
    pub fn quick_scan(&self, text: &str) -> bool {
        let lowered = text.to_ascii_lowercase();
        for lexicon in self.store.categories() {
            for pattern in &lexicon.patterns {
                if pattern.base_weight < crate::models::HIGH_SEVERITY {
                    continue;
                }
                if Self::pattern_hits(&pattern.kind, &lowered) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether `text` contains any assured-language marker.
    ///
    /// Evaluates only the assured-markers lexicon, independently of the
    /// negative categories.
    pub fn detect_confidence(&self, text: &str) -> bool {
        let lowered = text.to_ascii_lowercase();
        self.store
            .assured()
            .patterns
            .iter()
            .any(|pattern| Self::pattern_hits(&pattern.kind, &lowered))
    }

    fn pattern_hits(kind: &PatternKind, lowered: &str) -> bool {
        match kind {
            PatternKind::Literal(phrase) => lowered.contains(phrase.as_str()),
            PatternKind::Regex(regex) => regex.is_match(lowered),
        }
    }
}
