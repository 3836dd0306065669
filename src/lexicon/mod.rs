//! Category lexicons and the immutable lexicon store
//!
//! A lexicon is a named collection of detection patterns with base
//! severities plus the intensifier vocabulary for one category. The
//! [`LexiconStore`] holds every category, a pooled intensifier set for
//! cross-category lookups, and a separate assured-markers lexicon used
//! only for positive-confidence detection.
//!
//! The store is built once from seed definitions and never mutated, so
//! it is safe to share across threads without locking. Malformed seed
//! data (weights outside 1..=5, empty pattern lists, invalid regexes)
//! is rejected at construction time, before any analysis request runs.

mod seeds;

pub use seeds::{CategorySeed, PatternSeed};

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised while constructing a [`LexiconStore`]
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("category '{category}' pattern {index} has base weight {weight}, expected 1..=5")]
    WeightOutOfRange {
        category: String,
        index: usize,
        weight: u8,
    },

    #[error("category '{category}' has an empty pattern list")]
    EmptyPatterns { category: String },

    #[error("category '{category}' pattern {index} is not a valid regex: {source}")]
    InvalidRegex {
        category: String,
        index: usize,
        #[source]
        source: regex::Error,
    },
}

/// A single detection pattern: either a literal phrase or a compiled regex
#[derive(Debug, Clone)]
pub enum PatternKind {
    /// Case-insensitive literal phrase, stored lowercase.
    /// Scanned with an overlapping substring search.
    Literal(String),
    /// Compiled case-insensitive regex, scanned with non-overlapping
    /// global matching.
    Regex(Regex),
}

/// A pattern with its base severity weight
#[derive(Debug, Clone)]
pub struct LexiconPattern {
    pub kind: PatternKind,
    /// Base severity 1..=5 assigned to every raw match
    pub base_weight: u8,
}

/// One category's patterns and intensifier vocabulary
#[derive(Debug, Clone)]
pub struct CategoryLexicon {
    pub name: String,
    /// Ordered: a pattern's index is part of its suggestion id
    pub patterns: Vec<LexiconPattern>,
    pub intensifiers: FxHashSet<String>,
}

impl CategoryLexicon {
    fn compile(seed: &CategorySeed) -> Result<Self, LexiconError> {
        if seed.patterns.is_empty() {
            return Err(LexiconError::EmptyPatterns {
                category: seed.name.to_string(),
            });
        }

        let mut patterns = Vec::with_capacity(seed.patterns.len());
        for (index, (pattern, weight)) in seed.patterns.iter().enumerate() {
            if !(1..=5).contains(weight) {
                return Err(LexiconError::WeightOutOfRange {
                    category: seed.name.to_string(),
                    index,
                    weight: *weight,
                });
            }

            let kind = match pattern {
                PatternSeed::Lit(phrase) => PatternKind::Literal(phrase.to_lowercase()),
                PatternSeed::Re(source) => PatternKind::Regex(
                    RegexBuilder::new(source)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| LexiconError::InvalidRegex {
                            category: seed.name.to_string(),
                            index,
                            source,
                        })?,
                ),
            };

            patterns.push(LexiconPattern {
                kind,
                base_weight: *weight,
            });
        }

        Ok(Self {
            name: seed.name.to_string(),
            patterns,
            intensifiers: seed
                .intensifiers
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        })
    }
}

/// Immutable registry of every category lexicon plus the assured markers
#[derive(Debug, Clone)]
pub struct LexiconStore {
    categories: Vec<CategoryLexicon>,
    /// Union of every category's intensifiers, built once at construction
    intensifier_pool: FxHashSet<String>,
    /// Positive-confidence markers, evaluated only by the confidence detector
    assured: CategoryLexicon,
}

impl LexiconStore {
    /// Build a store from seed definitions, failing fast on malformed data.
    pub fn from_seeds(
        categories: &[CategorySeed],
        assured: &CategorySeed,
    ) -> Result<Self, LexiconError> {
        let categories: Vec<CategoryLexicon> = categories
            .iter()
            .map(CategoryLexicon::compile)
            .collect::<Result<_, _>>()?;

        let intensifier_pool = categories
            .iter()
            .flat_map(|c| c.intensifiers.iter().cloned())
            .collect();

        let assured = CategoryLexicon::compile(assured)?;

        debug!(
            categories = categories.len(),
            assured_patterns = assured.patterns.len(),
            "compiled lexicon store"
        );

        Ok(Self {
            categories,
            intensifier_pool,
            assured,
        })
    }

    /// Build the store from the built-in seed data.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_seeds(seeds::CATEGORIES, &seeds::ASSURED_MARKERS)
    }

    /// Ordered list of all category lexicons
    pub fn categories(&self) -> &[CategoryLexicon] {
        &self.categories
    }

    /// Pooled intensifier words across every category
    pub fn intensifier_pool(&self) -> &FxHashSet<String> {
        &self.intensifier_pool
    }

    /// The assured-markers lexicon
    pub fn assured(&self) -> &CategoryLexicon {
        &self.assured
    }
}
