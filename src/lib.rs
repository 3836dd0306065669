//! Candor - lexicon-driven confidence analysis for written communication
//!
//! Candor scans free text for phrases that signal hedging,
//! over-apologizing, self-diminishment, or permission-seeking, and emits
//! a positionally-anchored, severity-scored flag per occurrence plus
//! aggregate statistics and a 0-100 confidence score.
//!
//! # Example
//!
//! ```
//! use candor::{calculate_confidence_score, Engine, LexiconStore};
//!
//! let engine = Engine::new(LexiconStore::builtin()?);
//! let result = engine.analyze("Sorry, maybe I think this might work.");
//! assert!(result.flag_count > 0);
//! assert!(calculate_confidence_score(&result) < 100);
//! # Ok::<(), candor::LexiconError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod models;
pub mod reporters;

pub use config::EngineConfig;
pub use engine::{calculate_confidence_score, category_breakdown, Clock, Engine, MonotonicClock};
pub use lexicon::{CategoryLexicon, LexiconError, LexiconStore, PatternKind};
pub use models::{AnalysisReport, AnalysisResult, CategoryStats, ConfidenceFlag};
