//! Built-in lexicon seed data
//!
//! Each category lists `(pattern, base_weight)` pairs plus the intensifier
//! vocabulary that amplifies nearby matches. Pattern order matters: a
//! pattern's index within its category feeds the suggestion id.
//!
//! Assured markers are kept disjoint from the negative categories: no
//! phrase below satisfies both an assured marker and a negative pattern.

/// A seed pattern: literal phrase or regex source
#[derive(Debug, Clone, Copy)]
pub enum PatternSeed {
    Lit(&'static str),
    Re(&'static str),
}

/// Seed definition for one category lexicon
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub patterns: &'static [(PatternSeed, u8)],
    pub intensifiers: &'static [&'static str],
}

use PatternSeed::{Lit, Re};

/// Negative (low-confidence) categories, evaluated by the full pipeline
pub static CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "hedging",
        patterns: &[
            (Lit("maybe"), 2),
            (Lit("i think"), 2),
            (Lit("i guess"), 2),
            (Lit("i suppose"), 2),
            (Lit("sort of"), 2),
            (Lit("kind of"), 2),
            (Lit("i'm not sure"), 3),
            (Lit("not sure if"), 3),
            (Lit("perhaps"), 2),
            (Lit("possibly"), 2),
            (Lit("i feel like"), 2),
            (Lit("just wanted to"), 3),
            (Re(r"\bmight\b"), 2),
            (Re(r"\bprobably\b"), 2),
            (Re(r"\bhopefully\b"), 2),
        ],
        intensifiers: &["really", "very", "quite", "so", "pretty"],
    },
    CategorySeed {
        name: "apologizing",
        patterns: &[
            (Lit("sorry"), 2),
            (Lit("i apologize"), 3),
            (Lit("my apologies"), 3),
            (Lit("sorry to bother you"), 4),
            (Lit("sorry for the interruption"), 3),
            (Lit("forgive me"), 3),
            (Re(r"\bpardon\s+(?:me|the)\b"), 2),
        ],
        intensifiers: &["so", "very", "really", "terribly", "deeply", "extremely"],
    },
    CategorySeed {
        name: "self_diminishment",
        patterns: &[
            (Lit("i'm no expert"), 4),
            (Lit("i'm not an expert"), 3),
            (Lit("i could be wrong"), 3),
            (Lit("i'm probably wrong"), 4),
            (Lit("this might be a stupid question"), 5),
            (Lit("dumb question"), 4),
            (Lit("i'm bad at"), 3),
            (Lit("not my strong suit"), 3),
            (Re(r"\bi'?m\s+(?:only|just)\s+a\b"), 3),
            (Re(r"\bstupid\s+(?:question|idea)\b"), 4),
        ],
        intensifiers: &["really", "very", "honestly", "completely", "totally"],
    },
    CategorySeed {
        name: "permission_seeking",
        patterns: &[
            (Lit("is it ok if"), 3),
            (Lit("is it okay if"), 3),
            (Lit("would it be ok"), 3),
            (Lit("if you don't mind"), 3),
            (Lit("would you mind"), 2),
            (Lit("do you mind if"), 3),
            (Lit("i was wondering if"), 3),
            (Lit("can i ask"), 2),
            (Lit("sorry to ask"), 4),
            (Re(r"\bmay\s+i\b"), 2),
            (Re(r"\bpermission\s+to\b"), 3),
        ],
        intensifiers: &["just", "really", "possibly"],
    },
];

/// Positive assured-language markers, evaluated only by the confidence
/// detector. Disjoint from the negative categories above.
pub static ASSURED_MARKERS: CategorySeed = CategorySeed {
    name: "assured",
    patterns: &[
        (Lit("i will"), 3),
        (Lit("i'm confident"), 4),
        (Lit("i am confident"), 4),
        (Lit("i'm certain"), 4),
        (Lit("definitely"), 3),
        (Lit("absolutely"), 3),
        (Lit("certainly"), 3),
        (Lit("i know"), 3),
        (Lit("i can handle"), 3),
        (Lit("count on me"), 4),
        (Lit("without a doubt"), 4),
        (Lit("i recommend"), 3),
        (Re(r"\bwill\s+deliver\b"), 3),
    ],
    intensifiers: &[],
};
