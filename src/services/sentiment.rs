use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{SentimentLabel, SentimentResult};

static LEXICON: Lazy<HashMap<String, f32>> = Lazy::new(|| {
    let raw = include_str!("../../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, f32>>(raw).expect("valid sentiment lexicon")
});

/// Compound classification thresholds (fixed for compatibility)
pub const POSITIVE_THRESHOLD: f32 = 0.05;
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Maps the unbounded valence sum into [-1, 1]
const NORMALIZATION_ALPHA: f32 = 15.0;

/// How many preceding tokens a negator may sit behind
const NEGATION_WINDOW: usize = 3;

/// Lexicon/rule-based review sentiment scorer.
///
/// Pure function of the input text given the embedded lexicon: each
/// token's valence is looked up, flipped when a negator precedes it
/// within [`NEGATION_WINDOW`] tokens, scaled by an adjacent intensity
/// modifier, summed, and normalized into a compound score in [-1, 1].
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn word_valence(&self, word: &str) -> f32 {
        LEXICON.get(word).copied().unwrap_or(0.0)
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut sum = 0.0_f32;

        for i in 0..tokens.len() {
            let base = self.word_valence(&tokens[i]);
            if base == 0.0 {
                continue;
            }

            let negated =
                (1..=NEGATION_WINDOW).any(|k| i >= k && is_negator(tokens[i - k].as_str()));

            let mut valence = if negated { -base } else { base };
            if i >= 1 {
                valence *= intensity_scale(tokens[i - 1].as_str());
            }

            sum += valence;
        }

        let compound = normalize(sum);

        SentimentResult {
            compound,
            label: label_for(compound),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a compound score into the three-way label
pub fn label_for(compound: f32) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn normalize(sum: f32) -> f32 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Alphanumeric + apostrophe tokens, lower-cased. The apostrophe keeps
/// contractions like "isn't" whole so the negator set can match them.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "neither"
            | "nor"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "weren't"
            | "won't"
            | "don't"
            | "doesn't"
            | "didn't"
            | "can't"
            | "couldn't"
            | "shouldn't"
            | "wouldn't"
            | "cannot"
            | "without"
            | "lacks"
            | "lacking"
    )
}

fn intensity_scale(tok: &str) -> f32 {
    match tok {
        "very" | "really" | "extremely" | "absolutely" | "incredibly" | "totally" | "utterly"
        | "completely" | "deeply" => 1.25,
        "slightly" | "somewhat" | "marginally" | "mildly" | "fairly" | "kinda" => 0.75,
        _ => 1.0,
    }
}
