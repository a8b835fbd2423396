//! Username pattern expansion.
//!
//! Each pattern family mirrors a real-world account-naming convention seen
//! in organizations: bare first/last names, concatenated pairs, initials,
//! and dotted/underscored formats. The families live in a fixed rule table
//! rather than a generic permutation engine, which keeps the candidate space
//! bounded and predictable for downstream brute-force tooling.

use crate::tokenizer::TokenSequence;
use std::collections::HashSet;

/// One pattern family: a minimum token count plus a pure expansion function
/// that appends candidates for a token sequence meeting that minimum.
pub struct PatternRule {
    /// Human-readable family name, used for diagnostics
    pub name: &'static str,
    /// Minimum number of tokens the family needs to fire
    pub min_tokens: usize,
    expand: fn(&[String], &mut Vec<String>),
}

/// The fixed rule table. New username formats are added here without
/// touching the generation control flow.
pub const RULES: &[PatternRule] = &[
    PatternRule {
        name: "single",
        min_tokens: 1,
        expand: expand_singles,
    },
    PatternRule {
        name: "ordered-pair",
        min_tokens: 2,
        expand: expand_ordered_pairs,
    },
    PatternRule {
        name: "initial-combos",
        min_tokens: 2,
        expand: expand_initial_combos,
    },
    PatternRule {
        name: "three-part-full",
        min_tokens: 3,
        expand: expand_three_part_full,
    },
    PatternRule {
        name: "three-part-initials",
        min_tokens: 3,
        expand: expand_three_part_initials,
    },
    PatternRule {
        name: "three-part-middle-initials",
        min_tokens: 3,
        expand: expand_three_part_middle_initials,
    },
    PatternRule {
        name: "separator-formats",
        min_tokens: 2,
        expand: expand_separator_formats,
    },
];

/// First character of a token. Tokens are guaranteed non-empty ASCII, so a
/// one-byte slice is safe.
fn initial(token: &str) -> &str {
    &token[..1]
}

/// Interior tokens between first and last; empty for fewer than 3 tokens
fn middles(tokens: &[String]) -> &[String] {
    &tokens[1..tokens.len() - 1]
}

fn expand_singles(tokens: &[String], out: &mut Vec<String>) {
    for token in tokens {
        out.push(token.clone());
    }
}

fn expand_ordered_pairs(tokens: &[String], out: &mut Vec<String>) {
    for (i, a) in tokens.iter().enumerate() {
        for (j, b) in tokens.iter().enumerate() {
            if i != j {
                out.push(format!("{a}{b}"));
            }
        }
    }
}

fn expand_initial_combos(tokens: &[String], out: &mut Vec<String>) {
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    out.push(format!("{}{last}", initial(first)));
    out.push(format!("{first}{}", initial(last)));
    out.push(format!("{}{first}", initial(last)));
}

// For names with more than three tokens, the interior tokens are all
// absorbed into the middle slot rather than expanded combinatorially.
fn expand_three_part_full(tokens: &[String], out: &mut Vec<String>) {
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    let middle: String = middles(tokens).concat();
    out.push(format!("{first}{middle}{last}"));
}

fn expand_three_part_initials(tokens: &[String], out: &mut Vec<String>) {
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    let middle_initials: String = middles(tokens).iter().map(|m| initial(m)).collect();
    out.push(format!("{}{middle_initials}{last}", initial(first)));
}

fn expand_three_part_middle_initials(tokens: &[String], out: &mut Vec<String>) {
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    let middle_initials: String = middles(tokens).iter().map(|m| initial(m)).collect();
    out.push(format!("{first}{middle_initials}{last}"));
}

fn expand_separator_formats(tokens: &[String], out: &mut Vec<String>) {
    let first = &tokens[0];
    let last = &tokens[tokens.len() - 1];
    out.push(format!("{first}.{last}"));
    out.push(format!("{first}_{last}"));
    out.push(format!("{}.{last}", initial(first)));
}

/// Expands a token sequence into its deduplicated candidate usernames.
///
/// Every rule family whose minimum token count is met fires; a candidate
/// produced by two families counts once. The returned order is stable
/// (first-production order over the rule table). An empty token sequence
/// yields an empty result, never an error.
pub fn generate(tokens: &TokenSequence) -> Vec<String> {
    let mut raw = Vec::new();
    for rule in RULES {
        if tokens.len() >= rule.min_tokens {
            (rule.expand)(tokens, &mut raw);
        }
    }

    let mut seen = HashSet::with_capacity(raw.len());
    let mut candidates = Vec::with_capacity(raw.len());
    for candidate in raw {
        if seen.insert(candidate.clone()) {
            candidates.push(candidate);
        }
    }
    candidates
}
