//! Candidate aggregation across names.
//!
//! The aggregator owns the run's single [`UsernameSet`]: every name is
//! tokenized and expanded, the per-name candidate count is recorded in input
//! order, and all candidates merge into one duplicate-free collection. The
//! set lives only for one `aggregate` call; nothing persists between runs.

use crate::patterns::generate;
use crate::tokenizer::tokenize;
use std::collections::HashSet;
use tracing::debug;

/// Insertion-ordered, duplicate-free collection of generated usernames.
#[derive(Debug, Default)]
pub struct UsernameSet {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl UsernameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate. Returns `true` if it was not already present;
    /// re-inserting an existing candidate is a no-op.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.order.push(candidate);
        true
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates usernames in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Consumes the set, yielding usernames sorted lexicographically.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut usernames = self.order;
        usernames.sort_unstable();
        usernames
    }
}

/// Per-name candidate count, recorded in input order for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCount {
    pub name: String,
    pub candidates: usize,
}

/// Processes every raw name in input order: tokenize, expand, merge.
///
/// Names that normalize to zero tokens are skipped silently and do not
/// appear in the per-name counts. The final set size never exceeds the sum
/// of the per-name counts; overlapping candidates across names fold into a
/// single entry.
pub fn aggregate<I, S>(names: I) -> (UsernameSet, Vec<NameCount>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = UsernameSet::new();
    let mut counts = Vec::new();

    for name in names {
        let raw = name.as_ref();
        let tokens = tokenize(raw);
        if tokens.is_empty() {
            debug!(name = raw, "no alphabetic content, skipping row");
            continue;
        }

        let candidates = generate(&tokens);
        debug!(name = raw, count = candidates.len(), "expanded name");
        counts.push(NameCount {
            name: raw.to_string(),
            candidates: candidates.len(),
        });

        for candidate in candidates {
            set.insert(candidate);
        }
    }

    (set, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = UsernameSet::new();
        assert!(set.insert("jsmith".to_string()));
        assert!(!set.insert("jsmith".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut set = UsernameSet::new();
        set.insert("charlie".to_string());
        set.insert("alpha".to_string());
        set.insert("bravo".to_string());
        set.insert("alpha".to_string());

        let in_order: Vec<&str> = set.iter().collect();
        assert_eq!(in_order, vec!["charlie", "alpha", "bravo"]);
        assert_eq!(
            set.into_sorted_vec(),
            vec!["alpha", "bravo", "charlie"]
        );
    }

    #[test]
    fn test_aggregate_reports_per_name_counts_in_input_order() {
        let (set, counts) = aggregate(["Arthur Edwards", "Madonna"]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].name, "Arthur Edwards");
        assert_eq!(counts[0].candidates, 10);
        assert_eq!(counts[1].name, "Madonna");
        assert_eq!(counts[1].candidates, 1);
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn test_aggregate_skips_unrecoverable_names() {
        let (set, counts) = aggregate(["", "   ", "123 !!!", "Arthur Edwards"]);

        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].name, "Arthur Edwards");
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_aggregate_folds_duplicate_names() {
        // Two spellings that normalize to identical tokens contribute one
        // copy of each candidate
        let (set, counts) = aggregate(["John Smith", "JOHN   SMITH"]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].candidates, counts[1].candidates);
        assert_eq!(set.len(), counts[0].candidates);
    }

    #[test]
    fn test_aggregate_size_bounded_by_sum_of_counts() {
        let names = ["Arthur Edwards", "Edward Arthurs", "Arthur Edwards Jr"];
        let (set, counts) = aggregate(names);

        let sum: usize = counts.iter().map(|c| c.candidates).sum();
        assert!(set.len() <= sum);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_aggregate_is_order_independent_as_a_set() {
        let forward = ["Dilanka Kaushal Hewage", "Arthur Edwards", "Madonna"];
        let backward = ["Madonna", "Arthur Edwards", "Dilanka Kaushal Hewage"];

        let (set_a, _) = aggregate(forward);
        let (set_b, _) = aggregate(backward);

        assert_eq!(set_a.len(), set_b.len());
        for username in set_a.iter() {
            assert!(set_b.contains(username), "missing in permuted run: {username}");
        }
    }

    #[test]
    fn test_aggregate_grows_monotonically() {
        let names = ["Arthur Edwards", "John Smith", "Jane Smith"];
        let mut previous = 0;
        for end in 1..=names.len() {
            let (set, _) = aggregate(&names[..end]);
            assert!(set.len() >= previous);
            previous = set.len();
        }
    }
}
