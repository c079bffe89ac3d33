//! Longest-repeat search over the working text.
//!
//! For every pair of start positions `(i, j)` with `i < j` the finder counts
//! how many characters match going forward, stopping at the first mismatch,
//! the first ineligible character, or when the copy at `i` would run into the
//! copy at `j`. The longest run of at least [`MIN_SUBSTRING_LENGTH`] wins; on
//! equal length the smallest `i` wins.
//!
//! Any qualifying run shares its first [`MIN_SUBSTRING_LENGTH`] characters
//! with its partner, so starts are bucketed by that prefix and only pairs
//! within one bucket are compared. The outcome is the same as comparing every
//! pair.

use crate::marker::{is_eligible, MIN_SUBSTRING_LENGTH};
use ahash::AHashMap as HashMap;

type Prefix = [char; MIN_SUBSTRING_LENGTH];

/// Best repeated substring found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    /// Start of the leftmost copy
    pub start_index: usize,
    /// Length in characters
    pub length: usize,
    /// Every non-overlapping copy, ascending, starting with `start_index`
    pub occurrence_positions: Vec<usize>,
}

/// Finds the longest repeated run of eligible characters.
///
/// Returns `None` when no run reaches [`MIN_SUBSTRING_LENGTH`].
pub(crate) fn find_longest_repeat(text: &[char]) -> Option<Candidate> {
    let buckets = prefix_buckets(text);

    // (start, length) of the best run so far
    let mut best: Option<(usize, usize)> = None;

    for i in 0..text.len() {
        let Some(starts) = prefix_at(text, i).and_then(|key| buckets.get(&key)) else {
            continue;
        };

        let later = starts.partition_point(|&j| j <= i);
        for &j in &starts[later..] {
            let run = run_length(text, i, j);
            // Strictly longer only: the first (leftmost) start keeps ties
            if run >= MIN_SUBSTRING_LENGTH && best.map_or(true, |(_, len)| run > len) {
                best = Some((i, run));
            }
        }
    }

    let (start_index, length) = best?;
    let occurrence_positions = collect_occurrences(text, &buckets, start_index, length);

    Some(Candidate {
        start_index,
        length,
        occurrence_positions,
    })
}

/// Groups every start position by its eligible prefix, ascending.
fn prefix_buckets(text: &[char]) -> HashMap<Prefix, Vec<usize>> {
    let mut buckets: HashMap<Prefix, Vec<usize>> = HashMap::default();
    for i in 0..text.len() {
        if let Some(key) = prefix_at(text, i) {
            buckets.entry(key).or_default().push(i);
        }
    }
    buckets
}

/// The first [`MIN_SUBSTRING_LENGTH`] characters at `pos`, if all are eligible.
fn prefix_at(text: &[char], pos: usize) -> Option<Prefix> {
    let span = text.get(pos..pos + MIN_SUBSTRING_LENGTH)?;
    if !span.iter().all(|&c| is_eligible(c)) {
        return None;
    }
    Prefix::try_from(span).ok()
}

/// Length of the common eligible run starting at `i` and `j` (`i < j`).
///
/// The run is capped at `j - i` so the two copies never overlap.
fn run_length(text: &[char], i: usize, j: usize) -> usize {
    let cap = (j - i).min(text.len() - j);
    let mut run = 0;
    while run < cap && text[i + run] == text[j + run] && is_eligible(text[i + run]) {
        run += 1;
    }
    run
}

/// Collects the canonical copy and every later non-overlapping copy of
/// `text[start..start + length]`, scanning left to right.
fn collect_occurrences(
    text: &[char],
    buckets: &HashMap<Prefix, Vec<usize>>,
    start: usize,
    length: usize,
) -> Vec<usize> {
    let pattern = &text[start..start + length];
    let mut positions = vec![start];
    let mut free_from = start + length;

    let Some(starts) = prefix_at(text, start).and_then(|key| buckets.get(&key)) else {
        return positions;
    };

    for &j in starts {
        if j < free_from {
            continue;
        }
        if text.get(j..j + length) == Some(pattern) {
            positions.push(j);
            free_from = j + length;
        }
    }

    positions
}
