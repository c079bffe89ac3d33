//! Dictionary entries recorded by the compressor.

use crate::marker::Marker;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One accepted substitution.
///
/// Positions are character offsets into the working text as it was right
/// before this entry's markers were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    id: u32,
    start_index: usize,
    length: usize,
    occurrence_positions: Vec<usize>,
}

impl DictionaryEntry {
    /// Creates an entry.
    ///
    /// `occurrence_positions` lists every occurrence in ascending order,
    /// starting with the canonical one at `start_index`.
    pub fn new(
        id: u32,
        start_index: usize,
        length: usize,
        occurrence_positions: Vec<usize>,
    ) -> Self {
        Self {
            id,
            start_index,
            length,
            occurrence_positions,
        }
    }

    /// Entry id; also the digits of its marker token.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Offset of the canonical copy, which is left in place as literal text.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Substring length in characters.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Every occurrence, canonical copy included, in ascending order.
    pub fn occurrence_positions(&self) -> &[usize] {
        &self.occurrence_positions
    }

    /// Occurrences that were overwritten by this entry's marker.
    pub fn replaced_positions(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        let start = self.start_index;
        self.occurrence_positions
            .iter()
            .copied()
            .filter(move |&pos| pos != start)
    }

    pub(crate) fn marker(&self) -> Marker {
        Marker::new(self.id)
    }
}

/// Orders by id first, which is creation order; the remaining fields only
/// break ties so that `Ordering::Equal` agrees with `==`.
impl Ord for DictionaryEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.id, self.start_index, self.length, &self.occurrence_positions).cmp(&(
            other.id,
            other.start_index,
            other.length,
            &other.occurrence_positions,
        ))
    }
}

impl PartialOrd for DictionaryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
