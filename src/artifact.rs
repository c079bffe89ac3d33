//! The compressed form: dictionary entries plus the marked text.

use crate::entry::DictionaryEntry;
use crate::error::ArchiveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output of [`compress`](crate::compress) and input of
/// [`decompress`](crate::decompress).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedArtifact {
    /// Entries in creation order
    entries: Vec<DictionaryEntry>,
    /// Working text after the last substitution
    marked_text: String,
}

impl CompressedArtifact {
    pub(crate) fn new(entries: Vec<DictionaryEntry>, marked_text: String) -> Self {
        Self {
            entries,
            marked_text,
        }
    }

    /// Rebuilds an artifact from parts decoded by some other container.
    ///
    /// Nothing is validated here; [`decompress`](crate::decompress) checks
    /// the entries against the marked text.
    pub fn from_parts(entries: Vec<DictionaryEntry>, marked_text: String) -> Self {
        Self::new(entries, marked_text)
    }

    /// Splits the artifact into its entries and marked text.
    pub fn into_parts(self) -> (Vec<DictionaryEntry>, String) {
        (self.entries, self.marked_text)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn marked_text(&self) -> &str {
        &self.marked_text
    }

    /// Encodes the artifact with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes an artifact previously produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Returns compression statistics.
    pub fn stats(&self) -> ArchiveStats {
        ArchiveStats {
            original_length: self.original_length(),
            marked_length: self.marked_text.chars().count(),
            num_entries: self.entries.len(),
            replaced_occurrences: self
                .entries
                .iter()
                .map(|e| e.replaced_positions().count())
                .sum(),
        }
    }

    /// Input length in characters, derived from the marked text and the
    /// entries.
    ///
    /// Each replaced occurrence traded `length` characters for one marker.
    /// Saturates instead of overflowing on an inconsistent entry table.
    fn original_length(&self) -> usize {
        let mut expanded = 0usize;
        let mut collapsed = 0usize;
        for entry in &self.entries {
            let replaced = entry.replaced_positions().count();
            expanded = expanded.saturating_add(entry.length().saturating_mul(replaced));
            collapsed = collapsed.saturating_add(entry.marker().width().saturating_mul(replaced));
        }
        self.marked_text
            .chars()
            .count()
            .saturating_add(expanded)
            .saturating_sub(collapsed)
    }

    /// Human-readable summary: marked text, lengths, and every entry.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompressedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        writeln!(f, "{}", self.marked_text)?;
        writeln!(f, "ArchivedLength={}", stats.marked_length)?;
        writeln!(f, "OriginalLength={}", stats.original_length)?;
        writeln!(f, "Compressed Elements:")?;
        for entry in &self.entries {
            writeln!(
                f,
                "ID={}\tStartIndex={}\tLength={}\tOccurrences:{:?}",
                entry.id(),
                entry.start_index(),
                entry.length(),
                entry.occurrence_positions()
            )?;
        }
        Ok(())
    }
}

/// Statistics about one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Input length in characters
    pub original_length: usize,
    /// Marked text length in characters
    pub marked_length: usize,
    /// Number of dictionary entries
    pub num_entries: usize,
    /// Number of occurrences overwritten by markers
    pub replaced_occurrences: usize,
}

impl ArchiveStats {
    /// Returns the compression ratio as a percentage.
    ///
    /// Lower is better. 100% means no compression.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            0.0
        } else {
            (self.marked_length as f64 / self.original_length as f64) * 100.0
        }
    }
}
