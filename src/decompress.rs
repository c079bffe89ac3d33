//! Decompression: resolve markers newest entry first.
//!
//! A later entry may have written its marker inside the canonical copy of an
//! earlier one, so entries are undone in descending id order. Resolving an
//! entry returns the working text to exactly the state it was in when that
//! entry was created, which is what its recorded positions refer to.

use crate::artifact::CompressedArtifact;
use crate::entry::DictionaryEntry;
use crate::error::ArchiveError;
use crate::marker::{is_eligible, MIN_SUBSTRING_LENGTH};
use log::debug;

/// Reconstructs the original text.
///
/// Fails with [`ArchiveError::CorruptArtifact`] if the entry table is
/// inconsistent or a recorded position does not hold the expected marker.
pub fn decompress(artifact: &CompressedArtifact) -> Result<String, ArchiveError> {
    validate_entries(artifact.entries())?;

    let mut working: Vec<char> = artifact.marked_text().chars().collect();
    for entry in artifact.entries().iter().rev() {
        expand(&mut working, entry)?;
    }

    debug!(
        "restored {} chars from {} entries",
        working.len(),
        artifact.entries().len()
    );
    Ok(working.into_iter().collect())
}

/// Decodes a byte container produced by [`CompressedArtifact::to_bytes`] and
/// reconstructs the original text.
pub fn decompress_bytes(bytes: &[u8]) -> Result<String, ArchiveError> {
    let artifact = CompressedArtifact::from_bytes(bytes)?;
    decompress(&artifact)
}

/// Checks the shape of the entry table before touching the text.
fn validate_entries(entries: &[DictionaryEntry]) -> Result<(), ArchiveError> {
    for (index, entry) in entries.iter().enumerate() {
        let id = entry.id();
        if u32::try_from(index).ok() != Some(id) {
            return Err(ArchiveError::corrupt(
                id,
                format!("found at position {index} of the entry table"),
            ));
        }

        if entry.length() < MIN_SUBSTRING_LENGTH {
            return Err(ArchiveError::corrupt(
                id,
                format!("length {} is below the minimum", entry.length()),
            ));
        }

        let positions = entry.occurrence_positions();
        if positions.first() != Some(&entry.start_index()) {
            return Err(ArchiveError::corrupt(
                id,
                "occurrences do not start at the canonical copy",
            ));
        }

        for pair in positions.windows(2) {
            let disjoint = pair[0]
                .checked_add(entry.length())
                .is_some_and(|end| end <= pair[1]);
            if !disjoint {
                return Err(ArchiveError::corrupt(
                    id,
                    format!("occurrences at {} and {} overlap", pair[0], pair[1]),
                ));
            }
        }
    }
    Ok(())
}

/// Replaces each of `entry`'s markers with its canonical substring.
fn expand(working: &mut Vec<char>, entry: &DictionaryEntry) -> Result<(), ArchiveError> {
    let id = entry.id();
    let start = entry.start_index();

    let substring: Vec<char> = start
        .checked_add(entry.length())
        .and_then(|end| working.get(start..end))
        .ok_or_else(|| ArchiveError::corrupt(id, "canonical copy is out of range"))?
        .to_vec();

    if !substring.iter().all(|&c| is_eligible(c)) {
        return Err(ArchiveError::corrupt(
            id,
            "canonical copy contains marker characters",
        ));
    }

    let marker = entry.marker();
    // Ascending: every earlier marker is already expanded, so later
    // positions line up with the text this entry was created from
    for pos in entry.replaced_positions() {
        if !marker.matches_at(working, pos) {
            return Err(ArchiveError::corrupt(
                id,
                format!("expected marker {marker} at position {pos}"),
            ));
        }
        working.splice(pos..pos + marker.width(), substring.iter().copied());
    }
    Ok(())
}
