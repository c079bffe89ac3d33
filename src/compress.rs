//! Compression: repeatedly replace the longest repeated substring with a marker.
//!
//! # Example
//!
//! ```
//! use resub_rs::compress;
//!
//! let artifact = compress("xyzAxyzBxyz");
//! assert_eq!(artifact.marked_text(), "xyzA&0B&0");
//! assert_eq!(artifact.entries()[0].occurrence_positions(), &[0, 4, 8]);
//! ```

use crate::artifact::CompressedArtifact;
use crate::entry::DictionaryEntry;
use crate::error::ArchiveError;
use crate::finder::find_longest_repeat;
use crate::id_gen::IdGenerator;
use log::{debug, info, trace};

/// Compresses `text` into a dictionary and a marked text.
///
/// Text without any repeat of three or more eligible characters comes back
/// unchanged with no entries.
pub fn compress(text: &str) -> CompressedArtifact {
    let mut working: Vec<char> = text.chars().collect();

    let mut id_gen = IdGenerator::new();
    let mut entries = Vec::new();

    while let Some(candidate) = find_longest_repeat(&working) {
        let entry = DictionaryEntry::new(
            id_gen.get(),
            candidate.start_index,
            candidate.length,
            candidate.occurrence_positions,
        );
        substitute(&mut working, &entry);
        entries.push(entry);
    }
    debug_assert_eq!(id_gen.issued() as usize, entries.len());

    let artifact = CompressedArtifact::new(entries, working.into_iter().collect());
    log_summary(&artifact);
    artifact
}

/// Compresses raw bytes, which must hold UTF-8 text.
pub fn compress_bytes(bytes: &[u8]) -> Result<CompressedArtifact, ArchiveError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ArchiveError::InvalidInput(format!("input is not UTF-8 text: {e}")))?;
    Ok(compress(text))
}

/// Overwrites every non-canonical occurrence of `entry` with its marker.
///
/// Positions are processed right to left so earlier offsets stay valid.
fn substitute(working: &mut Vec<char>, entry: &DictionaryEntry) {
    let marker = entry.marker();
    for pos in entry.replaced_positions().rev() {
        working.splice(
            pos..pos + entry.length(),
            marker.as_chars().iter().copied(),
        );
    }
}

fn log_summary(artifact: &CompressedArtifact) {
    let stats = artifact.stats();
    debug!("marked text: {}", artifact.marked_text());
    info!(
        "compressed {} chars to {} chars with {} entries ({:.2}%)",
        stats.original_length,
        stats.marked_length,
        stats.num_entries,
        stats.compression_ratio()
    );
    for entry in artifact.entries() {
        trace!(
            "entry id={} start={} length={} occurrences={:?}",
            entry.id(),
            entry.start_index(),
            entry.length(),
            entry.occurrence_positions()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let artifact = compress("");
        assert!(artifact.entries().is_empty());
        assert_eq!(artifact.marked_text(), "");
    }

    #[test]
    fn test_no_repeats_is_noop() {
        let artifact = compress("the quick brown fox");
        assert!(artifact.entries().is_empty());
        assert_eq!(artifact.marked_text(), "the quick brown fox");
    }

    #[test]
    fn test_two_char_repeat_yields_nothing() {
        let artifact = compress("ababXY");
        assert!(artifact.entries().is_empty());
        assert_eq!(artifact.marked_text(), "ababXY");
    }

    #[test]
    fn test_three_char_repeat_yields_one_entry() {
        let artifact = compress("abcabcX");
        assert_eq!(artifact.entries().len(), 1);
        let entry = &artifact.entries()[0];
        assert_eq!(entry.id(), 0);
        assert_eq!(entry.start_index(), 0);
        assert_eq!(entry.length(), 3);
        assert_eq!(entry.occurrence_positions(), &[0, 3]);
        assert_eq!(artifact.marked_text(), "abc&0X");
    }

    #[test]
    fn test_multi_occurrence() {
        let artifact = compress("xyzAxyzBxyz");
        assert_eq!(artifact.entries().len(), 1);
        assert_eq!(artifact.entries()[0].occurrence_positions(), &[0, 4, 8]);
        assert_eq!(artifact.marked_text(), "xyzA&0B&0");
    }

    #[test]
    fn test_ids_are_contiguous() {
        let artifact = compress("cdef+abcdefgh-abcdefgh");
        let ids: Vec<u32> = artifact.entries().iter().map(DictionaryEntry::id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_later_entry_reaches_into_canonical_copy() {
        let artifact = compress("cdef+abcdefgh-abcdefgh");
        let entries = artifact.entries();

        assert_eq!(entries[0].start_index(), 5);
        assert_eq!(entries[0].length(), 8);
        assert_eq!(entries[0].occurrence_positions(), &[5, 14]);

        // "cdef" is then found again inside the canonical "abcdefgh"
        assert_eq!(entries[1].start_index(), 0);
        assert_eq!(entries[1].length(), 4);
        assert_eq!(entries[1].occurrence_positions(), &[0, 7]);

        assert_eq!(artifact.marked_text(), "cdef+ab&1gh-&0");
    }

    #[test]
    fn test_independent_runs_do_not_share_ids() {
        let first = compress("abcabc");
        let second = compress("xyzxyz");
        assert_eq!(first.entries()[0].id(), 0);
        assert_eq!(second.entries()[0].id(), 0);
    }

    #[test]
    fn test_compress_bytes_rejects_invalid_utf8() {
        let result = compress_bytes(&[b'a', 0xc3, 0x28, b'b']);
        assert!(matches!(result, Err(ArchiveError::InvalidInput(_))));
    }

    #[test]
    fn test_compress_bytes() {
        let artifact = compress_bytes("abcabcX".as_bytes()).unwrap();
        assert_eq!(artifact, compress("abcabcX"));
    }
}
