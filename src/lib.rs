//! # resub - Repeated Substring Substitution
//!
//! A reversible text compressor that replaces repeated substrings with short
//! marker tokens and keeps a dictionary of what was replaced.
//!
//! Compression repeatedly:
//! 1. Finds the longest repeated substring of at least three characters
//!    (leftmost wins ties)
//! 2. Replaces every copy except the first with a marker `&<id>`
//! 3. Records the substitution as a dictionary entry
//!
//! Decompression walks the dictionary backwards, newest entry first, and
//! splices each substring back in place of its markers.
//!
//! ## Example
//!
//! ```
//! use resub_rs::{compress, decompress};
//!
//! let artifact = compress("abcabcX");
//! assert_eq!(artifact.marked_text(), "abc&0X");
//!
//! // Reconstructs the original text
//! let restored = decompress(&artifact).unwrap();
//! assert_eq!(restored, "abcabcX");
//!
//! println!("Created {} entries", artifact.entries().len());
//! ```
//!
//! ## Markers
//!
//! The sentinel `&` and the decimal digits never take part in a match. A
//! marker can therefore never be mistaken for repeated content, and a literal
//! digit right after a marker cannot change how the marker is read back.
//!
//! ## Performance
//!
//! - Each search pass is cubic in the worst case; aimed at short to medium text
//! - Candidate pairs are restricted to starts sharing a three-character prefix

mod artifact;
mod compress;
mod decompress;
mod entry;
mod error;
mod finder;
mod id_gen;
mod marker;


pub use artifact::{ArchiveStats, CompressedArtifact};
pub use compress::{compress, compress_bytes};
pub use decompress::{decompress, decompress_bytes};
pub use entry::DictionaryEntry;
pub use error::ArchiveError;
pub use marker::{is_eligible, MIN_SUBSTRING_LENGTH, SENTINEL};
