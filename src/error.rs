use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The input could not be read as text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The entry table or marked text is inconsistent with what compression
    /// would have produced.
    #[error("corrupt artifact at entry {id}: {reason}")]
    CorruptArtifact { id: u32, reason: String },

    /// The byte container could not be encoded or decoded.
    #[error("container codec error: {0}")]
    Codec(#[from] bincode::Error),
}

impl ArchiveError {
    pub(crate) fn corrupt(id: u32, reason: impl Into<String>) -> Self {
        ArchiveError::CorruptArtifact {
            id,
            reason: reason.into(),
        }
    }
}
