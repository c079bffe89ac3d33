/// Entry id generator scoped to a single compression run.
///
/// Ids start at 0 and are handed out contiguously; they are never reused, so
/// the id of an entry also records its creation order.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Creates a new ID generator starting from ID 0.
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Gets the next ID.
    pub(crate) fn get(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    pub(crate) fn issued(&self) -> u32 {
        self.next
    }
}
