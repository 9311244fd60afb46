//! Generated DOM ids for editor inputs.

use std::sync::atomic::{AtomicU64, Ordering};

pub const INPUT_ID_PREFIX: &str = "trix-editor";

/// Monotonic source of `trix-editor-<n>` ids.
///
/// One sequence is shared by every render in an application instance, so ids
/// stay unique across concurrent requests. The first id is `trix-editor-1`.
#[derive(Debug, Default)]
pub struct InputIdSequence {
    issued: AtomicU64,
}

impl InputIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_value(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn next_input_id(&self) -> String {
        format!("{}-{}", INPUT_ID_PREFIX, self.next_value())
    }
}
