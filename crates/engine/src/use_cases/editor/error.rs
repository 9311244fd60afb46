//! Editor rendering errors.

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while rendering an editor field.
///
/// Option handling never fails; only gallery persistence can.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
