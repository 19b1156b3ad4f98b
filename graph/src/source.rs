use crate::core::node::IdList;
use thiserror::Error;

/// Raw fields of a single commit as returned by the underlying store
#[derive(Debug, Clone)]
pub struct CommitDetail {
    /// Parent commit IDs, first parent first
    pub parents: IdList,
    /// Author identity, `Name <email>`
    pub author: String,
    /// Committer identity, `Name <email>`
    pub committer: String,
    /// Author timestamp string
    pub author_timestamp: String,
    /// Commit timestamp string
    pub commit_timestamp: String,
}

/// Errors surfaced at the commit-store boundary
#[derive(Debug, Error)]
pub enum SourceError {
    /// HEAD is missing or does not point at a commit
    #[error("repository has no resolvable tip")]
    UnresolvedTip,
    /// The identifier does not name a commit object in the store
    #[error("unknown commit {0}")]
    UnknownCommit(String),
    /// The commit exists but one of its fields cannot be decoded
    #[error("malformed {field} in commit {id}")]
    MalformedField { id: String, field: &'static str },
    /// Any other failure reported by the store
    #[error("git error: {0}")]
    Backend(#[from] git2::Error),
}

/// Access to the underlying commit store.
///
/// The walker only ever asks for the current tip and for the raw fields of
/// one commit at a time; everything else (graph shape, classification) is
/// derived on this side of the boundary.
pub trait CommitSource {
    /// Identifier of the repository's current tip (HEAD-equivalent)
    fn resolve_tip(&self) -> Result<String, SourceError>;

    /// Raw fields of the commit named by `id`
    fn fetch(&self, id: &str) -> Result<CommitDetail, SourceError>;
}
