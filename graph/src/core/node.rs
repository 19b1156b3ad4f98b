use crate::core::label::{self, Label};
use crate::source::CommitDetail;
use smallvec::SmallVec;

/// Commit IDs adjacent to a node. Inline storage covers the common one- and
/// two-edge cases; octopus merges and busy fork points spill to the heap.
pub type IdList = SmallVec<[String; 2]>;

/// A commit node in the ancestry DAG
#[derive(Debug, Clone)]
pub struct CommitNode {
    /// Unique commit ID (SHA)
    pub id: String,
    /// Parent commit IDs, first parent first
    pub parents: IdList,
    /// Child commit IDs in discovery order
    pub children: IdList,
    /// Author identity, `Name <email>`
    pub author: String,
    /// Committer identity, `Name <email>`
    pub committer: String,
    /// Author timestamp
    pub author_timestamp: String,
    /// Commit timestamp
    pub commit_timestamp: String,
    /// Structural roles, assigned once after the walk completes
    pub labels: Vec<Label>,
}

impl CommitNode {
    /// Create a node from the store's raw fields. Scalar fields and the
    /// parent list are fixed here; `children` and `labels` are filled in
    /// later by the walk and the classification pass.
    pub fn new(id: String, detail: CommitDetail) -> Self {
        Self {
            id,
            parents: detail.parents,
            children: IdList::new(),
            author: detail.author,
            committer: detail.committer,
            author_timestamp: detail.author_timestamp,
            commit_timestamp: detail.commit_timestamp,
            labels: Vec::new(),
        }
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if multiple branches diverge from this commit
    pub fn is_fork(&self) -> bool {
        self.children.len() > 1
    }

    /// Check if no descendant was discovered (a branch head relative to the walk)
    pub fn is_tip(&self) -> bool {
        self.children.is_empty()
    }

    /// Render the composite label string, joined in rule order
    pub fn type_string(&self) -> String {
        self.labels
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(label::SEPARATOR)
    }
}
