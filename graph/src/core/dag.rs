use super::node::CommitNode;
use std::collections::HashMap;

/// Directed acyclic graph of commit ancestry, keyed by commit ID.
///
/// The key set doubles as the walk's visited set: a node is inserted the
/// moment its ID is first encountered, before its parents are explored, so
/// no commit is ever fetched or created twice.
#[derive(Debug, Clone)]
pub struct Dag {
    /// All nodes indexed by commit ID
    pub nodes: HashMap<String, CommitNode>,
}

impl Dag {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&CommitNode> {
        self.nodes.get(id)
    }

    /// Get all root commits (no parents)
    pub fn roots(&self) -> Vec<&CommitNode> {
        self.nodes.values().filter(|node| node.is_root()).collect()
    }

    /// Get all tip commits (no discovered children)
    pub fn tips(&self) -> Vec<&CommitNode> {
        self.nodes.values().filter(|node| node.is_tip()).collect()
    }

    /// Get parents of a commit
    pub fn parents_of(&self, id: &str) -> Vec<&CommitNode> {
        self.nodes
            .get(id)
            .map(|node| {
                node.parents
                    .iter()
                    .filter_map(|id| self.nodes.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get children of a commit
    pub fn children_of(&self, id: &str) -> Vec<&CommitNode> {
        self.nodes
            .get(id)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|id| self.nodes.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Count of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Count of parent links; each is mirrored by exactly one child entry
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.parents.len()).sum()
    }

    /// Get statistics about the DAG
    pub fn stats(&self) -> DagStats {
        let merge_commits = self.nodes.values().filter(|n| n.is_merge()).count();
        let fork_commits = self.nodes.values().filter(|n| n.is_fork()).count();

        DagStats {
            total_commits: self.node_count(),
            total_edges: self.edge_count(),
            merge_commits,
            root_commits: self.roots().len(),
            fork_commits,
            tip_commits: self.tips().len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DagStats {
    pub total_commits: usize,
    pub total_edges: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub fork_commits: usize,
    pub tip_commits: usize,
}

impl Default for Dag {
    fn default() -> Self {
        Self::new()
    }
}
