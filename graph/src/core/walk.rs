use super::dag::Dag;
use super::node::CommitNode;
use crate::source::CommitSource;
use anyhow::Result;

/// Backward explorer over commit ancestry.
///
/// Discovers every commit reachable from the tip exactly once and mirrors
/// each parent pointer with a child entry on the parent node, turning the
/// store's parent-only links into a bidirectional graph.
pub struct Walker<'a, S: CommitSource> {
    source: &'a S,
}

impl<'a, S: CommitSource> Walker<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Build the ancestry DAG reachable from the repository's current tip
    pub fn walk(&self) -> Result<Dag> {
        let tip = self.source.resolve_tip()?;
        self.walk_from(tip)
    }

    /// Build the ancestry DAG reachable from `tip`.
    ///
    /// Iterative depth-first walk over an explicit stack of
    /// `(commit id, originating child)` pairs, so ancestry depth is bounded
    /// by the frontier rather than the call stack. Any source failure aborts
    /// the walk with no partial result.
    pub fn walk_from(&self, tip: String) -> Result<Dag> {
        let mut dag = Dag::new();
        let mut pending: Vec<(String, Option<String>)> = vec![(tip, None)];

        while let Some((id, originating_child)) = pending.pop() {
            // An ancestor re-reached through another path (both sides of a
            // merge converging, say): record the new child edge and stop.
            // Its own subtree was already explored.
            if let Some(node) = dag.nodes.get_mut(&id) {
                if let Some(child) = originating_child {
                    node.children.push(child);
                }
                continue;
            }

            let detail = self.source.fetch(&id)?;
            let mut node = CommitNode::new(id.clone(), detail);
            if let Some(child) = originating_child {
                node.children.push(child);
            }

            // Reverse push keeps first-parent-first discovery order.
            for parent in node.parents.iter().rev() {
                pending.push((parent.clone(), Some(id.clone())));
            }
            dag.nodes.insert(id, node);
        }

        Ok(dag)
    }
}
