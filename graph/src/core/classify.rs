use super::dag::Dag;
use super::label::Label;

/// Assign each node's structural labels in a single pass over the DAG.
///
/// Labels depend only on the node's own parent and child counts, so the
/// pass is order-independent across nodes. Several labels can co-occur
/// (a merge that branches again is `merge; fork`); `plain` is reserved for
/// nodes matching no other rule, exactly one parent and exactly one child.
pub fn classify(dag: &mut Dag) {
    for node in dag.nodes.values_mut() {
        let mut labels = Vec::new();

        if node.is_merge() {
            labels.push(Label::Merge);
        }
        if node.is_root() {
            labels.push(Label::Root);
        }
        if node.is_fork() {
            labels.push(Label::Fork);
        }
        if node.is_tip() {
            labels.push(Label::Tip);
        }
        if labels.is_empty() {
            labels.push(Label::Plain);
        }

        node.labels = labels;
    }
}
