use crate::core::Dag;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk shape of one commit record
#[derive(Serialize)]
struct NodeRecord<'a> {
    parents: &'a [String],
    children: &'a [String],
    author: &'a str,
    committer: &'a str,
    author_timestamp: &'a str,
    commit_timestamp: &'a str,
    #[serde(rename = "type")]
    node_type: String,
}

/// Render the classified DAG as one JSON object keyed by commit ID,
/// 4-space indented. IDs are emitted in sorted order so output is
/// reproducible; child arrays keep their discovery order.
pub fn to_json(dag: &Dag) -> Result<String> {
    let records: BTreeMap<&str, NodeRecord> = dag
        .nodes
        .values()
        .map(|node| {
            (
                node.id.as_str(),
                NodeRecord {
                    parents: node.parents.as_slice(),
                    children: node.children.as_slice(),
                    author: &node.author,
                    committer: &node.committer,
                    author_timestamp: &node.author_timestamp,
                    commit_timestamp: &node.commit_timestamp,
                    node_type: node.type_string(),
                },
            )
        })
        .collect();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to serialize commit records")?;

    let mut json = String::from_utf8(buf).context("Serialized records are not UTF-8")?;
    json.push('\n');
    Ok(json)
}

/// Write the serialized records to `path`. Runs only after the full graph
/// has been built and classified, so a failed run leaves no partial file.
pub fn write_json<P: AsRef<Path>>(dag: &Dag, path: P) -> Result<()> {
    let json = to_json(dag)?;
    fs::write(path.as_ref(), json)
        .with_context(|| format!("Failed to write {}", path.as_ref().display()))
}
