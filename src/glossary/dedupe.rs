//! Parallel-relation label normalization.

use std::collections::HashSet;

use super::Edge;

/// Blank repeated labels that tend to clutter the rendered graph.
///
/// Only labels in `collapsed` are touched: the first edge with a given
/// `(source, label)` pair keeps its label, later edges with the same pair
/// keep id/source/target/animated but have the label set to the empty
/// string. All other labels are kept on every edge, repeated or not.
/// "First" is the position in `edges`, so input order decides which edge
/// stays labeled.
pub(crate) fn dedupe_edge_labels(edges: Vec<Edge>, collapsed: &HashSet<String>) -> Vec<Edge> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::with_capacity(edges.len());

    for mut edge in edges {
        let label = edge.label.trim();
        if label.is_empty() || !collapsed.contains(label) {
            out.push(edge);
            continue;
        }
        let key = (edge.source.clone(), label.to_string());
        if seen.contains(&key) {
            edge.label = String::new();
        } else {
            seen.insert(key);
        }
        out.push(edge);
    }

    out
}
