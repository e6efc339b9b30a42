//! BFS computation of the core term set reachable from the anchor.

use std::collections::{HashMap, HashSet, VecDeque};

use super::Edge;

/// How the traversal anchor is chosen at load time.
#[derive(Debug, Clone)]
pub enum AnchorPolicy {
    /// Use the named term id when it exists in the loaded data, otherwise
    /// fall back to the first-inserted term id.
    Preferred(String),
    /// Always use the first-inserted term id.
    FirstInserted,
}

impl AnchorPolicy {
    /// Resolve the anchor against the loaded term ids.
    /// `order` is the first-insertion order of ids; `None` means there are
    /// no terms at all.
    fn resolve<'a>(&'a self, known: &HashSet<&str>, order: &'a [String]) -> Option<&'a str> {
        match self {
            AnchorPolicy::Preferred(id) if known.contains(id.as_str()) => Some(id.as_str()),
            _ => order.first().map(|id| id.as_str()),
        }
    }
}

/// Compute the set of term ids reachable from the anchor through the
/// undirected adjacency induced by `edges`.
///
/// Edges referencing unknown term ids contribute nothing to the adjacency.
/// Clusters not reachable from the anchor are left out: the exposed graph
/// is a single connected component containing the anchor.
pub(crate) fn compute_core_ids(
    order: &[String],
    edges: &[Edge],
    anchor: &AnchorPolicy,
) -> HashSet<String> {
    let known: HashSet<&str> = order.iter().map(|id| id.as_str()).collect();

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        let (source, target) = (edge.source.as_str(), edge.target.as_str());
        if known.contains(source) && known.contains(target) {
            adjacency.entry(source).or_default().push(target);
            adjacency.entry(target).or_default().push(source);
        } else {
            log::debug!("edge {} references an unknown term id, skipping", edge.id);
        }
    }

    let Some(anchor_id) = anchor.resolve(&known, order) else {
        return HashSet::new();
    };

    let mut core = HashSet::new();
    let mut queue = VecDeque::new();
    core.insert(anchor_id.to_string());
    queue.push_back(anchor_id);

    while let Some(current) = queue.pop_front() {
        for &next in adjacency.get(current).into_iter().flatten() {
            if core.insert(next.to_string()) {
                queue.push_back(next);
            }
        }
    }

    core
}
