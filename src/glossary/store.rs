//! In-memory glossary store: load-time curation and read accessors.

use std::collections::{HashMap, HashSet};

use super::dedupe::dedupe_edge_labels;
use super::traversal::{compute_core_ids, AnchorPolicy};
use super::{Edge, GraphNode, GraphResponse, NodeData, Term};

/// Owned store for the curated glossary graph.
///
/// Constructed once, loaded once at startup, then shared read-only (the
/// HTTP layer wraps it in an `Arc`). All accessors operate on the frozen
/// post-[`GlossaryStore::load`] state; nothing mutates after `load` returns.
#[derive(Debug)]
pub struct GlossaryStore {
    anchor: AnchorPolicy,
    collapsed_labels: HashSet<String>,
    terms: HashMap<String, Term>,
    /// First-insertion order of core term ids. Drives node ordering and the
    /// anchor fallback so output stays deterministic.
    order: Vec<String>,
    edges: Vec<Edge>,
    /// Term ids exposed by the store.
    core_ids: HashSet<String>,
}

impl GlossaryStore {
    /// Create an empty store with the given anchor policy and the set of
    /// relation labels subject to parallel-edge deduplication.
    pub fn new(anchor: AnchorPolicy, collapsed_labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            anchor,
            collapsed_labels: collapsed_labels.into_iter().collect(),
            terms: HashMap::new(),
            order: Vec::new(),
            edges: Vec::new(),
            core_ids: HashSet::new(),
        }
    }

    /// Replace the store contents with the curated core of the given records.
    ///
    /// Input order is a contract: it decides the anchor fallback, the node
    /// ordering in [`GlossaryStore::get_graph`] and which of several
    /// parallel edges keeps its visible label. Duplicate term ids keep the
    /// last record (the data file is a single controlled source). Edges
    /// referencing unknown term ids are dropped without error.
    pub fn load(&mut self, terms: Vec<Term>, edges: Vec<Edge>) {
        let raw_terms = terms.len();
        let raw_edges = edges.len();

        let mut map: HashMap<String, Term> = HashMap::with_capacity(terms.len());
        let mut order: Vec<String> = Vec::with_capacity(terms.len());
        for term in terms {
            if map.contains_key(&term.id) {
                log::warn!("duplicate term id {:?}, keeping the later record", term.id);
            } else {
                order.push(term.id.clone());
            }
            map.insert(term.id.clone(), term);
        }

        let core_ids = compute_core_ids(&order, &edges, &self.anchor);

        order.retain(|id| core_ids.contains(id));
        map.retain(|id, _| core_ids.contains(id));
        let kept: Vec<Edge> = edges
            .into_iter()
            .filter(|e| core_ids.contains(&e.source) && core_ids.contains(&e.target))
            .collect();
        let edges = dedupe_edge_labels(kept, &self.collapsed_labels);

        log::info!(
            "glossary core: {} of {} terms, {} of {} edges",
            map.len(),
            raw_terms,
            edges.len(),
            raw_edges
        );

        self.terms = map;
        self.order = order;
        self.edges = edges;
        self.core_ids = core_ids;
    }

    /// All core terms, sorted by title (case-insensitive, ties broken by id).
    pub fn list_terms(&self) -> Vec<Term> {
        let mut terms: Vec<Term> = self.order.iter().map(|id| self.terms[id].clone()).collect();
        terms.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        terms
    }

    /// Look up a core term by id. Ids filtered out at load resolve to `None`.
    pub fn get_term(&self, id: &str) -> Option<&Term> {
        self.terms
            .get(id)
            .filter(|term| self.core_ids.contains(&term.id))
    }

    /// The pre-curated core graph. Nodes follow first-insertion order and
    /// edges are exactly the list frozen at load time.
    pub fn get_graph(&self) -> GraphResponse {
        let nodes = self
            .order
            .iter()
            .map(|id| {
                let term = &self.terms[id];
                GraphNode {
                    id: term.id.clone(),
                    position: term.position,
                    data: NodeData {
                        label: term.title.clone(),
                        definition: term.definition.clone(),
                        sources: term.sources.clone(),
                    },
                    node_type: None,
                }
            })
            .collect();

        GraphResponse {
            nodes,
            edges: self.edges.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::Position;

    fn term(id: &str, title: &str) -> Term {
        Term {
            id: id.to_string(),
            title: title.to_string(),
            definition: format!("{} definition", title),
            sources: Vec::new(),
            position: Position::default(),
        }
    }

    fn edge(id: &str, source: &str, target: &str, label: &str) -> Edge {
        Edge {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            label: label.to_string(),
            animated: false,
        }
    }

    fn store() -> GlossaryStore {
        GlossaryStore::new(
            AnchorPolicy::Preferred("root".to_string()),
            vec!["consists of".to_string()],
        )
    }

    #[test]
    fn test_load_excludes_disconnected_islands() {
        let mut s = store();
        s.load(
            vec![term("root", "Root"), term("p", "P"), term("q", "Q"), term("r", "R")],
            vec![edge("e1", "root", "p", ""), edge("e2", "q", "r", "")],
        );

        let listed: Vec<String> = s.list_terms().into_iter().map(|t| t.id).collect();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&"root".to_string()));
        assert!(listed.contains(&"p".to_string()));

        assert!(s.get_term("q").is_none());
        assert!(s.get_term("r").is_none());

        let graph = s.get_graph();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].id, "e1");
    }

    #[test]
    fn test_graph_edges_stay_within_node_set() {
        let mut s = store();
        s.load(
            vec![term("root", "Root"), term("p", "P")],
            vec![
                edge("e1", "root", "p", ""),
                edge("e2", "root", "ghost", ""),
                edge("e3", "ghost", "p", ""),
            ],
        );
        let graph = s.get_graph();
        let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for e in &graph.edges {
            assert!(node_ids.contains(&e.source.as_str()));
            assert!(node_ids.contains(&e.target.as_str()));
        }
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_list_terms_sorted_case_insensitive_with_id_tiebreak() {
        let mut s = store();
        s.load(
            vec![
                term("root", "Shadow DOM"),
                term("b2", "custom elements"),
                term("b1", "Custom Elements"),
                term("a", "anchor"),
            ],
            vec![
                edge("e1", "root", "b2", ""),
                edge("e2", "root", "b1", ""),
                edge("e3", "root", "a", ""),
            ],
        );
        let listed: Vec<String> = s.list_terms().into_iter().map(|t| t.id).collect();
        // "anchor" < "custom elements" (tie: b1 before b2) < "shadow dom"
        assert_eq!(listed, vec!["a", "b1", "b2", "root"]);

        // Sorting is idempotent: a second call yields the same order.
        let again: Vec<String> = s.list_terms().into_iter().map(|t| t.id).collect();
        assert_eq!(listed, again);
    }

    #[test]
    fn test_get_term_unknown_id() {
        let mut s = store();
        s.load(vec![term("root", "Root")], vec![]);
        assert!(s.get_term("root").is_some());
        assert!(s.get_term("nope").is_none());
    }

    #[test]
    fn test_get_graph_idempotent() {
        let mut s = store();
        s.load(
            vec![term("root", "Root"), term("p", "P"), term("q", "Q")],
            vec![
                edge("e1", "root", "p", "consists of"),
                edge("e2", "root", "q", "consists of"),
            ],
        );
        assert_eq!(s.get_graph(), s.get_graph());
    }

    #[test]
    fn test_empty_input() {
        let mut s = store();
        s.load(vec![], vec![]);
        assert!(s.list_terms().is_empty());
        let graph = s.get_graph();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_duplicate_term_id_last_write_wins() {
        let mut s = store();
        s.load(
            vec![term("root", "First"), term("root", "Second")],
            vec![],
        );
        assert_eq!(s.get_term("root").unwrap().title, "Second");
        assert_eq!(s.list_terms().len(), 1);
        assert_eq!(s.get_graph().nodes.len(), 1);
    }

    #[test]
    fn test_label_dedup_applied_at_load() {
        let mut s = store();
        s.load(
            vec![
                term("root", "Root"),
                term("a", "A"),
                term("b", "B"),
                term("c", "C"),
            ],
            vec![
                edge("e1", "root", "a", "consists of"),
                edge("e2", "root", "b", "consists of"),
                edge("e3", "root", "c", "compared with"),
                edge("e4", "root", "a", "compared with"),
            ],
        );
        let graph = s.get_graph();
        assert_eq!(graph.edges[0].label, "consists of");
        assert_eq!(graph.edges[1].label, "");
        // Labels outside the collapsible set repeat freely.
        assert_eq!(graph.edges[2].label, "compared with");
        assert_eq!(graph.edges[3].label, "compared with");
    }

    #[test]
    fn test_anchor_fallback_when_preferred_absent() {
        let mut s = GlossaryStore::new(
            AnchorPolicy::Preferred("missing".to_string()),
            vec!["consists of".to_string()],
        );
        s.load(
            vec![term("a", "A"), term("b", "B"), term("c", "C"), term("d", "D")],
            vec![edge("e1", "a", "b", ""), edge("e2", "c", "d", "")],
        );
        // Falls back to the first-inserted term's component.
        assert!(s.get_term("a").is_some());
        assert!(s.get_term("b").is_some());
        assert!(s.get_term("c").is_none());
    }

    #[test]
    fn test_graph_nodes_follow_insertion_order() {
        let mut s = store();
        s.load(
            vec![term("root", "Zeta"), term("p", "Alpha"), term("q", "Midway")],
            vec![edge("e1", "root", "p", ""), edge("e2", "p", "q", "")],
        );
        let node_ids: Vec<String> = s.get_graph().nodes.into_iter().map(|n| n.id).collect();
        assert_eq!(node_ids, vec!["root", "p", "q"]);
    }

    #[test]
    fn test_graph_node_carries_term_data() {
        let mut s = store();
        let mut t = term("root", "Web Components");
        t.position = Position { x: 10.0, y: -5.0 };
        t.sources = vec![crate::glossary::Source {
            title: "MDN".to_string(),
            url: "https://developer.mozilla.org/".to_string(),
        }];
        s.load(vec![t], vec![]);

        let graph = s.get_graph();
        let node = &graph.nodes[0];
        assert_eq!(node.id, "root");
        assert_eq!(node.position, Position { x: 10.0, y: -5.0 });
        assert_eq!(node.data.label, "Web Components");
        assert_eq!(node.data.definition, "Web Components definition");
        assert_eq!(node.data.sources.len(), 1);
        assert!(node.node_type.is_none());
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut s = store();
        s.load(
            vec![term("root", "Root"), term("p", "P")],
            vec![edge("e1", "root", "p", "")],
        );
        s.load(vec![term("root", "Root")], vec![]);
        assert!(s.get_term("p").is_none());
        assert_eq!(s.get_graph().nodes.len(), 1);
        assert!(s.get_graph().edges.is_empty());
    }
}
