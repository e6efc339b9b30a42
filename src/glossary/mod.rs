//! Glossary graph module: raw record decoding and core-subgraph curation.
//!
//! Terms and their relations come from a single curated JSON file. The store
//! keeps the connected component containing the anchor term and normalizes
//! repeated parallel-relation labels before anything is served.

mod dedupe;
pub mod loader;
mod store;
mod traversal;

pub use store::GlossaryStore;
pub use traversal::AnchorPolicy;

use serde::{Deserialize, Serialize};

/// 2D layout position of a node, as consumed by the graph viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A reference backing a term's definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    /// Empty when the source is offline material.
    #[serde(default)]
    pub url: String,
}

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Unique identifier, e.g. `shadow_dom`.
    pub id: String,
    pub title: String,
    pub definition: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub position: Position,
}

/// A directed, labeled relation between two term ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub animated: bool,
}

/// Display payload attached to a graph node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    pub label: String,
    pub definition: String,
    pub sources: Vec<Source>,
}

/// A renderable graph node derived from a term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

/// The curated core graph as served to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphResponse {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}
