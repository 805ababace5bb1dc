//! Scenario document - the graph editor's serialized form.
//!
//! ```json
//! { "elements": [
//!     { "group": "nodes", "data": { "id": "DP" }, "position": { "x": 10, "y": 20 } },
//!     { "group": "edges", "data": { "id": "DP_Ic", "source": "DP", "target": "Ic", "relation": "FH" } }
//! ] }
//! ```
//!
//! Analysis only consumes the `data.id` of node elements. Everything else is
//! kept so that a stored document round-trips unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{HazardCode, HazardGraph};
use crate::domain::foundation::ValidationError;

/// Element kind in the editor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementGroup {
    Nodes,
    Edges,
    #[serde(other)]
    Other,
}

/// Payload of a graph element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Propagation relation on edges ("Ft", "FH", "Pj", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canvas position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Editor styling. Never read by the analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(
        rename = "background-color",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(rename = "line-color", default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
}

/// One node or edge of the editor graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphElement {
    pub group: ElementGroup,
    #[serde(default)]
    pub data: ElementData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
}

impl GraphElement {
    /// Creates a bare node element.
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            group: ElementGroup::Nodes,
            data: ElementData {
                id: Some(id.into()),
                ..Default::default()
            },
            position: None,
            style: None,
        }
    }

    /// Creates an edge element; its id follows the editor's `source_target` form.
    pub fn edge(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: Option<String>,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            group: ElementGroup::Edges,
            data: ElementData {
                id: Some(format!("{}_{}", source, target)),
                source: Some(source),
                target: Some(target),
                relation,
                extra: Map::new(),
            },
            position: None,
            style: None,
        }
    }

    pub fn is_node(&self) -> bool {
        self.group == ElementGroup::Nodes
    }

    pub fn is_edge(&self) -> bool {
        self.group == ElementGroup::Edges
    }
}

/// Accepts both `{ "elements": [...] }` and a bare element array.
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Wrapped { elements: Vec<GraphElement> },
    Bare(Vec<GraphElement>),
}

impl From<DocumentRepr> for ScenarioDocument {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Wrapped { elements } | DocumentRepr::Bare(elements) => {
                ScenarioDocument { elements }
            }
        }
    }
}

/// A complete scenario graph as saved by the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentRepr")]
pub struct ScenarioDocument {
    pub elements: Vec<GraphElement>,
}

impl ScenarioDocument {
    /// Creates a document from its elements.
    pub fn new(elements: Vec<GraphElement>) -> Self {
        Self { elements }
    }

    /// Parses the editor's JSON.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("document", e.to_string()))
    }

    /// Serializes the document back to JSON.
    pub fn to_json(&self) -> Result<String, ValidationError> {
        serde_json::to_string(self)
            .map_err(|e| ValidationError::invalid_format("document", e.to_string()))
    }

    /// Node ids in document order. Nodes without a usable id are skipped.
    pub fn node_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|e| e.is_node())
            .filter_map(|e| e.data.id.as_deref())
            .filter(|id| !id.trim().is_empty())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_node()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_edge()).count()
    }

    /// Builds the hazard graph consumed by the analysis.
    pub fn hazard_graph(&self) -> HazardGraph {
        let codes = self
            .node_ids()
            .into_iter()
            .filter_map(|id| HazardCode::new(id).ok())
            .collect();
        HazardGraph::new(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "elements": [
            { "group": "nodes", "data": { "id": "DP" }, "position": { "x": 10.0, "y": 20.0 },
              "style": { "shape": "ellipse", "background-color": "#0074D9" } },
            { "group": "nodes", "data": { "id": "Ic" } },
            { "group": "edges", "data": { "id": "DP_Ic", "source": "DP", "target": "Ic", "relation": "FH" },
              "style": { "line-color": "#333" } },
            { "group": "nodes", "data": { "id": "Dg", "customStyle": { "shape": "diamond" } } }
        ]
    }"##;

    #[test]
    fn parses_editor_document() {
        let doc = ScenarioDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.elements.len(), 4);
        assert_eq!(doc.node_count(), 3);
        assert_eq!(doc.edge_count(), 1);
    }

    #[test]
    fn node_ids_keep_document_order_and_ignore_edges() {
        let doc = ScenarioDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.node_ids(), vec!["DP", "Ic", "Dg"]);
    }

    #[test]
    fn accepts_bare_element_array() {
        let json = r#"[ { "group": "nodes", "data": { "id": "TO" } } ]"#;
        let doc = ScenarioDocument::from_json(json).unwrap();
        assert_eq!(doc.node_ids(), vec!["TO"]);
    }

    #[test]
    fn skips_nodes_without_id() {
        let json = r#"{ "elements": [
            { "group": "nodes", "data": {} },
            { "group": "nodes", "data": { "id": " " } },
            { "group": "nodes", "data": { "id": "GV" } }
        ] }"#;
        let doc = ScenarioDocument::from_json(json).unwrap();
        assert_eq!(doc.node_ids(), vec!["GV"]);
        assert_eq!(doc.hazard_graph().len(), 1);
    }

    #[test]
    fn unknown_groups_are_tolerated() {
        let json = r#"{ "elements": [ { "group": "compound", "data": { "id": "x" } } ] }"#;
        let doc = ScenarioDocument::from_json(json).unwrap();
        assert_eq!(doc.elements[0].group, ElementGroup::Other);
        assert!(doc.node_ids().is_empty());
    }

    #[test]
    fn rejects_non_graph_json() {
        let err = ScenarioDocument::from_json(r#"{ "nodes": 3 }"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn extra_data_and_style_survive_reserialization() {
        let doc = ScenarioDocument::from_json(SAMPLE).unwrap();
        let json = doc.to_json().unwrap();
        let reparsed = ScenarioDocument::from_json(&json).unwrap();
        assert_eq!(reparsed, doc);
        assert!(json.contains("customStyle"));
        assert!(json.contains("background-color"));
    }

    #[test]
    fn edge_builder_uses_editor_id_scheme() {
        let edge = GraphElement::edge("MF", "ANC", Some("EH".to_string()));
        assert_eq!(edge.data.id.as_deref(), Some("MF_ANC"));
        assert!(edge.is_edge());
    }

    #[test]
    fn hazard_graph_follows_node_order() {
        let doc = ScenarioDocument::from_json(SAMPLE).unwrap();
        let graph = doc.hazard_graph();
        let codes: Vec<_> = graph.nodes().iter().map(HazardCode::as_str).collect();
        assert_eq!(codes, vec!["DP", "Ic", "Dg"]);
    }
}
