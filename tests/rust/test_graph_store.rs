use super::*;
use crate::graph::types::{PedigreeDocument, PedigreeEdge, VarietyNode};
use pretty_assertions::assert_eq;

fn make_graph(varieties: &[&str], nodes: &[&str], edges: &[(&str, &str)]) -> PedigreeGraph {
    PedigreeGraph::from_document(PedigreeDocument {
        varieties: varieties.iter().map(|v| v.to_string()).collect(),
        nodes: nodes.iter().map(|n| VarietyNode::new(*n)).collect(),
        edges: edges.iter().map(|(s, t)| PedigreeEdge::new(*s, *t)).collect(),
    })
}

// ── Construction ──────────────────────────────────────────────────────────

#[test]
fn test_empty_graph() {
    let g = make_graph(&[], &[], &[]);
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.varieties().is_empty());
    assert!(g.is_dag());
}

#[test]
fn test_nodes_and_edges_loaded() {
    let g = make_graph(
        &["A", "B", "C"],
        &["A", "B", "C"],
        &[("A", "C"), ("B", "C")],
    );
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert!(g.node("A").is_some());
    assert!(g.node("Z").is_none());
}

#[test]
fn test_duplicate_node_keeps_first_record() {
    let g = PedigreeGraph::from_document(PedigreeDocument {
        varieties: vec!["A".into()],
        nodes: vec![
            VarietyNode::with_species("A", "Vitis riparia"),
            VarietyNode::with_species("A", "Vitis vinifera"),
        ],
        edges: vec![],
    });
    assert_eq!(g.node_count(), 1);
    assert_eq!(
        g.node("A").and_then(|n| n.data.species.as_deref()),
        Some("Vitis riparia")
    );
}

#[test]
fn test_repeated_edges_collapse() {
    let g = make_graph(&["A", "B"], &["A", "B"], &[("A", "B"), ("A", "B")]);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.parents("B"), vec!["A"]);
}

#[test]
fn test_varieties_deduplicated_in_order() {
    let g = make_graph(&["B", "A", "B"], &[], &[]);
    assert_eq!(g.varieties(), &["B".to_string(), "A".to_string()]);
    assert!(g.contains_variety("A"));
    assert!(!g.contains_variety("C"));
}

// ── Dangling endpoints ────────────────────────────────────────────────────

#[test]
fn test_dangling_parent_is_listed_but_has_no_record() {
    let g = make_graph(&["Child"], &["Child"], &[("Ghost", "Child")]);
    assert_eq!(g.parents("Child"), vec!["Ghost"]);
    assert!(g.node("Ghost").is_none());
    // placeholders do not count as nodes
    assert_eq!(g.node_count(), 1);
    assert!(g.contains_id("Ghost"));
    assert!(!g.contains_id("Nobody"));
}

// ── Topology queries ──────────────────────────────────────────────────────

#[test]
fn test_parents_follow_document_order() {
    let g = make_graph(
        &["C"],
        &["A", "B", "C"],
        &[("B", "C"), ("A", "C")],
    );
    assert_eq!(g.parents("C"), vec!["B", "A"]);
}

#[test]
fn test_children() {
    let g = make_graph(
        &["A"],
        &["A", "B", "C"],
        &[("A", "B"), ("A", "C")],
    );
    assert_eq!(g.children("A"), vec!["B", "C"]);
    assert!(g.children("B").is_empty());
}

#[test]
fn test_queries_on_missing_id() {
    let g = make_graph(&[], &[], &[]);
    assert!(g.parents("X").is_empty());
    assert!(g.children("X").is_empty());
}

#[test]
fn test_edges_in_document_order() {
    let g = make_graph(
        &[],
        &["A", "B", "C"],
        &[("B", "C"), ("A", "C")],
    );
    assert_eq!(
        g.edges(),
        vec![PedigreeEdge::new("B", "C"), PedigreeEdge::new("A", "C")]
    );
}

#[test]
fn test_is_dag_false_with_cycle() {
    let g = make_graph(&[], &["A", "B"], &[("A", "B"), ("B", "A")]);
    assert!(!g.is_dag());
}

// ── JSON loading ──────────────────────────────────────────────────────────

#[test]
fn test_from_json_str() {
    let g = PedigreeGraph::from_json_str(
        r#"{"varieties": ["A"], "nodes": [{"id": "A", "data": {}}], "edges": []}"#,
    )
    .unwrap();
    assert_eq!(g.node_count(), 1);
}

#[test]
fn test_from_json_str_malformed() {
    let err = PedigreeGraph::from_json_str(r#"{"varieties": []}"#).unwrap_err();
    assert!(matches!(err, PedigreeError::Document(_)));
    assert!(err.to_string().contains("malformed pedigree document"));
}

#[test]
fn test_from_reader() {
    let src = br#"{"varieties": [], "nodes": [{"id": "A"}], "edges": [{"source": "B", "target": "A"}]}"#;
    let g = PedigreeGraph::from_reader(&src[..]).unwrap();
    assert_eq!(g.parents("A"), vec!["B"]);
}

#[test]
fn test_from_path() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/acadie.json");
    let g = PedigreeGraph::from_path(&path).unwrap();
    assert_eq!(g.parents("Acadie Blanc"), vec!["Cascade", "SV 14-287"]);
}

#[test]
fn test_from_path_missing_file() {
    let err = PedigreeGraph::from_path("/nonexistent/pedigree.json").unwrap_err();
    assert!(matches!(err, PedigreeError::Io(_)));
    assert!(err.to_string().starts_with("cannot read pedigree document"));
}
