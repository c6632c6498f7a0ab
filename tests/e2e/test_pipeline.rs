//! End-to-end tests for the public library API, driven by the JSON fixtures.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use vitis_pedigree::{
    ExplorerConfig, ExplorerState, ParentWeighting, PedigreeError, PedigreeGraph, Species,
    calculate_species_composition, explore, extract_subgraph,
};

fn fixture(name: &str) -> PedigreeGraph {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let text = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    PedigreeGraph::from_json_str(&text).unwrap()
}

fn ids(view: &vitis_pedigree::PedigreeView) -> Vec<&str> {
    view.nodes.iter().map(|n| n.node.id.as_str()).collect()
}

// ─── Loading ─────────────────────────────────────────────────────────────────

#[test]
fn test_load_acadie() {
    let g = fixture("acadie.json");
    assert_eq!(g.varieties(), ["Cascade", "SV 14-287", "Acadie Blanc"]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
    let cascade = g.node("Cascade").unwrap();
    assert_eq!(cascade.data.vivc_number.as_deref(), Some("2286"));
}

#[test]
fn test_missing_edges_array_is_rejected() {
    let text = fs::read_to_string(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/missing_edges.json"),
    )
    .unwrap();
    match PedigreeGraph::from_json_str(&text) {
        Err(PedigreeError::Document(_)) => {}
        other => panic!("expected a document error, got {:?}", other.map(|g| g.node_count())),
    }
}

#[test]
fn test_duplicate_record_keeps_first() {
    let g = fixture("defects.json");
    assert_eq!(g.node("Seedling").unwrap().data.species, None);
    assert_eq!(g.parents("Seedling"), vec!["Loop A", "Ghost"]);
}

// ─── Explore ─────────────────────────────────────────────────────────────────

#[test]
fn test_explore_acadie_blanc() {
    let g = fixture("acadie.json");
    let view = explore(&g, &ExplorerState::new("Acadie Blanc"), &ExplorerConfig::default());
    assert_eq!(ids(&view), vec!["Acadie Blanc", "Cascade", "SV 14-287"]);
    assert_eq!(view.generations, 2);

    let root = &view.nodes[0].node;
    assert!(root.is_selected);
    assert_eq!(root.data.country.as_deref(), Some("Canada"));
    let shares: Vec<(Species, f64)> = root
        .species_composition
        .iter()
        .map(|s| (s.species, s.proportion))
        .collect();
    assert_eq!(shares, vec![(Species::Riparia, 0.5), (Species::Vinifera, 0.5)]);
}

#[test]
fn test_explore_diamond_both_modes() {
    let g = fixture("diamond.json");
    let config = ExplorerConfig::default();

    let merged = explore(&g, &ExplorerState::new("Root"), &config);
    assert_eq!(merged.nodes.len(), 6);
    assert_eq!(merged.edges.len(), 6);
    assert_eq!(merged.generations, 3);

    let duplicated = explore(&g, &ExplorerState::new("Root").with_duplicates(true), &config);
    assert_eq!(
        ids(&duplicated),
        vec!["Root", "Left", "Shared", "Wild", "Right", "Shared#1", "Fox"]
    );
    assert_eq!(duplicated.edges.len(), 6);
    let clone = &duplicated.nodes[5];
    assert!(clone.node.is_duplicate);
    assert_eq!(clone.node.variety, "Shared");
    assert_eq!(clone.node.level, 2);
}

#[test]
fn test_diamond_composition() {
    let g = fixture("diamond.json");
    let c = calculate_species_composition(&g, "Root");
    assert_eq!(c.get(Species::Riparia), 0.5);
    assert_eq!(c.get(Species::Vinifera), 0.25);
    assert_eq!(c.get(Species::Labrusca), 0.25);
    let order: Vec<Species> = c.shares().iter().map(|s| s.species).collect();
    assert_eq!(order, vec![Species::Riparia, Species::Labrusca, Species::Vinifera]);
    // clone suffix is ignored
    assert_eq!(calculate_species_composition(&g, "Shared#1"), calculate_species_composition(&g, "Shared"));
}

#[test]
fn test_hover_in_duplicated_view() {
    let g = fixture("diamond.json");
    let state = ExplorerState::new("Root")
        .with_duplicates(true)
        .with_hover(Some("Shared#1".into()));
    let view = explore(&g, &state, &ExplorerConfig::default());
    let lit: Vec<&str> = view
        .nodes
        .iter()
        .filter(|n| n.node.highlighted)
        .map(|n| n.node.id.as_str())
        .collect();
    assert_eq!(lit, vec!["Shared", "Shared#1"]);
    let animated: Vec<&str> = view
        .edges
        .iter()
        .filter(|e| e.style.animated)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(animated, vec!["Shared->Left", "Shared#1->Right"]);
}

#[test]
fn test_defects_are_tolerated() {
    let g = fixture("defects.json");
    for duplicate_mode in [false, true] {
        let s = extract_subgraph(&g, "Seedling", duplicate_mode);
        let ids: Vec<&str> = s.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["Seedling", "Loop A", "Loop B"]);
        assert_eq!(s.edges.len(), 2);
    }
    let c = calculate_species_composition(&g, "Seedling");
    assert!(c.total() <= 1.0);
    assert!(c.iter().all(|(species, _)| species == Species::Unknown));
}

#[test]
fn test_unknown_root_gives_empty_view() {
    let g = fixture("acadie.json");
    let view = explore(&g, &ExplorerState::new("Vidal"), &ExplorerConfig::default());
    assert!(view.is_empty());
}

#[test]
fn test_even_split_weighting() {
    let g = fixture("acadie.json");
    let config = ExplorerConfig::from_json_str(r#"{ "parent_weighting": "even_split" }"#).unwrap();
    assert_eq!(config.parent_weighting, ParentWeighting::EvenSplit);
    let view = explore(&g, &ExplorerState::new("Acadie Blanc"), &config);
    let total: f64 = view.nodes[0]
        .node
        .species_composition
        .iter()
        .map(|s| s.proportion)
        .sum();
    assert_eq!(total, 1.0);
}

#[test]
fn test_config_spacing_reaches_layout() {
    let g = fixture("acadie.json");
    let config = ExplorerConfig {
        column_width: 100.0,
        row_height: 20.0,
        ..ExplorerConfig::default()
    };
    let view = explore(&g, &ExplorerState::new("Acadie Blanc"), &config);
    assert_eq!(view.nodes[1].position.x, 100.0);
    assert_eq!(view.nodes[1].position.y, -10.0);
    assert_eq!(view.nodes[2].position.y, 10.0);
}
