//! Graph Summarizer - Reduces a node list to an analysis row.

use std::collections::BTreeSet;

use super::AnalysisRow;
use crate::domain::hazard::{HazardCatalog, HazardCode, Zone};

/// Computes nature, domino effects and impacted zones of a node list.
pub struct GraphSummarizer<'c> {
    catalog: &'c HazardCatalog,
}

impl<'c> GraphSummarizer<'c> {
    pub fn new(catalog: &'c HazardCatalog) -> Self {
        Self { catalog }
    }

    /// Summarizes `nodes` under `scenario_label`.
    ///
    /// # Algorithm
    /// - nature: catalog nature of the FIRST node only
    /// - domino effects: node count, minus one when the damage node "Dg" is present
    /// - impacted zones: number of distinct zones containing at least one node
    ///
    /// # Edge Cases
    /// - Empty input: returns [`AnalysisRow::no_data`]
    /// - Unknown codes: nature `Unknown`, no zone membership
    pub fn summarize(&self, nodes: &[HazardCode], scenario_label: &str) -> AnalysisRow {
        let Some(first) = nodes.first() else {
            return AnalysisRow::no_data(scenario_label);
        };

        let node_count = nodes.len() as u32;
        let domino_effects = if nodes.iter().any(HazardCode::is_damage) {
            node_count - 1
        } else {
            node_count
        };

        AnalysisRow {
            scenario_label: scenario_label.to_string(),
            nature: self.catalog.nature_of(first.as_str()),
            domino_effects,
            impacted_zones: self.impacted_zones(nodes).len() as u32,
            node_count,
        }
    }

    /// Distinct zones touched by the nodes. A node in several zones counts once per zone.
    pub fn impacted_zones(&self, nodes: &[HazardCode]) -> BTreeSet<Zone> {
        nodes
            .iter()
            .flat_map(|node| self.catalog.zones_of(node.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hazard::NatureCategory;
    use proptest::prelude::*;

    fn codes(ids: &[&str]) -> Vec<HazardCode> {
        ids.iter().map(|id| HazardCode::new(*id).unwrap()).collect()
    }

    fn summarize(ids: &[&str]) -> AnalysisRow {
        let catalog = HazardCatalog::standard();
        GraphSummarizer::new(&catalog).summarize(&codes(ids), "test")
    }

    #[test]
    fn empty_input_yields_no_data_row() {
        let row = summarize(&[]);
        assert!(!row.has_data());
        assert_eq!(row.nature, NatureCategory::Unknown);
        assert_eq!(row.scenario_label, "test");
    }

    #[test]
    fn valve_and_shock_touch_two_zones() {
        let row = summarize(&["DV", "Ch"]);
        assert_eq!(row.impacted_zones, 2);
    }

    #[test]
    fn product_spill_alone_touches_three_zones() {
        let row = summarize(&["DP"]);
        assert_eq!(row.impacted_zones, 3);
    }

    #[test]
    fn nature_is_taken_from_first_node_only() {
        // Intentional: the scenario's nature is its initiating event's nature,
        // not an aggregate over the graph.
        let row = summarize(&["Ic", "DV"]);
        assert_eq!(row.nature, NatureCategory::Human);

        let row = summarize(&["DV", "Ic"]);
        assert_eq!(row.nature, NatureCategory::Technical);
    }

    #[test]
    fn unknown_first_node_gives_unknown_nature() {
        let row = summarize(&["??", "DV"]);
        assert_eq!(row.nature, NatureCategory::Unknown);
        assert_eq!(row.impacted_zones, 1);
    }

    #[test]
    fn damage_node_is_not_a_domino_step() {
        assert_eq!(summarize(&["DP", "Ic", "Dg"]).domino_effects, 2);
        assert_eq!(summarize(&["DP", "Ic", "Ex"]).domino_effects, 3);
        assert_eq!(summarize(&["Dg"]).domino_effects, 0);
    }

    #[test]
    fn multi_zone_nodes_count_each_zone_once() {
        // DP, Ic, Ex, Dg all live in SS1..SS3
        let row = summarize(&["DP", "Ic", "Ex", "Dg"]);
        assert_eq!(row.impacted_zones, 3);

        let row = summarize(&["MB", "TO"]);
        assert_eq!(row.impacted_zones, 3); // SS2, SS4, SS5
    }

    #[test]
    fn all_zones_reachable() {
        let row = summarize(&["MF", "ANC", "MB", "DP", "TO"]);
        assert_eq!(row.impacted_zones, 5);
        assert_eq!(row.nature, NatureCategory::Human);
    }

    #[test]
    fn summarizing_twice_is_identical() {
        let first = summarize(&["TO", "GV", "DN", "FC", "DP", "Dg"]);
        let second = summarize(&["TO", "GV", "DN", "FC", "DP", "Dg"]);
        assert_eq!(first, second);
    }

    const VOCABULARY: &[&str] = &[
        "MF", "DV", "DN", "DP", "Ic", "Ex", "Dg", "Ch", "MB", "FC", "FS", "ANC", "TO", "GV", "Zz",
    ];

    fn node_list() -> impl Strategy<Value = Vec<&'static str>> {
        proptest::sample::subsequence(VOCABULARY, 1..=VOCABULARY.len()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn domino_effects_discount_damage_exactly_once(ids in node_list()) {
            let row = summarize(&ids);
            let expected = if ids.contains(&"Dg") { ids.len() - 1 } else { ids.len() };
            prop_assert_eq!(row.domino_effects as usize, expected);
        }

        #[test]
        fn impacted_zones_is_union_of_intersecting_zones(ids in node_list()) {
            let catalog = HazardCatalog::standard();
            let expected = Zone::ALL
                .iter()
                .filter(|zone| catalog.members(**zone).any(|m| ids.contains(&m.as_str())))
                .count();
            prop_assert_eq!(summarize(&ids).impacted_zones as usize, expected);
        }

        #[test]
        fn nature_follows_first_node(ids in node_list()) {
            let catalog = HazardCatalog::standard();
            prop_assert_eq!(summarize(&ids).nature, catalog.nature_of(ids[0]));
        }

        #[test]
        fn summarize_is_deterministic(ids in node_list()) {
            prop_assert_eq!(summarize(&ids), summarize(&ids));
        }
    }
}
