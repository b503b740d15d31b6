//! Graph construction tests with flow-document fixtures

use serde_json::{json, Value};

/// Fixture: a small flow with wires, nested config references and a
/// record that is not a node
fn flow_fixture() -> Value {
    json!([
        {
            "id": "inject",
            "type": "inject",
            "wires": [["func"], ["debug"]]
        },
        {
            "id": "func",
            "type": "function",
            "z": "tab",
            "settings": { "broker": "mqtt", "extra": [{ "target": "debug" }] },
            "wires": [["debug"]]
        },
        { "id": "debug", "type": "debug", "wires": [] },
        { "id": "mqtt", "type": "mqtt-broker" },
        { "id": "tab", "type": "tab" },
        { "type": "comment", "info": "no id, not a node" },
        "stray string"
    ])
}

#[cfg(test)]
mod construction_tests {
    use super::*;
    use crate::graph::{Graph, GraphBuilder};

    fn index(graph: &Graph, id: &str) -> usize {
        graph.index_of(id).unwrap()
    }

    #[test]
    fn nodes_keep_document_order() {
        let graph = GraphBuilder::new().build(&flow_fixture());
        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["inject", "func", "debug", "mqtt", "tab"]);
        assert_eq!(graph.skipped_records(), 2);
    }

    #[test]
    fn payload_is_the_original_record() {
        let fixture = flow_fixture();
        let graph = GraphBuilder::new().build(&fixture);
        assert_eq!(graph.node(1).unwrap().payload, fixture[1]);
    }

    #[test]
    fn non_array_document_yields_empty_graph() {
        for doc in [json!({ "id": "a" }), json!("a"), json!(null), json!([])] {
            let graph = GraphBuilder::new().build(&doc);
            assert!(graph.is_empty());
            assert_eq!(graph.edge_count(), 0);
        }
    }

    #[test]
    fn non_string_id_is_skipped() {
        let doc = json!([{ "id": 7 }, { "id": ["a"] }, { "name": "a" }, { "id": "a" }]);
        let graph = GraphBuilder::new().build(&doc);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.skipped_records(), 3);
        assert_eq!(graph.index_of("a"), Some(0));
    }

    #[test]
    fn first_wire_group_only_by_default() {
        let graph = GraphBuilder::new().ignore_fields(["z"]).build(&flow_fixture());
        let inject = index(&graph, "inject");
        assert_eq!(graph.directed(inject), &[index(&graph, "func")]);
    }

    #[test]
    fn all_wire_groups_when_enabled() {
        let graph = GraphBuilder::new()
            .ignore_fields(["z"])
            .use_all_wires(true)
            .build(&flow_fixture());
        let inject = index(&graph, "inject");
        assert_eq!(
            graph.directed(inject),
            &[index(&graph, "func"), index(&graph, "debug")]
        );
    }

    #[test]
    fn incidental_references_follow_field_order() {
        let graph = GraphBuilder::new().build(&flow_fixture());
        let func = index(&graph, "func");
        // wire first, then `z`, then nested settings
        assert_eq!(
            graph.directed(func),
            &[index(&graph, "debug"), index(&graph, "tab"), index(&graph, "mqtt")]
        );
    }

    #[test]
    fn wire_and_field_references_share_dedup() {
        // settings.extra[0].target repeats the wire target and adds no edge
        let graph = GraphBuilder::new().ignore_fields(["z"]).build(&flow_fixture());
        let func = index(&graph, "func");
        assert_eq!(graph.directed(func), &[index(&graph, "debug"), index(&graph, "mqtt")]);
    }

    #[test]
    fn ignored_field_skips_whole_subtree() {
        let graph = GraphBuilder::new()
            .ignore_fields(["z", "settings"])
            .build(&flow_fixture());
        let func = index(&graph, "func");
        assert_eq!(graph.directed(func), &[index(&graph, "debug")]);
    }

    #[test]
    fn ignored_field_applies_at_any_depth() {
        let doc = json!([
            { "id": "a", "outer": { "skip": "b", "keep": ["c"] } },
            { "id": "b" },
            { "id": "c" }
        ]);
        let graph = GraphBuilder::new().ignore_fields(["skip"]).build(&doc);
        assert_eq!(graph.directed(0), &[2]);
    }

    #[test]
    fn nested_id_and_wires_fields_are_not_scanned() {
        let doc = json!([
            { "id": "a", "inner": { "id": "b", "wires": [["c"]], "other": "d" } },
            { "id": "b" },
            { "id": "c" },
            { "id": "d" }
        ]);
        let graph = GraphBuilder::new().build(&doc);
        assert_eq!(graph.directed(0), &[3]);
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let graph = GraphBuilder::new().use_all_wires(true).build(&flow_fixture());
        for i in 0..graph.len() {
            for &j in graph.undirected(i) {
                assert!(graph.undirected(j).contains(&i), "{} - {} not symmetric", i, j);
            }
            for &j in graph.directed(i) {
                assert!(j < graph.len());
                assert!(graph.undirected(i).contains(&j));
            }
        }
    }

    #[test]
    fn mutual_references_produce_two_directed_edges() {
        let doc = json!([
            { "id": "a", "wires": [["b"]] },
            { "id": "b", "wires": [["a"]] }
        ]);
        let graph = GraphBuilder::new().build(&doc);
        assert_eq!(graph.directed(0), &[1]);
        assert_eq!(graph.directed(1), &[0]);
        assert_eq!(graph.undirected(0), &[1, 1]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let doc = json!([{ "id": "a", "wires": [["ghost"]], "ref": "nowhere" }]);
        let graph = GraphBuilder::new().build(&doc);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let doc = json!([
            { "id": "a", "v": 1 },
            { "id": "b", "wires": [["a"]] },
            { "id": "a", "v": 2 }
        ]);
        let graph = GraphBuilder::new().build(&doc);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.duplicate_ids(), &["a".to_string()]);
        assert_eq!(graph.node(0).unwrap().payload["v"], 1);
        for (i, node) in graph.nodes().iter().enumerate() {
            assert_eq!(graph.index_of(&node.id), Some(i));
        }
        assert_eq!(graph.directed(1), &[0]);
    }
}
