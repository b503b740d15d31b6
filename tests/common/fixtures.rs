//! Flow document fixtures

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{json, Value};

/// A -> B -> C, C references nothing
pub fn chain_flow() -> Value {
    json!([
        { "id": "A", "type": "inject", "wires": [["B"]] },
        { "id": "B", "type": "function", "wires": [["C"]] },
        { "id": "C", "type": "debug", "wires": [] }
    ])
}

/// A Node-RED style flow: a tab, a broker config node referenced from a
/// nested field, and a second output group on the switch
pub fn node_red_flow() -> Value {
    json!([
        { "id": "tab1", "type": "tab", "label": "Flow 1" },
        { "id": "in", "type": "mqtt in", "z": "tab1", "broker": "broker1", "wires": [["sw"]] },
        { "id": "sw", "type": "switch", "z": "tab1", "wires": [["out"], ["log"]] },
        { "id": "out", "type": "mqtt out", "z": "tab1", "broker": "broker1", "wires": [] },
        { "id": "log", "type": "debug", "z": "tab1", "wires": [] },
        { "id": "broker1", "type": "mqtt-broker", "credentials": { "user": "in" } }
    ])
}

/// Random flow of `n` nodes; each node wires to each other node with
/// probability `density`, spread over two wire groups, and occasionally
/// mentions a node in a nested field
pub fn random_flow(rng: &mut StdRng, n: usize, density: f64) -> Value {
    let ids: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    let records: Vec<Value> = ids
        .iter()
        .map(|id| {
            let mut primary = Vec::new();
            let mut secondary = Vec::new();
            for target in &ids {
                if rng.gen_bool(density) {
                    if rng.gen_bool(0.7) {
                        primary.push(target.clone());
                    } else {
                        secondary.push(target.clone());
                    }
                }
            }
            let mention = if rng.gen_bool(density / 2.0) {
                Value::String(ids[rng.gen_range(0..n)].clone())
            } else {
                Value::Null
            };
            json!({
                "id": id,
                "wires": [primary, secondary],
                "props": { "ref": mention }
            })
        })
        .collect();
    Value::Array(records)
}
