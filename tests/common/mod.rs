//! Common test utilities for modsplit integration tests
//!
//! Flow fixtures, random document generation and brute-force oracles for
//! checking enumeration results.

#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::{chain_flow, node_red_flow, random_flow};
pub use oracle::{brute_force, is_connected, sorted_sets};
