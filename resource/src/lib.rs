//! This crate is part of [quadmesh],
//! an in-memory RDF quad store with graph materialization.
//!
//! It materializes a flat set of quads into a nested resource [`Graph`](graph::Graph),
//! analogous to compacted JSON-LD:
//! every subject becomes a resource whose fields hold literal values
//! or references to other resources of the same graph,
//! RDF collections become lists,
//! and IRIs are compacted through a prefix map.
//!
//! ```
//! # use quadmesh_inmem::{Dataset, QuadStore};
//! # use quadmesh_resource::{generate_graph, options::GraphOptions};
//! # use quadmesh_term::{Quad, Term};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut dataset = Dataset::new();
//! dataset.factory_mut().context_mut().insert("ex", "http://example.org/")?;
//! let f = dataset.factory().clone();
//! dataset.add(f.triple(f.named_node("ex:A")?, f.named_node("ex:p")?, Term::simple_literal("v"))?);
//!
//! let graph = generate_graph(&dataset, &GraphOptions::default())?;
//! assert_eq!(
//!     graph.to_json(),
//!     serde_json::json!({"ex:A": {"@id": "ex:A", "ex:p": "v"}}),
//! );
//! # Ok(()) }
//! ```
//!
//! [quadmesh]: https://docs.rs/quadmesh/latest/quadmesh/
#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod _generate;
pub use _generate::*;

pub mod compactor;
pub mod graph;
pub mod list;
pub mod options;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
