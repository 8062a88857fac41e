//! This crate provides an in-memory store for [RDF] quads,
//! and a way to materialize them into a nested graph of resources,
//! analogous to compacted [JSON-LD].
//!
//! It re-exports the crates of the quadmesh workspace:
//! * [`term`] for terms, quads, namespaces and prefix maps,
//! * [`inmem`] for the [`QuadStore`](inmem::QuadStore) trait
//!   and the in-memory [`Dataset`](inmem::Dataset),
//! * [`resource`] for the materialization of a dataset into a resource [`Graph`](resource::graph::Graph).
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [JSON-LD]: https://www.w3.org/TR/json-ld11/
//!
//! # Getting Started
//!
//! ```
//! use quadmesh::prelude::*;
//! use quadmesh::term::ns::rdf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut dataset = Dataset::new();
//! dataset.factory_mut().context_mut().insert("ex", "http://example.org/")?;
//! let f = dataset.factory().clone();
//!
//! let alice = f.named_node("ex:alice")?;
//! let bob = f.named_node("ex:bob")?;
//! let knows = f.named_node("ex:knows")?;
//! dataset.add(f.triple(alice.clone(), f.named_node(rdf::type_)?, f.named_node("ex:Person")?)?);
//! dataset.add(f.triple(alice.clone(), knows.clone(), bob.clone())?);
//! dataset.add(f.triple(bob.clone(), f.named_node("ex:name")?, f.literal("Bob", None, None)?)?);
//!
//! // pattern matching
//! assert_eq!(dataset.matching(None, Some(&knows), None, None).len(), 1);
//!
//! // materialization
//! let graph = generate_graph(&dataset, &GraphOptions::default())?;
//! let alice = graph.get("ex:alice").unwrap();
//! let bob = graph.resolve(&alice.values("ex:knows")[0]).unwrap();
//! assert_eq!(bob.values("ex:name")[0].as_str(), Some("Bob"));
//! assert_eq!(graph.all_by_type(&["ex:Person"]).len(), 1);
//! # Ok(()) }
//! ```
#![deny(missing_docs)]

pub use quadmesh_inmem as inmem;
pub use quadmesh_resource as resource;
pub use quadmesh_term as term;

pub use quadmesh_resource::{generate_graph, materialize};

/// The types and traits needed by most applications.
pub mod prelude {
    pub use quadmesh_inmem::{Dataset, QuadStore};
    pub use quadmesh_resource::graph::{Graph, Node, Value};
    pub use quadmesh_resource::options::{GraphOptions, Prefixes};
    pub use quadmesh_resource::{generate_graph, GraphError};
    pub use quadmesh_term::factory::TermFactory;
    pub use quadmesh_term::prefix::PrefixMap;
    pub use quadmesh_term::{Quad, Term, TermError};
}

#[cfg(test)]
mod test;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
