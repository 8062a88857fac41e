//! This crate is part of [quadmesh],
//! an in-memory RDF quad store with graph materialization.
//!
//! It provides the [`QuadStore`] trait, with set algebra defined on top of its primitives,
//! and [`Dataset`], its in-memory implementation.
//!
//! [quadmesh]: https://docs.rs/quadmesh/latest/quadmesh/
#![deny(missing_docs)]

mod _store;
pub use _store::*;
pub mod dataset;
pub use dataset::Dataset;
pub mod index;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
