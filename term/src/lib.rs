//! This crate is part of [quadmesh],
//! an in-memory RDF quad store with graph materialization.
//!
//! It defines the RDF terms and quads manipulated by the rest of the workspace:
//! * [`Term`], an enum covering named nodes, blank nodes, literals, variables
//!   and the default graph marker;
//! * [`Quad`], built from terms that are acceptable at their [`Position`];
//! * [`TermFactory`](factory::TermFactory), resolving prefixed names through a
//!   [`PrefixMap`](prefix::PrefixMap);
//! * the standard [namespaces](ns).
//!
//! [quadmesh]: https://docs.rs/quadmesh/latest/quadmesh/
#![deny(missing_docs)]

mod _display;
mod _error;
pub use _error::*;
mod _quad;
pub use _quad::*;
mod _regex;
pub use _regex::*;
mod _term;
pub use _term::*;

pub mod factory;
pub mod ns;
pub mod prefix;
