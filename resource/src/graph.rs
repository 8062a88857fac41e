//! This module defines the type [`Graph`], the result of a materialization,
//! and the types of its content ([`Node`], [`Field`], [`Value`]).

mod _graph;
pub use _graph::*;
mod _node;
pub use _node::*;
