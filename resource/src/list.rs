//! Reconstruction of lists from RDF collections
//! (`rdf:first` / `rdf:rest` ladders ending with `rdf:nil`).

use std::collections::HashSet;

use log::debug;

use crate::graph::{Field, Graph, NodeId, Value};

/// Walks RDF collections in a materialized [`Graph`].
///
/// The keys of `rdf:first` and `rdf:rest`, and the id of `rdf:nil`,
/// are given as they appear in the graph (i.e. possibly compacted).
///
/// A ladder is malformed when one of its nodes
/// does not have exactly one `rdf:first` and one `rdf:rest`,
/// when it loops back on itself,
/// or when it leads to something that is not a resource.
/// Malformed ladders are never collapsed.
#[derive(Clone, Debug)]
pub struct ListReconstructor<'g> {
    graph: &'g Graph,
    first: &'g str,
    rest: &'g str,
    nil: &'g str,
}

impl<'g> ListReconstructor<'g> {
    /// Constructor
    pub fn new(graph: &'g Graph, first: &'g str, rest: &'g str, nil: &'g str) -> Self {
        ListReconstructor {
            graph,
            first,
            rest,
            nil,
        }
    }

    fn handle_of(&self, value: &Value) -> Option<NodeId> {
        match value {
            Value::Node(h) => Some(*h),
            Value::Stub(id) => self.graph.handle(id),
            _ => None,
        }
    }

    /// Whether `value` refers to `rdf:nil` or to a resource with an `rdf:first` field.
    pub fn is_list_head(&self, value: &Value) -> bool {
        match self.handle_of(value) {
            Some(h) => {
                let node = self.graph.node(h);
                node.id() == self.nil || node.get(self.first).is_some()
            }
            None => false,
        }
    }

    /// Walk the ladder starting at `head`,
    /// and return its items and the handles of its nodes,
    /// or `None` if it is malformed.
    pub fn walk<'s>(&'s self, head: &'s Value) -> Option<(Vec<&'s Value>, Vec<NodeId>)> {
        let mut items = vec![];
        let mut chain = vec![];
        let mut visited = HashSet::new();
        let mut current = head;
        loop {
            let Some(h) = self.handle_of(current) else {
                debug!("list ladder leads to a non-resource: {current:?}");
                return None;
            };
            let node = self.graph.node(h);
            if node.id() == self.nil {
                return Some((items, chain));
            }
            if !visited.insert(h) {
                debug!("list ladder loops back on {}", node.id());
                return None;
            }
            let first = node.get(self.first).and_then(Field::single);
            let rest = node.get(self.rest).and_then(Field::single);
            let (Some(first), Some(rest)) = (first, rest) else {
                debug!("malformed list node {}", node.id());
                return None;
            };
            items.push(first);
            chain.push(h);
            current = rest;
        }
    }

    /// Collapse the ladder starting at `head` into a [`Value::List`],
    /// collapsing nested ladders as well.
    ///
    /// Return the list and the handles of all the ladder nodes it replaces,
    /// or `None` if the ladder is malformed.
    /// Nested ladders that are malformed are kept as they are.
    pub fn collapse(&self, head: &Value) -> Option<(Value, Vec<NodeId>)> {
        self.collapse_in(head, &mut vec![])
    }

    fn collapse_in(&self, head: &Value, active: &mut Vec<NodeId>) -> Option<(Value, Vec<NodeId>)> {
        let (items, mut chain) = self.walk(head)?;
        if chain.iter().any(|h| active.contains(h)) {
            debug!("list ladder is nested in itself");
            return None;
        }
        let depth = active.len();
        active.extend(&chain);
        let mut nested_chains = vec![];
        let items = items
            .into_iter()
            .map(|item| {
                if self.is_list_head(item) {
                    if let Some((list, nested)) = self.collapse_in(item, active) {
                        nested_chains.extend(nested);
                        return list;
                    }
                }
                item.clone()
            })
            .collect();
        active.truncate(depth);
        chain.extend(nested_chains);
        Some((Value::List(items), chain))
    }
}
