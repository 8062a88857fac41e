use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use super::*;

/// A materialized resource graph:
/// an ordered mapping from identifiers to [`Node`]s.
///
/// All the resources of a materialization run live in an arena,
/// and reference each other through [`NodeId`] handles,
/// so that cycles in the data are represented without copies.
/// Only some of them are top-level entries of the graph
/// (see [`GraphOptions::blanks`](crate::options::GraphOptions::blanks));
/// the others are only reachable through references.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    top: IndexMap<String, NodeId>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get the handle of the record with the given id, allocating it if necessary.
    ///
    /// Return `true` as the second element iff the record was allocated.
    pub(crate) fn ensure_record(&mut self, id: &str) -> (NodeId, bool) {
        if let Some(h) = self.index.get(id) {
            return (*h, false);
        }
        let h = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id.to_string()));
        self.index.insert(id.to_string(), h);
        (h, true)
    }

    /// Make the record `h` a top-level entry, if it is not already.
    ///
    /// Return `true` iff it was not.
    pub(crate) fn promote(&mut self, h: NodeId) -> bool {
        let id = &self.nodes[h.0].id;
        if self.top.contains_key(id) {
            false
        } else {
            self.top.insert(id.clone(), h);
            true
        }
    }

    /// Remove the record `h` from the top-level entries, if it is one.
    pub(crate) fn demote(&mut self, h: NodeId) -> bool {
        let id = &self.nodes[h.0].id;
        self.top.shift_remove(id).is_some()
    }

    pub(crate) fn node_mut(&mut self, h: NodeId) -> &mut Node {
        &mut self.nodes[h.0]
    }

    /// All records of the run, including those that are not top-level entries.
    pub(crate) fn handles(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// The number of records of the run, including those that are not top-level entries.
    pub fn record_count(&self) -> usize {
        self.nodes.len()
    }

    /// The top-level resource with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.top.get(id).map(|h| &self.nodes[h.0])
    }

    /// Whether the graph has a top-level resource with the given id.
    pub fn contains_key(&self, id: &str) -> bool {
        self.top.contains_key(id)
    }

    /// The ids of the top-level resources, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.top.keys().map(String::as_str)
    }

    /// The top-level (id, resource) pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.top
            .iter()
            .map(|(id, h)| (id.as_str(), &self.nodes[h.0]))
    }

    /// The number of top-level resources.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    /// Whether the graph has no top-level resource.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// The resource behind a handle.
    ///
    /// # Precondition
    /// `h` must have been issued by this graph, otherwise this method may panic.
    pub fn node(&self, h: NodeId) -> &Node {
        &self.nodes[h.0]
    }

    /// The record with the given id, whether it is a top-level entry or not.
    pub fn record(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|h| &self.nodes[h.0])
    }

    /// The handle of the record with the given id, whether it is a top-level entry or not.
    pub fn handle(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// The resource referenced by `value`, if it is a reference to a record of this graph.
    pub fn resolve(&self, value: &Value) -> Option<&Node> {
        match value {
            Value::Node(h) => Some(self.node(*h)),
            Value::Stub(id) | Value::Id(id) => self.record(id),
            _ => None,
        }
    }

    /// Remove the top-level entry with the given id, and return its resource.
    ///
    /// The resource is still reachable from the resources referencing it.
    pub fn remove(&mut self, id: &str) -> Option<&Node> {
        let h = self.top.shift_remove(id)?;
        Some(&self.nodes[h.0])
    }

    /// The identifiers of the types (`@type`) of the given resource.
    pub fn types_of<'s>(&'s self, node: &'s Node) -> impl Iterator<Item = &'s str> + 's {
        node.values("@type")
            .iter()
            .filter_map(move |v| match v {
                Value::Node(h) => Some(self.node(*h).id()),
                Value::Stub(id) | Value::Id(id) => Some(id.as_str()),
                _ => None,
            })
    }

    /// The top-level resources having every one of the given types.
    pub fn all_by_type(&self, types: &[&str]) -> Vec<&Node> {
        self.iter()
            .map(|(_, n)| n)
            .filter(|n| {
                let found: Vec<_> = self.types_of(n).collect();
                types.iter().all(|t| found.contains(t))
            })
            .collect()
    }

    /// The top-level resources having at least one of the given types.
    pub fn all_by_any_type(&self, types: &[&str]) -> Vec<&Node> {
        self.iter()
            .map(|(_, n)| n)
            .filter(|n| self.types_of(n).any(|t| types.contains(&t)))
            .collect()
    }

    /// The top-level resources, in insertion order.
    pub fn to_vec(&self) -> Vec<&Node> {
        self.iter().map(|(_, n)| n).collect()
    }

    /// Render this graph as a JSON object mapping each top-level id to its resource.
    ///
    /// Each top-level resource is rendered separately.
    /// Within one of them, references are expanded in place the first time they are met;
    /// any later reference to the same resource (a cycle, or a resource shared by several paths)
    /// is rendered as an `{"@id"}` stub.
    pub fn to_json(&self) -> JsonValue {
        let mut seen = HashSet::new();
        let map: Map<String, JsonValue> = self
            .top
            .iter()
            .map(|(id, h)| {
                seen.clear();
                (id.clone(), self.node_json(*h, &mut seen))
            })
            .collect();
        JsonValue::Object(map)
    }

    /// Render the resource behind `h` as a JSON object. See [`to_json`](Self::to_json).
    pub fn node_to_json(&self, h: NodeId) -> JsonValue {
        self.node_json(h, &mut HashSet::new())
    }

    fn node_json(&self, h: NodeId, seen: &mut HashSet<NodeId>) -> JsonValue {
        let node = self.node(h);
        let mut obj = Map::new();
        obj.insert("@id".into(), node.id.clone().into());
        if !seen.insert(h) {
            return JsonValue::Object(obj);
        }
        for (key, field) in &node.fields {
            let json = match field {
                Field::Single(v) => self.value_json(v, seen),
                Field::Many(vs) => vs.iter().map(|v| self.value_json(v, seen)).collect(),
            };
            obj.insert(key.clone(), json);
        }
        JsonValue::Object(obj)
    }

    fn value_json(&self, value: &Value, seen: &mut HashSet<NodeId>) -> JsonValue {
        match value {
            Value::Node(h) => self.node_json(*h, seen),
            Value::Stub(id) => {
                let mut obj = Map::new();
                obj.insert("@id".into(), id.clone().into());
                JsonValue::Object(obj)
            }
            Value::Id(txt) | Value::String(txt) => txt.clone().into(),
            Value::Literal(lit) => {
                let mut obj = Map::new();
                obj.insert("@value".into(), lit.value.clone().into());
                if let Some(tag) = &lit.language {
                    obj.insert("@language".into(), tag.clone().into());
                }
                if let Some(dt) = &lit.datatype {
                    obj.insert("@type".into(), self.value_json(dt, seen));
                }
                JsonValue::Object(obj)
            }
            Value::List(items) => {
                let mut obj = Map::new();
                let items = items.iter().map(|v| self.value_json(v, seen)).collect();
                obj.insert("@list".into(), JsonValue::Array(items));
                JsonValue::Object(obj)
            }
        }
    }
}
