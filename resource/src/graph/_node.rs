use std::slice;

/// A handle on a [`Node`] of a [`Graph`](super::Graph).
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub(crate) usize);

/// A resource record: an identifier and its predicate-keyed fields.
///
/// Fields keep the order in which their predicates were first encountered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub(crate) id: String,
    pub(crate) fields: Vec<(String, Field)>,
}

impl Node {
    pub(crate) fn new(id: String) -> Self {
        Node { id, fields: vec![] }
    }

    /// The identifier of this resource (`@id`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The field for the given key, if any.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, f)| f)
    }

    /// The values of the field for the given key (empty if the field does not exist).
    pub fn values(&self, key: &str) -> &[Value] {
        self.get(key).map(Field::values).unwrap_or(&[])
    }

    /// Iterate over the (key, field) pairs of this resource.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> + '_ {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    /// Whether this resource has no field, i.e. it was only ever seen as an object.
    pub fn is_placeholder(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append `value` to the field `key`.
    ///
    /// A new field holds a bare value if `compact`, a one-element sequence otherwise.
    pub(crate) fn extend(&mut self, key: String, value: Value, compact: bool) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, field)) => field.push(value),
            None if compact => self.fields.push((key, Field::Single(value))),
            None => self.fields.push((key, Field::Many(vec![value]))),
        }
    }
}

/// The content of a field of a [`Node`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Field {
    /// A single bare value.
    Single(Value),
    /// An ordered sequence of values.
    Many(Vec<Value>),
}

impl Field {
    /// The values of this field, in insertion order.
    pub fn values(&self) -> &[Value] {
        match self {
            Field::Single(v) => slice::from_ref(v),
            Field::Many(vs) => vs,
        }
    }

    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        match self {
            Field::Single(v) => slice::from_mut(v),
            Field::Many(vs) => vs,
        }
    }

    /// The only value of this field, if it has exactly one.
    pub fn single(&self) -> Option<&Value> {
        match self.values() {
            [v] => Some(v),
            _ => None,
        }
    }

    /// Append a value; a bare value turns into a sequence.
    pub(crate) fn push(&mut self, value: Value) {
        let values = match std::mem::replace(self, Field::Many(vec![])) {
            Field::Single(first) => vec![first, value],
            Field::Many(mut vs) => {
                vs.push(value);
                vs
            }
        };
        *self = Field::Many(values);
    }
}

/// A value held by a [`Field`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A reference to a resource of the same graph.
    Node(NodeId),
    /// A detached `{"@id"}` reference, not connected to the referenced resource.
    Stub(String),
    /// A bare identifier (used for types and datatypes when they are not resources).
    Id(String),
    /// A bare string (an `xsd:string` literal).
    String(String),
    /// A literal with a language tag or a datatype.
    Literal(LiteralValue),
    /// A list reconstructed from an RDF collection.
    List(Vec<Value>),
}

impl Value {
    /// The handle of the referenced resource, if this value is a meshed reference.
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Value::Node(h) => Some(*h),
            _ => None,
        }
    }

    /// The items of this value, if it is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The literal of this value, if it is one.
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Value::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The text of this value, if it is a bare string or a bare identifier.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(txt) | Value::Id(txt) => Some(txt),
            _ => None,
        }
    }
}

/// A literal value: `{"@value", "@language"}` or `{"@value", "@type"}`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiteralValue {
    pub(crate) value: String,
    pub(crate) language: Option<String>,
    pub(crate) datatype: Option<Box<Value>>,
}

impl LiteralValue {
    /// The lexical form (`@value`).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language tag (`@language`), if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The datatype (`@type`), if any:
    /// a resource reference or a bare identifier.
    pub fn datatype(&self) -> Option<&Value> {
        self.datatype.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extend_compact() {
        let mut n = Node::new("ex:A".into());
        n.extend("ex:p".into(), Value::String("1".into()), true);
        assert_eq!(n.get("ex:p"), Some(&Field::Single(Value::String("1".into()))));
        n.extend("ex:p".into(), Value::String("2".into()), true);
        n.extend("ex:p".into(), Value::String("3".into()), true);
        assert_eq!(
            n.get("ex:p"),
            Some(&Field::Many(vec![
                Value::String("1".into()),
                Value::String("2".into()),
                Value::String("3".into()),
            ]))
        );
        assert_eq!(n.values("ex:p").len(), 3);
        assert_eq!(n.get("ex:p").and_then(Field::single), None);
    }

    #[test]
    fn extend_not_compact() {
        let mut n = Node::new("ex:A".into());
        assert!(n.is_placeholder());
        n.extend("ex:p".into(), Value::Id("ex:B".into()), false);
        assert_eq!(n.get("ex:p"), Some(&Field::Many(vec![Value::Id("ex:B".into())])));
        assert_eq!(
            n.get("ex:p").and_then(Field::single),
            Some(&Value::Id("ex:B".into()))
        );
        assert!(!n.is_placeholder());
        assert!(n.values("ex:q").is_empty());
    }

    #[test]
    fn fields_keep_first_encounter_order() {
        let mut n = Node::new("ex:A".into());
        for key in ["ex:z", "ex:a", "ex:z", "ex:m"] {
            n.extend(key.into(), Value::String(key.into()), true);
        }
        let keys: Vec<_> = n.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ex:z", "ex:a", "ex:m"]);
    }
}
