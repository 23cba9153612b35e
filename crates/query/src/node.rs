//! Defines the read-only tree abstraction the query engine walks.
use serde_json::Value;
use std::iter;

/// The shape of a node, as far as path traversal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// String keys mapped to child nodes.
    Mapping,
    /// An ordered list of child nodes.
    Sequence,
    /// A string, number or boolean.
    Scalar,
    /// An absent value. Never emitted as a match.
    Null,
}

/// The contract for a node in a read-only, hierarchical data tree.
///
/// The engine is written exclusively against this trait. Lookups on the wrong
/// kind of node are defined no-matches: `field` on a sequence is `None`,
/// `entries` on a scalar is empty, and so on.
///
/// `'a` is the lifetime of the underlying tree.
pub trait TreeNode<'a>: std::fmt::Debug + Clone + Copy {
    fn kind(&self) -> NodeKind;

    /// The value stored under `name`, if this node is a mapping that has it.
    fn field(&self, name: &str) -> Option<Self>;

    /// The key/value pairs of a mapping, in the mapping's natural key order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&'a str, Self)> + 'a>;

    /// The elements of a sequence, in order.
    fn elements(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    fn is_mapping(&self) -> bool {
        self.kind() == NodeKind::Mapping
    }

    fn is_sequence(&self) -> bool {
        self.kind() == NodeKind::Sequence
    }
}

impl<'a> TreeNode<'a> for &'a Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Object(_) => NodeKind::Mapping,
            Value::Array(_) => NodeKind::Sequence,
            Value::Null => NodeKind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => NodeKind::Scalar,
        }
    }

    fn field(&self, name: &str) -> Option<Self> {
        let value: &'a Value = *self;
        value.as_object().and_then(|map| map.get(name))
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&'a str, Self)> + 'a> {
        let value: &'a Value = *self;
        match value {
            Value::Object(map) => Box::new(map.iter().map(|(key, child)| (key.as_str(), child))),
            _ => Box::new(iter::empty()),
        }
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let value: &'a Value = *self;
        match value {
            Value::Array(items) => Box::new(items.iter()),
            _ => Box::new(iter::empty()),
        }
    }
}
