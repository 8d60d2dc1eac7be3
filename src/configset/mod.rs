//! The output record and its ConfigSet serialization.
//!
//! Internally the record is two-level: global keys plus per-node attribute
//! maps. The flat `ATTR_<usename>` namespace the waf side expects is
//! produced only at the serialization boundary.

pub mod value;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use indexmap::IndexMap;

pub use value::Value;

/// The full key-value record for one generated file.
#[derive(Debug, Clone, Default)]
pub struct OutputRecord {
    globals: IndexMap<String, Value>,
    nodes: IndexMap<String, IndexMap<String, Value>>,
}

impl OutputRecord {
    pub fn new() -> Self {
        OutputRecord::default()
    }

    /// Set a global key.
    pub fn set_global(&mut self, key: impl Into<String>, value: Value) {
        self.globals.insert(key.into(), value);
    }

    /// Append a string to a global list, creating the list if absent.
    pub fn push_global_list(&mut self, key: &str, item: impl Into<String>) {
        let entry = self
            .globals
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        if let Value::List(items) = entry {
            items.push(Value::Str(item.into()));
        }
    }

    /// Merge strings into a global set, creating the set if absent.
    pub fn extend_global_set<I, S>(&mut self, key: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .globals
            .entry(key.to_string())
            .or_insert_with(|| Value::Set(BTreeSet::new()));
        if let Value::Set(set) = entry {
            set.extend(items.into_iter().map(Into::into));
        }
    }

    /// Set a per-node attribute. Empty values are dropped entirely: the
    /// reader must not see empty-list keys.
    pub fn set_attr(&mut self, node: &str, attr: &str, value: Value) {
        if value.is_empty() {
            return;
        }
        self.nodes
            .entry(node.to_string())
            .or_default()
            .insert(attr.to_string(), value);
    }

    /// Look up a global key.
    pub fn global(&self, key: &str) -> Option<&Value> {
        self.globals.get(key)
    }

    /// Look up a per-node attribute.
    pub fn attr(&self, node: &str, attr: &str) -> Option<&Value> {
        self.nodes.get(node).and_then(|attrs| attrs.get(attr))
    }

    /// Flatten to the wire namespace: `<ATTR>_<usename>` for node
    /// attributes, globals as-is. Sorted by key.
    pub fn flatten(&self) -> BTreeMap<String, Value> {
        let mut flat = BTreeMap::new();
        for (key, value) in &self.globals {
            flat.insert(key.clone(), value.clone());
        }
        for (node, attrs) in &self.nodes {
            for (attr, value) in attrs {
                flat.insert(format!("{}_{}", attr, node), value.clone());
            }
        }
        flat
    }

    /// Serialize in waf's ConfigSet format: one `key = literal` line per
    /// entry, keys sorted lexicographically.
    pub fn serialize(&self) -> String {
        let mut buf = String::new();
        for (key, value) in self.flatten() {
            buf.push_str(&key);
            buf.push_str(" = ");
            buf.push_str(&value.to_string());
            buf.push('\n');
        }
        buf
    }

    /// Merge another record into this one (used by the combined generator).
    pub fn merge(&mut self, other: OutputRecord) {
        self.globals.extend(other.globals);
        for (node, attrs) in other.nodes {
            self.nodes.entry(node).or_default().extend(attrs);
        }
    }
}
