use std::collections::BTreeMap;

/// A single dictionary value. The channel carries only integers and short
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i32),
    Text(String),
}

/// An ordered key-value message, keyed by small integer ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(BTreeMap<u32, Value>);

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_int(&mut self, key: u32, value: i32) {
        self.0.insert(key, Value::Int(value));
    }

    pub fn insert_text(&mut self, key: u32, value: impl Into<String>) {
        self.0.insert(key, Value::Text(value.into()));
    }

    /// Integer value at `key`, or `None` if absent or not an integer.
    pub fn int(&self, key: u32) -> Option<i32> {
        match self.0.get(&key) {
            Some(Value::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Text value at `key`, or `None` if absent or not text.
    pub fn text(&self, key: u32) -> Option<&str> {
        match self.0.get(&key) {
            Some(Value::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &Value)> {
        self.0.iter()
    }
}
