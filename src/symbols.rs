//! The symbol table.

use indexmap::IndexMap;

use crate::value::Value;

/// Insertion-ordered variable store. The implicit variable `IT` is
/// pre-declared and always sits first; re-declaring a name overwrites
/// its value without moving it.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: IndexMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("IT".to_string(), Value::Unset);
        SymbolTable { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.entries.insert(name.to_string(), value);
    }

    pub fn it(&self) -> &Value {
        static UNSET: Value = Value::Unset;
        self.entries.get("IT").unwrap_or(&UNSET)
    }

    pub fn set_it(&mut self, value: Value) {
        self.entries.insert("IT".to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
