//! Parameter containers for named-placeholder binding.
//!
//! `ParamMap` preserves insertion order because the order of keys determines
//! the generated field order in shorthand INSERT/UPDATE statements.

use std::collections::HashMap;

use crate::types::{BindType, SqlValue};

/// Ordered mapping from parameter name to value.
///
/// Re-inserting an existing name overwrites the value in place, keeping the
/// original position (associative-array semantics).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap {
    entries: Vec<(String, SqlValue)>,
}

impl ParamMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert or overwrite a parameter. Overwrites keep the original
    /// insertion position.
    pub fn insert(&mut self, name: impl Into<String>, value: SqlValue) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<S: Into<String>, const N: usize> From<[(S, SqlValue); N]> for ParamMap {
    fn from(pairs: [(S, SqlValue); N]) -> Self {
        let mut map = ParamMap::new();
        for (name, value) in pairs {
            map.insert(name, value);
        }
        map
    }
}

impl<S: Into<String>> FromIterator<(S, SqlValue)> for ParamMap {
    fn from_iter<T: IntoIterator<Item = (S, SqlValue)>>(iter: T) -> Self {
        let mut map = ParamMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Optional explicit bind-type tags, keyed by parameter name.
#[derive(Debug, Clone, Default)]
pub struct TypeOverrides {
    tags: HashMap<String, BindType>,
}

impl TypeOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>, tag: BindType) {
        self.tags.insert(name.into(), tag);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<BindType> {
        self.tags.get(name).copied()
    }
}

impl<S: Into<String>, const N: usize> From<[(S, BindType); N]> for TypeOverrides {
    fn from(pairs: [(S, BindType); N]) -> Self {
        let mut overrides = TypeOverrides::new();
        for (name, tag) in pairs {
            overrides.insert(name, tag);
        }
        overrides
    }
}

/// Resolve the bind tag and concrete value for one parameter: an explicit
/// override materializes a coercion, otherwise the tag is inferred and the
/// native value flows through unchanged.
#[must_use]
pub(crate) fn resolve_bind(
    name: &str,
    value: &SqlValue,
    overrides: &TypeOverrides,
) -> (BindType, SqlValue) {
    match overrides.get(name) {
        Some(tag) => (tag, tag.coerce(value)),
        None => (BindType::infer(value), value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order_on_overwrite() {
        let mut map = ParamMap::new();
        map.insert("a", SqlValue::Int(1));
        map.insert("b", SqlValue::Int(2));
        map.insert("a", SqlValue::Int(9));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&SqlValue::Int(9)));
    }

    #[test]
    fn resolve_uses_override_or_inference() {
        let overrides = TypeOverrides::from([("n", BindType::Int)]);
        let (tag, value) = resolve_bind("n", &SqlValue::Text("5".into()), &overrides);
        assert_eq!(tag, BindType::Int);
        assert_eq!(value, SqlValue::Int(5));

        let (tag, value) = resolve_bind("m", &SqlValue::Text("5".into()), &overrides);
        assert_eq!(tag, BindType::Str);
        assert_eq!(value, SqlValue::Text("5".into()));
    }
}
