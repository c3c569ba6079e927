// Ordered constant sets and the ancestor-first merge

use crate::error::{EnumError, Result};
use crate::value::{Coercion, Value};
use crate::variant::Lineage;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Ordered mapping from constant name to value
///
/// Names are unique, values are not. Every lookup by value returns the first
/// entry in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantSet {
    entries: IndexMap<String, Value>,
}

impl ConstantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a lineage root first, so ancestor constants precede descendant
    /// constants. A redeclared name takes the descendant's value and keeps the
    /// ancestor's position. Duplicate names within one level and NaN values
    /// are rejected.
    pub fn from_lineage(lineage: &Lineage) -> Result<Self> {
        let mut merged = ConstantSet::new();

        for level in lineage.levels().iter().rev() {
            let mut own = HashSet::with_capacity(level.constants.len());
            for (name, value) in &level.constants {
                if !own.insert(name.as_str()) {
                    return Err(EnumError::DuplicateName {
                        variant: level.name.clone(),
                        name: name.clone(),
                    });
                }
                if matches!(value, Value::Double(d) if d.is_nan()) {
                    return Err(EnumError::NanConstant {
                        variant: level.name.clone(),
                        name: name.clone(),
                    });
                }
                merged.insert(name.clone(), value.clone());
            }
        }

        debug!(
            variant = lineage.variant(),
            levels = lineage.levels().len(),
            constants = merged.len(),
            "merged constant set"
        );
        Ok(merged)
    }

    /// Insert or overwrite, returning the previous value for the name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entry at a position in merged order
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries
            .get_index(index)
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Position of the first entry exactly equal to `value`
    pub fn position_of(&self, value: &Value) -> Option<usize> {
        self.entries.values().position(|stored| stored == value)
    }

    /// Name of the first entry exactly equal to `value`
    pub fn name_of(&self, value: &Value) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, stored)| *stored == value)
            .map(|(name, _)| name.as_str())
    }

    /// First entry loosely equal to `candidate`, with its position
    pub fn find(&self, candidate: &Value, coercion: Coercion) -> Option<(usize, &str, &Value)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, (_, stored))| stored.loose_eq(candidate, coercion))
            .map(|(index, (name, stored))| (index, name.as_str(), stored))
    }
}

/// Equal when both hold the same entries in the same order
impl PartialEq for ConstantSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for ConstantSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = ConstantSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
