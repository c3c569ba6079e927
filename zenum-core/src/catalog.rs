// Runtime variant declarations loaded from JSON
//
// A catalog declares variants by name, with parents referenced by name. It
// resolves to the same `Lineage` as statically declared variants do.

use crate::error::{EnumError, Result};
use crate::value::{Coercion, Value};
use crate::variant::{Declaration, Lineage};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A set of variant declarations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub variants: Vec<VariantDef>,
}

/// A single declared variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub constants: IndexMap<String, Value>,
    /// An explicit `null` declares a null default, it does not inherit
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(default)]
    pub coercion: Coercion,
}

fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl VariantDef {
    fn declaration(&self) -> Declaration {
        Declaration {
            name: self.name.clone(),
            constants: self
                .constants
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            default: self.default.clone(),
        }
    }
}

impl Catalog {
    /// Parse a catalog document and reject repeated variant names
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.variants.len());
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return Err(EnumError::DuplicateVariant {
                    name: variant.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|variant| variant.name.as_str())
    }

    /// Walk `extends` links from the named variant up to its root
    pub fn lineage(&self, name: &str) -> Result<Lineage> {
        let mut current = self.get(name).ok_or_else(|| EnumError::UnknownVariant {
            name: name.to_string(),
        })?;
        let mut lineage = Lineage::new(current.declaration(), current.coercion);
        let mut seen = vec![current.name.as_str()];

        while let Some(parent) = current.extends.as_deref() {
            if seen.contains(&parent) {
                return Err(EnumError::CyclicLineage {
                    variant: name.to_string(),
                });
            }
            current = self.get(parent).ok_or_else(|| EnumError::UnknownVariant {
                name: parent.to_string(),
            })?;
            seen.push(parent);
            lineage.push_ancestor(current.declaration());
        }

        Ok(lineage)
    }
}
