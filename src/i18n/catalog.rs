//! Translation Catalog - Nested key lookup over parsed JSON
//!
//! A catalog is one language's translation tree. Keys are dot paths into
//! nested objects, `"hero.roles.0"` style indices included, resolving only
//! to string leaves.

use serde_json::Value;

use crate::i18n::I18nError;

/// One language's translations.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: Value,
}

impl Catalog {
    /// Parse a catalog from JSON text. The root must be an object.
    pub fn from_json(text: &str) -> Result<Self, I18nError> {
        let root: Value = serde_json::from_str(text)?;
        if !root.is_object() {
            return Err(I18nError::InvalidRoot);
        }
        Ok(Self { root })
    }

    /// Resolve a dot-path key to its string leaf.
    ///
    /// Returns None when any segment is missing or the leaf is not a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        node.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.root.as_object().is_none_or(|m| m.is_empty())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }
}
