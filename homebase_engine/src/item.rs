//! Item catalog.
//!
//! Items in rooms and inventory are plain names. Anything that varies per item (so far only
//! whether it can be picked up) lives in the catalog, keyed by normalized name.

use std::collections::HashMap;

/// Catalog attributes for a single item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub name: String,
    pub liftable: bool,
}

/// Lookup of per-item attributes. Unlisted items fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    entries: HashMap<String, ItemInfo>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for an item.
    pub fn insert(&mut self, info: ItemInfo) {
        self.entries.insert(catalog_key(&info.name), info);
    }

    pub fn get(&self, name: &str) -> Option<&ItemInfo> {
        self.entries.get(&catalog_key(name))
    }

    /// Returns true unless the catalog marks the item as fixed in place.
    pub fn is_liftable(&self, name: &str) -> bool {
        self.get(name).is_none_or(|info| info.liftable)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn catalog_key(name: &str) -> String {
    name.trim().to_lowercase()
}
