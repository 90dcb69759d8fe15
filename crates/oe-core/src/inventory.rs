use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A keyed collection of items. Keys are item names, so adding an item whose
/// name is already present replaces the old one.
///
/// Iteration order is by name, which keeps save files and listings stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any item with the same name.
    pub fn add(&mut self, item: Item) {
        self.items.insert(item.name().to_string(), item);
    }

    /// Remove an item by name, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    /// Check whether an item with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Check whether every name in `names` is present.
    pub fn contains_all<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> bool {
        names.into_iter().all(|name| self.contains(name))
    }

    /// Get an item by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Iterate over items in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Item names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move an item from `self` into `other`. Returns false if `self` did not
    /// hold it, in which case neither inventory changes.
    pub fn transfer_to(&mut self, other: &mut Inventory, name: &str) -> bool {
        match self.remove(name) {
            Some(item) => {
                other.add(item);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.add(item);
        }
        inventory
    }
}

impl Extend<Item> for Inventory {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            self.add(item);
        }
    }
}
