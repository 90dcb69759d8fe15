use std::fmt;

use serde::{Deserialize, Serialize};

/// A named object the player can carry.
///
/// The name doubles as the key inside an [`Inventory`](crate::Inventory), so
/// two items with the same name are the same item as far as the game cares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    description: String,
}

impl Item {
    /// Create an item with a name and a description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The item's name (its identity).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let item = Item::new("popsicle", "Cold.");
        assert_eq!(item.name(), "popsicle");
        assert_eq!(item.description(), "Cold.");
        assert_eq!(item.to_string(), "popsicle");
    }
}
