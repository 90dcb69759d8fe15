//! Condition evaluation for dialogue options.

use oe_core::Inventory;

/// A condition that can be evaluated against the player's live state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Condition {
    /// Check if the player carries an item.
    HasItem {
        /// Item name.
        item: String,
    },
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Shorthand for [`Condition::HasItem`].
    pub fn has_item(item: impl Into<String>) -> Self {
        Condition::HasItem { item: item.into() }
    }

    /// Evaluate the condition against the player's inventory.
    pub fn evaluate(&self, inventory: &Inventory) -> bool {
        match self {
            Condition::HasItem { item } => inventory.contains(item),
            Condition::Not(inner) => !inner.evaluate(inventory),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(inventory)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(inventory)),
            Condition::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oe_core::Item;

    fn carrying(names: &[&str]) -> Inventory {
        names.iter().map(|n| Item::new(*n, "")).collect()
    }

    #[test]
    fn has_item() {
        let cond = Condition::has_item("popsicle");
        assert!(!cond.evaluate(&carrying(&[])));
        assert!(cond.evaluate(&carrying(&["popsicle"])));
    }

    #[test]
    fn logical_not() {
        let cond = Condition::Not(Box::new(Condition::has_item("popsicle")));
        assert!(cond.evaluate(&carrying(&[])));
        assert!(!cond.evaluate(&carrying(&["popsicle"])));
    }

    #[test]
    fn logical_and() {
        let cond = Condition::And(vec![
            Condition::has_item("passport"),
            Condition::has_item("visaApplication"),
        ]);
        assert!(cond.evaluate(&carrying(&["passport", "visaApplication"])));
        assert!(!cond.evaluate(&carrying(&["passport"])));
    }

    #[test]
    fn logical_or() {
        let cond = Condition::Or(vec![
            Condition::has_item("passport"),
            Condition::has_item("stolenDocument"),
        ]);
        assert!(cond.evaluate(&carrying(&["stolenDocument"])));
        assert!(!cond.evaluate(&carrying(&["popsicle"])));
    }

    #[test]
    fn always_holds() {
        assert!(Condition::Always.evaluate(&Inventory::new()));
        assert_eq!(Condition::default(), Condition::Always);
    }
}
