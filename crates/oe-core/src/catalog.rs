//! Every item name the game knows, and how to rebuild an [`Item`] from a
//! bare name (used when restoring a save file).

use crate::item::Item;

/// The ticket printed by the ticket machine.
pub const TICKET: &str = "ticketItem";
/// The guard's favourite bribe.
pub const POPSICLE: &str = "popsicle";
/// Lying outside the office, waiting for someone to slip.
pub const BANANA_PEEL: &str = "bananaPeel";
/// Dropped by whoever slips on the banana peel.
pub const STOLEN_DOCUMENT: &str = "stolenDocument";
/// Interview document.
pub const PASSPORT: &str = "passport";
/// Interview document.
pub const VISA_APPLICATION: &str = "visaApplication";
/// Interview document.
pub const BIRTH_CERTIFICATE: &str = "birthCertificate";
/// Interview document.
pub const EMPLOYMENT_LETTER: &str = "employmentLetter";

/// Known item names paired with their descriptions.
const DESCRIPTIONS: &[(&str, &str)] = &[
    (PASSPORT, "Your passport"),
    (VISA_APPLICATION, "Visa application form"),
    (
        STOLEN_DOCUMENT,
        "A stolen document - someone dropped it after slipping on the banana peel",
    ),
    (BIRTH_CERTIFICATE, "Birth certificate"),
    (EMPLOYMENT_LETTER, "Employment letter"),
    (TICKET, "This is the ticket required for the queue"),
    (BANANA_PEEL, "A slippery banana peel, watch your step!"),
    (POPSICLE, "A refreshing popsicle, perfect for a hot day"),
];

/// Look up the catalog description for a known item name.
pub fn description_of(name: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, desc)| *desc)
}

/// Rebuild an item from its name. Unknown names get a generic description.
pub fn item_from_name(name: &str) -> Item {
    match description_of(name) {
        Some(desc) => Item::new(name, desc),
        None => Item::new(name, format!("A {name}")),
    }
}
