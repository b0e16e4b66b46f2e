// 🗂️ Constraint Catalog - Per-entity attribute tables
// The effective table for each entity type, overrides already applied

use serde::Serialize;
use serde_json::{json, Value};

use crate::constraints::AttributeSpec;
use crate::entities::{customer, high_earner, hotel, lodging};

// ============================================================================
// ENTITY KINDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Customer,
    HighEarner,
    Lodging,
    Hotel,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Customer,
        EntityKind::HighEarner,
        EntityKind::Lodging,
        EntityKind::Hotel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::HighEarner => "HighEarner",
            EntityKind::Lodging => "Lodging",
            EntityKind::Hotel => "Hotel",
        }
    }
}

// ============================================================================
// TABLES
// ============================================================================

const CUSTOMER: &[&AttributeSpec] = &[
    &customer::ID,
    &customer::NAME,
    &customer::PHONE_NUMBER,
    &customer::ADDRESS,
];

// inherited attributes keep the base specs; the id slot is the override
const HIGH_EARNER: &[&AttributeSpec] = &[
    &high_earner::ID_OVERRIDE,
    &customer::NAME,
    &customer::PHONE_NUMBER,
    &customer::ADDRESS,
    &high_earner::INCOME,
];

const LODGING: &[&AttributeSpec] = &[
    &lodging::ID,
    &lodging::NAME,
    &lodging::ADDRESS,
    &lodging::ROOM_COUNT,
    &lodging::PRICE,
];

const HOTEL: &[&AttributeSpec] = &[
    &hotel::ID_OVERRIDE,
    &lodging::NAME,
    &lodging::ADDRESS,
    &lodging::ROOM_COUNT,
    &lodging::PRICE,
    &hotel::STAR_RATING,
];

/// Effective attribute table for an entity type, in declaration order.
/// Overridden slots appear with their strengthened bounds.
pub fn attributes(kind: EntityKind) -> &'static [&'static AttributeSpec] {
    match kind {
        EntityKind::Customer => CUSTOMER,
        EntityKind::HighEarner => HIGH_EARNER,
        EntityKind::Lodging => LODGING,
        EntityKind::Hotel => HOTEL,
    }
}

/// Look up one attribute of an entity type by name.
pub fn attribute(kind: EntityKind, name: &str) -> Option<&'static AttributeSpec> {
    attributes(kind).iter().copied().find(|a| a.name == name)
}

/// Render the whole catalog as JSON, for diagnostics only.
pub fn catalog_json() -> Value {
    let mut entities = serde_json::Map::new();
    for kind in EntityKind::ALL {
        entities.insert(
            kind.name().to_string(),
            json!(attributes(kind)),
        );
    }
    Value::Object(entities)
}
