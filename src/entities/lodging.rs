// 🛏️ Lodging Entity - Validated place-to-stay record for travellers
// Constructor validates the whole tuple atomically; mutators validate per field

use std::cmp::Ordering;

use serde::Serialize;

use crate::constraints::{AttributeKind, AttributeSpec, Bound};
use crate::errors::{ConstructionFailure, MutationFailure, Violation};

// ============================================================================
// CONSTRAINT TABLE
// ============================================================================

pub const ID: AttributeSpec = AttributeSpec {
    name: "id",
    kind: AttributeKind::Integer,
    mutable: false,
    optional: false,
    bound: Bound::IntMin { min: 1 },
};

pub const NAME: AttributeSpec = AttributeSpec {
    name: "name",
    kind: AttributeKind::Text,
    mutable: true,
    optional: false,
    bound: Bound::TextLength { max: 70 },
};

pub const ADDRESS: AttributeSpec = AttributeSpec {
    name: "address",
    kind: AttributeKind::Text,
    mutable: true,
    optional: false,
    bound: Bound::TextLength { max: 150 },
};

pub const ROOM_COUNT: AttributeSpec = AttributeSpec {
    name: "room_count",
    kind: AttributeKind::Integer,
    mutable: true,
    optional: false,
    bound: Bound::IntRangeInclusive { min: 3, max: 14 },
};

pub const PRICE: AttributeSpec = AttributeSpec {
    name: "price",
    kind: AttributeKind::Real,
    mutable: true,
    optional: false,
    bound: Bound::RealMin {
        min: 1.0,
        inclusive: true,
    },
};

const ENTITY: &str = "Lodging";

// ============================================================================
// OVERRIDABLE VALIDATOR SLOTS
// ============================================================================

/// Validator slots a specialization of Lodging may strengthen.
///
/// As with the customer hierarchy, the base constructor and `rep_ok` take
/// `&dyn LodgingValidators`, so a specialization's slot is the one invoked
/// during base validation.
pub trait LodgingValidators {
    /// Check an id against this type's id bound.
    fn validate_id(&self, id: i64) -> bool {
        ID.accepts_int(id)
    }
}

/// The base lodging's own slots.
pub(crate) struct BaseLodgingValidators;

impl LodgingValidators for BaseLodgingValidators {}

// ============================================================================
// LODGING ENTITY
// ============================================================================

/// A lodging of interest to travellers.
#[derive(Debug, Clone, Serialize)]
pub struct Lodging {
    id: i64,
    name: String,
    address: String,
    room_count: i64,
    price: f64,
}

impl Lodging {
    /// Create a lodging, validating all five attributes atomically.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        address: impl Into<String>,
        room_count: i64,
        price: f64,
    ) -> Result<Self, ConstructionFailure> {
        Self::with_validators(
            &BaseLodgingValidators,
            ENTITY,
            id,
            name.into(),
            address.into(),
            room_count,
            price,
        )
    }

    /// Construct through dispatched validator slots.
    pub(crate) fn with_validators(
        validators: &dyn LodgingValidators,
        entity: &'static str,
        id: i64,
        name: String,
        address: String,
        room_count: i64,
        price: f64,
    ) -> Result<Self, ConstructionFailure> {
        let mut violations = Vec::new();
        if !validators.validate_id(id) {
            violations.push(Violation::new(ID.name, id));
        }
        if !NAME.accepts_text(&name) {
            violations.push(Violation::new(NAME.name, &name));
        }
        if !ADDRESS.accepts_text(&address) {
            violations.push(Violation::new(ADDRESS.name, &address));
        }
        if !ROOM_COUNT.accepts_int(room_count) {
            violations.push(Violation::new(ROOM_COUNT.name, room_count));
        }
        if !PRICE.accepts_real(price) {
            violations.push(Violation::new(PRICE.name, price));
        }

        if violations.is_empty() {
            Ok(Lodging {
                id,
                name,
                address,
                room_count,
                price,
            })
        } else {
            Err(ConstructionFailure::new(entity, violations))
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn room_count(&self) -> i64 {
        self.room_count
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    /// Set the name. On rejection the old name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MutationFailure> {
        let name = name.into();
        if NAME.accepts_text(&name) {
            self.name = name;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, NAME.name, name))
        }
    }

    /// Set the address. On rejection the old address is kept.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), MutationFailure> {
        let address = address.into();
        if ADDRESS.accepts_text(&address) {
            self.address = address;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, ADDRESS.name, address))
        }
    }

    /// Set the room count. On rejection the old count is kept.
    ///
    /// This always checks the base `3..=14` bound: the overridable slot
    /// covers only the id, so a specialization's strengthening does not
    /// reach this mutator.
    pub fn set_room_count(&mut self, room_count: i64) -> Result<(), MutationFailure> {
        if ROOM_COUNT.accepts_int(room_count) {
            self.room_count = room_count;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, ROOM_COUNT.name, room_count))
        }
    }

    /// Set the price. On rejection the old price is kept.
    pub fn set_price(&mut self, price: f64) -> Result<(), MutationFailure> {
        if PRICE.accepts_real(price) {
            self.price = price;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, PRICE.name, price))
        }
    }

    // ========================================================================
    // SELF-CHECK & ORDERING
    // ========================================================================

    /// Re-evaluate every attribute against its validator.
    pub fn rep_ok(&self) -> bool {
        self.rep_ok_with(&BaseLodgingValidators)
    }

    /// Self-check through dispatched validator slots, for specializations.
    pub(crate) fn rep_ok_with(&self, validators: &dyn LodgingValidators) -> bool {
        validators.validate_id(self.id)
            && NAME.accepts_text(&self.name)
            && ADDRESS.accepts_text(&self.address)
            && ROOM_COUNT.accepts_int(self.room_count)
            && PRICE.accepts_real(self.price)
    }

    /// Total order by price. `total_cmp` keeps this a total order over every
    /// f64 the field can hold. For sorting only; not an equality test.
    pub fn cmp_by_price(&self, other: &Lodging) -> Ordering {
        self.price.total_cmp(&other.price)
    }
}

impl std::fmt::Display for Lodging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lodging[id={}, name={}, address={}, room_count={}, price={}]",
            self.id, self.name, self.address, self.room_count, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riverside() -> Lodging {
        Lodging::new(7, "Riverside Inn", "12 Quay St", 10, 25.0).unwrap()
    }

    #[test]
    fn test_valid_tuple_constructs_and_rep_ok_holds() {
        let l = riverside();
        assert_eq!(l.id(), 7);
        assert_eq!(l.name(), "Riverside Inn");
        assert_eq!(l.address(), "12 Quay St");
        assert_eq!(l.room_count(), 10);
        assert_eq!(l.price(), 25.0);
        assert!(l.rep_ok());
        assert!(l.rep_ok());
    }

    #[test]
    fn test_id_has_no_upper_bound() {
        assert!(Lodging::new(1, "A", "x", 3, 1.0).is_ok());
        assert!(Lodging::new(i64::MAX, "A", "x", 3, 1.0).is_ok());
        let err = Lodging::new(0, "A", "x", 3, 1.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["id"]);
    }

    #[test]
    fn test_room_count_is_three_to_fourteen_inclusive() {
        assert!(Lodging::new(7, "A", "x", 3, 1.0).is_ok());
        assert!(Lodging::new(7, "A", "x", 14, 1.0).is_ok());
        let err = Lodging::new(7, "A", "x", 2, 1.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["room_count"]);
        let err = Lodging::new(7, "A", "x", 15, 1.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["room_count"]);
    }

    #[test]
    fn test_price_floor_is_inclusive() {
        assert!(Lodging::new(7, "A", "x", 3, 1.0).is_ok());
        let err = Lodging::new(7, "A", "x", 3, 0.99).unwrap_err();
        assert_eq!(err.attributes(), vec!["price"]);
    }

    #[test]
    fn test_text_bounds_reject_overlong_values() {
        let err = Lodging::new(7, "a".repeat(71), "x", 3, 1.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["name"]);
        let err = Lodging::new(7, "A", "a".repeat(151), 3, 1.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["address"]);
    }

    #[test]
    fn test_failed_mutation_keeps_prior_state() {
        let mut l = riverside();
        let err = l.set_room_count(20).unwrap_err();
        assert_eq!(err.attribute, "room_count");
        assert_eq!(l.room_count(), 10);

        let err = l.set_price(0.0).unwrap_err();
        assert_eq!(err.attribute, "price");
        assert_eq!(l.price(), 25.0);
        assert!(l.rep_ok());
    }

    #[test]
    fn test_sorting_by_price_keeps_equal_prices_adjacent() {
        let mut lodgings = vec![
            Lodging::new(1, "A", "x", 3, 20.0).unwrap(),
            Lodging::new(2, "B", "x", 3, 10.0).unwrap(),
            Lodging::new(3, "C", "x", 3, 20.0).unwrap(),
        ];
        lodgings.sort_by(|a, b| a.cmp_by_price(b));

        let prices: Vec<f64> = lodgings.iter().map(|l| l.price()).collect();
        assert_eq!(prices, vec![10.0, 20.0, 20.0]);
        assert_eq!(lodgings[1].cmp_by_price(&lodgings[2]), Ordering::Equal);
    }

    #[test]
    fn test_display_renders_all_attributes() {
        assert_eq!(
            riverside().to_string(),
            "Lodging[id=7, name=Riverside Inn, address=12 Quay St, room_count=10, price=25]"
        );
    }
}
