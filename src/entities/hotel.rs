// 🏨 Hotel Entity - Star-rated lodging
// Specializes Lodging by composition; strengthens through the id slot

use std::cmp::Ordering;

use serde::Serialize;

use crate::constraints::{AttributeKind, AttributeSpec, Bound};
use crate::entities::lodging::{Lodging, LodgingValidators};
use crate::errors::{ConstructionFailure, MutationFailure, Violation};

// ============================================================================
// CONSTRAINT TABLE
// ============================================================================

/// Strengthened slot: the hotel's `>= 15` room floor, carried by the *id*
/// slot rather than a room-count override.
///
/// Net effect, preserved as declared: a hotel's id must be at least 15,
/// while `room_count` keeps the base `3..=14` bound — so no constructible
/// hotel actually has 15 rooms. Pinned by tests below; see DESIGN.md.
pub const ID_OVERRIDE: AttributeSpec = AttributeSpec {
    name: "id",
    kind: AttributeKind::Integer,
    mutable: false,
    optional: false,
    bound: Bound::IntMin { min: 15 },
};

pub const STAR_RATING: AttributeSpec = AttributeSpec {
    name: "star_rating",
    kind: AttributeKind::Real,
    mutable: true,
    optional: false,
    bound: Bound::RealRangeInclusive { min: 3.0, max: 5.0 },
};

const ENTITY: &str = "Hotel";

/// Hotel's implementations of the overridable lodging slots.
struct HotelValidators;

impl LodgingValidators for HotelValidators {
    fn validate_id(&self, id: i64) -> bool {
        ID_OVERRIDE.accepts_int(id)
    }
}

// ============================================================================
// HOTEL ENTITY
// ============================================================================

/// A lodging whose services are rated three stars or better.
#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    base: Lodging,
    star_rating: f64,
}

impl Hotel {
    /// Create a hotel, validating all six attributes atomically.
    ///
    /// The base attributes are checked through the strengthened slots: the
    /// id bound applied here is `id >= 15`.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        address: impl Into<String>,
        room_count: i64,
        price: f64,
        star_rating: f64,
    ) -> Result<Self, ConstructionFailure> {
        let base = Lodging::with_validators(
            &HotelValidators,
            ENTITY,
            id,
            name.into(),
            address.into(),
            room_count,
            price,
        );
        let stars_ok = STAR_RATING.accepts_real(star_rating);

        match base {
            Ok(base) if stars_ok => Ok(Hotel { base, star_rating }),
            Ok(_) => Err(ConstructionFailure::new(
                ENTITY,
                vec![Violation::new(STAR_RATING.name, star_rating)],
            )),
            Err(mut err) => {
                if !stars_ok {
                    err.violations
                        .push(Violation::new(STAR_RATING.name, star_rating));
                }
                Err(err)
            }
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn id(&self) -> i64 {
        self.base.id()
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn address(&self) -> &str {
        self.base.address()
    }

    pub fn room_count(&self) -> i64 {
        self.base.room_count()
    }

    pub fn price(&self) -> f64 {
        self.base.price()
    }

    pub fn star_rating(&self) -> f64 {
        self.star_rating
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MutationFailure> {
        self.base.set_name(name)
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), MutationFailure> {
        self.base.set_address(address)
    }

    pub fn set_room_count(&mut self, room_count: i64) -> Result<(), MutationFailure> {
        self.base.set_room_count(room_count)
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), MutationFailure> {
        self.base.set_price(price)
    }

    /// Set the star rating. On rejection the old rating is kept.
    pub fn set_star_rating(&mut self, star_rating: f64) -> Result<(), MutationFailure> {
        if STAR_RATING.accepts_real(star_rating) {
            self.star_rating = star_rating;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, STAR_RATING.name, star_rating))
        }
    }

    // ========================================================================
    // SELF-CHECK & ORDERING
    // ========================================================================

    /// Re-evaluate every attribute, the inherited ones through the
    /// strengthened slots.
    pub fn rep_ok(&self) -> bool {
        self.base.rep_ok_with(&HotelValidators) && STAR_RATING.accepts_real(self.star_rating)
    }

    /// Total order by price, as for any lodging.
    pub fn cmp_by_price(&self, other: &Hotel) -> Ordering {
        self.base.cmp_by_price(&other.base)
    }
}

impl std::fmt::Display for Hotel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hotel[id={}, name={}, address={}, room_count={}, price={}, star_rating={}]",
            self.base.id(),
            self.base.name(),
            self.base.address(),
            self.base.room_count(),
            self.base.price(),
            self.star_rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::lodging;

    fn grand() -> Hotel {
        Hotel::new(20, "Grand Plaza", "1 Main Sq", 10, 99.0, 4.5).unwrap()
    }

    #[test]
    fn test_valid_tuple_constructs_and_rep_ok_holds() {
        let h = grand();
        assert_eq!(h.id(), 20);
        assert_eq!(h.room_count(), 10);
        assert_eq!(h.star_rating(), 4.5);
        assert!(h.rep_ok());
        assert!(h.rep_ok());
    }

    #[test]
    fn test_star_rating_is_three_to_five_inclusive() {
        assert!(Hotel::new(20, "A", "x", 10, 99.0, 3.0).is_ok());
        assert!(Hotel::new(20, "A", "x", 10, 99.0, 5.0).is_ok());

        let err = Hotel::new(20, "A", "x", 10, 99.0, 2.9).unwrap_err();
        assert_eq!(err.attributes(), vec!["star_rating"]);
        let err = Hotel::new(20, "A", "x", 10, 99.0, 5.1).unwrap_err();
        assert_eq!(err.attributes(), vec!["star_rating"]);
    }

    #[test]
    fn test_room_floor_is_carried_by_the_id_slot() {
        // ids below 15 are rejected even though the base lodging accepts them
        let err = Hotel::new(5, "A", "x", 10, 99.0, 4.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["id"]);
        assert!(Lodging::new(5, "A", "x", 10, 99.0).is_ok());
        assert!(Hotel::new(15, "A", "x", 10, 99.0, 4.0).is_ok());

        // room_count keeps the base 3..=14 bound, so 15 rooms never pass
        let err = Hotel::new(20, "A", "x", 15, 99.0, 4.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["room_count"]);
    }

    #[test]
    fn test_strengthened_slot_narrows_the_base_id_rule() {
        // unlike the customer hierarchy, this override is a genuine subset
        // of the base rule: every id >= 15 is also >= 1
        for id in [15_i64, 16, 1_000_000] {
            assert!(ID_OVERRIDE.accepts_int(id));
            assert!(lodging::ID.accepts_int(id));
        }
        assert!(lodging::ID.accepts_int(5) && !ID_OVERRIDE.accepts_int(5));
    }

    #[test]
    fn test_construction_reports_all_failing_attributes() {
        let err = Hotel::new(5, "A", "x", 20, 0.5, 1.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["id", "room_count", "price", "star_rating"]);
    }

    #[test]
    fn test_failed_star_mutation_keeps_prior_state() {
        let mut h = grand();
        let err = h.set_star_rating(6.0).unwrap_err();
        assert_eq!(err.attribute, "star_rating");
        assert_eq!(h.star_rating(), 4.5);
        assert!(h.rep_ok());
    }

    #[test]
    fn test_delegated_mutators_report_the_base_entity() {
        let mut h = grand();
        let err = h.set_room_count(20).unwrap_err();
        assert_eq!(err.entity, "Lodging");
        assert_eq!(h.room_count(), 10);
    }

    #[test]
    fn test_sorting_hotels_by_price() {
        let mut hotels = vec![
            Hotel::new(20, "A", "x", 10, 50.0, 4.0).unwrap(),
            Hotel::new(21, "B", "x", 10, 20.0, 4.0).unwrap(),
            Hotel::new(22, "C", "x", 10, 50.0, 4.0).unwrap(),
        ];
        hotels.sort_by(|a, b| a.cmp_by_price(b));
        let prices: Vec<f64> = hotels.iter().map(|h| h.price()).collect();
        assert_eq!(prices, vec![20.0, 50.0, 50.0]);
        assert_eq!(hotels[1].cmp_by_price(&hotels[2]), Ordering::Equal);
    }

    #[test]
    fn test_display_renders_all_attributes() {
        assert_eq!(
            grand().to_string(),
            "Hotel[id=20, name=Grand Plaza, address=1 Main Sq, room_count=10, price=99, star_rating=4.5]"
        );
    }
}
