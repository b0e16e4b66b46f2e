// 🌸 Customer Entity - Validated person record for the flower shop
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
    bound: Bound::IntRangeExclusive {
        min: 1,
        max: 1_000_000,
    },
};

pub const NAME: AttributeSpec = AttributeSpec {
    name: "name",
    kind: AttributeKind::Text,
    mutable: true,
    optional: false,
    bound: Bound::TextLength { max: 50 },
};

pub const PHONE_NUMBER: AttributeSpec = AttributeSpec {
    name: "phone_number",
    kind: AttributeKind::Text,
    mutable: true,
    optional: false,
    bound: Bound::TextLength { max: 10 },
};

pub const ADDRESS: AttributeSpec = AttributeSpec {
    name: "address",
    kind: AttributeKind::Text,
    mutable: true,
    optional: false,
    bound: Bound::TextLength { max: 100 },
};

const ENTITY: &str = "Customer";

// ============================================================================
// OVERRIDABLE VALIDATOR SLOTS
// ============================================================================

/// Validator slots a specialization of Customer may strengthen.
///
/// The base constructor and `rep_ok` go through `&dyn CustomerValidators`, so
/// whatever implementation the concrete type supplies is the one invoked —
/// a strengthened slot applies during base validation, not just afterwards.
pub trait CustomerValidators {
    /// Check an id against this type's id bound.
    fn validate_id(&self, id: i64) -> bool {
        ID.accepts_int(id)
    }
}

/// The base customer's own slots: every default method as declared above.
pub(crate) struct BaseCustomerValidators;

impl CustomerValidators for BaseCustomerValidators {}

// ============================================================================
// CUSTOMER ENTITY
// ============================================================================

/// A person of interest to the flower shop.
///
/// Fields are private: the only way in is the validating constructor, the
/// only way to change a mutable field is its mutator. `id` is immutable and
/// has no mutator at all.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: i64,
    name: String,
    phone_number: String,
    address: String,
}

impl Customer {
    /// Create a customer, validating all four attributes atomically.
    ///
    /// On failure no instance is produced and the error names every
    /// attribute that was out of bounds.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ConstructionFailure> {
        Self::with_validators(
            &BaseCustomerValidators,
            ENTITY,
            id,
            name.into(),
            phone_number.into(),
            address.into(),
        )
    }

    /// Construct through dispatched validator slots.
    ///
    /// Specializations pass their strengthened slots here so the base
    /// attributes are checked against the narrowed bounds. All checks run
    /// before any field commits.
    pub(crate) fn with_validators(
        validators: &dyn CustomerValidators,
        entity: &'static str,
        id: i64,
        name: String,
        phone_number: String,
        address: String,
    ) -> Result<Self, ConstructionFailure> {
        let mut violations = Vec::new();
        if !validators.validate_id(id) {
            violations.push(Violation::new(ID.name, id));
        }
        if !NAME.accepts_text(&name) {
            violations.push(Violation::new(NAME.name, &name));
        }
        if !PHONE_NUMBER.accepts_text(&phone_number) {
            violations.push(Violation::new(PHONE_NUMBER.name, &phone_number));
        }
        if !ADDRESS.accepts_text(&address) {
            violations.push(Violation::new(ADDRESS.name, &address));
        }

        if violations.is_empty() {
            Ok(Customer {
                id,
                name,
                phone_number,
                address,
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

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> &str {
        &self.address
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

    /// Set the phone number. On rejection the old number is kept.
    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), MutationFailure> {
        let phone_number = phone_number.into();
        if PHONE_NUMBER.accepts_text(&phone_number) {
            self.phone_number = phone_number;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, PHONE_NUMBER.name, phone_number))
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

    // ========================================================================
    // SELF-CHECK & ORDERING
    // ========================================================================

    /// Re-evaluate every attribute against its validator.
    ///
    /// Idempotent and side-effect-free; disagreement with the last successful
    /// construction or mutation indicates a bug in this module, not bad input.
    pub fn rep_ok(&self) -> bool {
        self.rep_ok_with(&BaseCustomerValidators)
    }

    /// Self-check through dispatched validator slots, for specializations.
    pub(crate) fn rep_ok_with(&self, validators: &dyn CustomerValidators) -> bool {
        validators.validate_id(self.id)
            && NAME.accepts_text(&self.name)
            && PHONE_NUMBER.accepts_text(&self.phone_number)
            && ADDRESS.accepts_text(&self.address)
    }

    /// Total order by name, lexicographic. For sorting only; not an equality
    /// or identity test.
    pub fn cmp_by_name(&self, other: &Customer) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer[id={}, name={}, phone_number={}, address={}]",
            self.id, self.name, self.phone_number, self.address
        )
    }
}
