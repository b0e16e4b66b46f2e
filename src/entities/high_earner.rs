// 💰 HighEarner Entity - Wealthy customer above an income threshold
// Specializes Customer by composition; strengthens the inherited id slot

use std::cmp::Ordering;

use serde::Serialize;

use crate::constraints::{AttributeKind, AttributeSpec, Bound};
use crate::entities::customer::{Customer, CustomerValidators};
use crate::errors::{ConstructionFailure, MutationFailure, Violation};

// ============================================================================
// CONSTRAINT TABLE
// ============================================================================

/// Strengthened id slot: replaces the base `1 <= id < 1_000_000` rule.
///
/// The two rules are disjoint — every id this slot accepts sits above the
/// base rule's exclusive max. Dispatch makes this the rule that actually
/// runs for a HighEarner, so such ids construct fine; the overlap question
/// is pinned by a test below rather than resolved here.
pub const ID_OVERRIDE: AttributeSpec = AttributeSpec {
    name: "id",
    kind: AttributeKind::Integer,
    mutable: false,
    optional: false,
    bound: Bound::IntMin { min: 10_000_000 },
};

pub const INCOME: AttributeSpec = AttributeSpec {
    name: "income",
    kind: AttributeKind::Real,
    mutable: true,
    optional: false,
    bound: Bound::RealMin {
        min: 10_000_000.0,
        inclusive: false,
    },
};

const ENTITY: &str = "HighEarner";

/// HighEarner's implementations of the overridable customer slots.
struct HighEarnerValidators;

impl CustomerValidators for HighEarnerValidators {
    fn validate_id(&self, id: i64) -> bool {
        ID_OVERRIDE.accepts_int(id)
    }
}

// ============================================================================
// HIGH EARNER ENTITY
// ============================================================================

/// A customer whose income is above the high-earner threshold.
#[derive(Debug, Clone, Serialize)]
pub struct HighEarner {
    base: Customer,
    income: f64,
}

impl HighEarner {
    /// Create a high earner, validating all five attributes atomically.
    ///
    /// The base attributes are checked through the strengthened slots, so
    /// the id bound applied here is `id >= 10_000_000`, not the base rule.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
        income: f64,
    ) -> Result<Self, ConstructionFailure> {
        let base = Customer::with_validators(
            &HighEarnerValidators,
            ENTITY,
            id,
            name.into(),
            phone_number.into(),
            address.into(),
        );
        let income_ok = INCOME.accepts_real(income);

        match base {
            Ok(base) if income_ok => Ok(HighEarner { base, income }),
            Ok(_) => Err(ConstructionFailure::new(
                ENTITY,
                vec![Violation::new(INCOME.name, income)],
            )),
            Err(mut err) => {
                if !income_ok {
                    err.violations.push(Violation::new(INCOME.name, income));
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

    pub fn phone_number(&self) -> &str {
        self.base.phone_number()
    }

    pub fn address(&self) -> &str {
        self.base.address()
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    // ========================================================================
    // MUTATORS
    // ========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), MutationFailure> {
        self.base.set_name(name)
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), MutationFailure> {
        self.base.set_phone_number(phone_number)
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), MutationFailure> {
        self.base.set_address(address)
    }

    /// Set the income. On rejection the old income is kept.
    pub fn set_income(&mut self, income: f64) -> Result<(), MutationFailure> {
        if INCOME.accepts_real(income) {
            self.income = income;
            Ok(())
        } else {
            Err(MutationFailure::new(ENTITY, INCOME.name, income))
        }
    }

    // ========================================================================
    // SELF-CHECK & ORDERING
    // ========================================================================

    /// Re-evaluate every attribute, the inherited ones through the
    /// strengthened slots.
    pub fn rep_ok(&self) -> bool {
        self.base.rep_ok_with(&HighEarnerValidators) && INCOME.accepts_real(self.income)
    }

    /// Total order by name, as for any customer.
    pub fn cmp_by_name(&self, other: &HighEarner) -> Ordering {
        self.base.cmp_by_name(&other.base)
    }
}

impl std::fmt::Display for HighEarner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HighEarner[id={}, name={}, phone_number={}, address={}, income={}]",
            self.base.id(),
            self.base.name(),
            self.base.phone_number(),
            self.base.address(),
            self.income
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::customer;

    fn binh() -> HighEarner {
        HighEarner::new(10_000_001, "Binh", "0123456789", "HCMC", 10_000_001.0).unwrap()
    }

    #[test]
    fn test_valid_tuple_constructs_and_rep_ok_holds() {
        let h = binh();
        assert_eq!(h.id(), 10_000_001);
        assert_eq!(h.name(), "Binh");
        assert_eq!(h.income(), 10_000_001.0);
        assert!(h.rep_ok());
        assert!(h.rep_ok());
    }

    #[test]
    fn test_income_at_or_below_threshold_is_rejected() {
        let err =
            HighEarner::new(10_000_001, "Binh", "0123456789", "HCMC", 5.0).unwrap_err();
        assert_eq!(err.entity, "HighEarner");
        assert_eq!(err.attributes(), vec!["income"]);

        // the bound is strict
        let err = HighEarner::new(10_000_001, "Binh", "0123456789", "HCMC", 10_000_000.0)
            .unwrap_err();
        assert_eq!(err.attributes(), vec!["income"]);
    }

    #[test]
    fn test_strengthened_id_slot_is_the_one_dispatched() {
        // valid for the base customer rule, rejected by the override
        let err = HighEarner::new(500, "Binh", "0123456789", "HCMC", 10_000_001.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["id"]);

        // rejected by the base rule, accepted by the override
        assert!(HighEarner::new(10_000_000, "Binh", "0123456789", "HCMC", 10_000_001.0).is_ok());
    }

    #[test]
    fn test_strengthened_id_is_not_a_subset_of_base_rule() {
        // The declared bounds contradict each other: every id the override
        // accepts lies outside the base rule, so the subset law that
        // strengthening is supposed to obey does not hold for this pair.
        // This pins the behavior as declared; changing either bound should
        // fail here first.
        for id in [10_000_000_i64, 10_000_001, 99_999_999] {
            assert!(ID_OVERRIDE.accepts_int(id));
            assert!(!customer::ID.accepts_int(id));
        }
    }

    #[test]
    fn test_construction_reports_all_failing_attributes() {
        let err = HighEarner::new(500, "a".repeat(51), "0123456789", "HCMC", 5.0).unwrap_err();
        assert_eq!(err.attributes(), vec!["id", "name", "income"]);
    }

    #[test]
    fn test_failed_income_mutation_keeps_prior_state() {
        let mut h = binh();
        let err = h.set_income(9.99).unwrap_err();
        assert_eq!(err.attribute, "income");
        assert_eq!(h.income(), 10_000_001.0);
        assert!(h.rep_ok());
    }

    #[test]
    fn test_delegated_mutators_report_the_base_entity() {
        let mut h = binh();
        let err = h.set_name("a".repeat(51)).unwrap_err();
        assert_eq!(err.entity, "Customer");
        assert_eq!(h.name(), "Binh");
    }

    #[test]
    fn test_display_renders_all_attributes() {
        assert_eq!(
            binh().to_string(),
            "HighEarner[id=10000001, name=Binh, phone_number=0123456789, address=HCMC, income=10000001]"
        );
    }
}
