// Entity Models - the validated domain hierarchy
//
// Each entity has:
// - A constraint table of const AttributeSpecs (bounds are compile-time data)
// - A validating constructor (atomic: all attributes checked before commit)
// - Mutators for mutable attributes only (validate-then-commit, field-local)
// - rep_ok() re-evaluating every validator, overridden slots included
//
// Specializations compose their base and strengthen validator slots through
// the per-hierarchy validator traits.

pub mod customer;
pub mod high_earner;
pub mod hotel;
pub mod lodging;

pub use customer::{Customer, CustomerValidators};
pub use high_earner::HighEarner;
pub use hotel::Hotel;
pub use lodging::{Lodging, LodgingValidators};
