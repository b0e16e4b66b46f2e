// Booking Domain - Core Library
// Validated entity hierarchy for a flower/travel booking application
//
// The interesting part is the representation-invariant protocol: per-attribute
// constraint tables, atomic validate-then-commit constructors and mutators,
// and validator slots a specialization may strengthen. Persistence, UI, and
// the booking workflow itself are external collaborators that only ever see
// entities through this surface.

pub mod catalog;
pub mod constraints;
pub mod entities;
pub mod errors;

// Re-export commonly used types
pub use catalog::{attribute, attributes, catalog_json, EntityKind};
pub use constraints::{AttributeKind, AttributeSpec, Bound};
pub use entities::{
    Customer, CustomerValidators, HighEarner, Hotel, Lodging, LodgingValidators,
};
pub use errors::{ConstructionFailure, MutationFailure, Violation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
