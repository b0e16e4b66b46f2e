// 🚨 Failure Types - Construction & Mutation Rejections
// Both are scoped to the single operation that caused them; nothing is fatal

use serde::Serialize;

// ============================================================================
// VIOLATION
// ============================================================================

/// One attribute value that failed its validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Attribute name from the entity's constraint table.
    pub attribute: &'static str,

    /// The rejected value, rendered as text for diagnostics.
    pub rejected: String,
}

impl Violation {
    pub fn new(attribute: &'static str, rejected: impl ToString) -> Self {
        Violation {
            attribute,
            rejected: rejected.to_string(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.attribute, self.rejected)
    }
}

// ============================================================================
// CONSTRUCTION FAILURE
// ============================================================================

/// A constructor call was rejected: at least one attribute failed its
/// validator. All failing attributes are reported, and no instance exists
/// after this error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructionFailure {
    /// Entity type whose constructor rejected the tuple.
    pub entity: &'static str,

    /// Every attribute that failed, with the rejected value.
    pub violations: Vec<Violation>,
}

impl ConstructionFailure {
    pub fn new(entity: &'static str, violations: Vec<Violation>) -> Self {
        ConstructionFailure { entity, violations }
    }

    /// Names of all failing attributes, in declaration order.
    pub fn attributes(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.attribute).collect()
    }
}

impl std::fmt::Display for ConstructionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: invalid arguments [", self.entity)?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for ConstructionFailure {}

// ============================================================================
// MUTATION FAILURE
// ============================================================================

/// A mutator rejected its new value. The entity keeps its prior, valid state;
/// no partial update is ever observable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationFailure {
    /// Entity type whose mutator rejected the value.
    pub entity: &'static str,

    /// The attribute the mutator targets.
    pub attribute: &'static str,

    /// The rejected value, rendered as text.
    pub rejected: String,
}

impl MutationFailure {
    pub fn new(entity: &'static str, attribute: &'static str, rejected: impl ToString) -> Self {
        MutationFailure {
            entity,
            attribute,
            rejected: rejected.to_string(),
        }
    }
}

impl std::fmt::Display for MutationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.set_{}: invalid {} {}",
            self.entity, self.attribute, self.attribute, self.rejected
        )
    }
}

impl std::error::Error for MutationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_failure_lists_every_attribute() {
        let err = ConstructionFailure::new(
            "Customer",
            vec![Violation::new("id", 0), Violation::new("name", "")],
        );
        assert_eq!(err.attributes(), vec!["id", "name"]);
        let rendered = err.to_string();
        assert!(rendered.contains("Customer: invalid arguments"));
        assert!(rendered.contains("id = 0"));
        assert!(rendered.contains("name ="));
    }

    #[test]
    fn test_mutation_failure_names_attribute_and_value() {
        let err = MutationFailure::new("Lodging", "price", 0.5);
        assert_eq!(err.to_string(), "Lodging.set_price: invalid price 0.5");
    }
}
