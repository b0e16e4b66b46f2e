// 📏 Constraint Layer - Attribute Descriptors & Validators
// Bounds are compile-time data; validators are pure total predicates

use serde::Serialize;

// ============================================================================
// ATTRIBUTE KINDS
// ============================================================================

/// Semantic type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeKind {
    Integer,
    Real,
    Text,
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Declared bound for one attribute.
///
/// Inclusivity is part of the declaration, not a convention: id ranges use an
/// inclusive min with an *exclusive* max, room counts are inclusive on both
/// ends, income is strictly greater-than. Each variant encodes exactly the
/// shape its attribute declares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Bound {
    /// Integer minimum, no upper bound: `min <= v`.
    IntMin { min: i64 },

    /// Integer range with exclusive max: `min <= v < max`.
    IntRangeExclusive { min: i64, max: i64 },

    /// Integer range inclusive on both ends: `min <= v <= max`.
    IntRangeInclusive { min: i64, max: i64 },

    /// Real lower bound, inclusive or strict, no upper bound.
    RealMin { min: f64, inclusive: bool },

    /// Real range inclusive on both ends: `min <= v <= max`.
    RealRangeInclusive { min: f64, max: f64 },

    /// Text with a maximum length in chars. Absence is ruled out by the type
    /// system for required attributes; the length check is what remains.
    TextLength { max: usize },
}

impl Bound {
    /// Check an integer value against this bound.
    ///
    /// Total over `i64`; non-integer bounds accept nothing.
    pub fn accepts_int(&self, value: i64) -> bool {
        match *self {
            Bound::IntMin { min } => value >= min,
            Bound::IntRangeExclusive { min, max } => value >= min && value < max,
            Bound::IntRangeInclusive { min, max } => value >= min && value <= max,
            _ => false,
        }
    }

    /// Check a real value against this bound.
    pub fn accepts_real(&self, value: f64) -> bool {
        match *self {
            Bound::RealMin { min, inclusive } => {
                if inclusive {
                    value >= min
                } else {
                    value > min
                }
            }
            Bound::RealRangeInclusive { min, max } => value >= min && value <= max,
            _ => false,
        }
    }

    /// Check a text value against this bound.
    pub fn accepts_text(&self, value: &str) -> bool {
        match *self {
            Bound::TextLength { max } => value.chars().count() <= max,
            _ => false,
        }
    }
}

// ============================================================================
// ATTRIBUTE SPEC
// ============================================================================

/// Static, per-attribute metadata: what the attribute is and what values it
/// admits. Declared once per entity type as a `const`, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeSpec {
    /// Attribute name as reported in failures (e.g. "phone_number").
    pub name: &'static str,

    /// Semantic type of the value.
    pub kind: AttributeKind,

    /// Whether the owning entity exposes a mutator for this attribute.
    pub mutable: bool,

    /// Whether an absent value is admissible.
    pub optional: bool,

    /// The declared bound.
    pub bound: Bound,
}

impl AttributeSpec {
    pub fn accepts_int(&self, value: i64) -> bool {
        self.bound.accepts_int(value)
    }

    pub fn accepts_real(&self, value: f64) -> bool {
        self.bound.accepts_real(value)
    }

    pub fn accepts_text(&self, value: &str) -> bool {
        self.bound.accepts_text(value)
    }
}
