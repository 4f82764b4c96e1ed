//! Declarative field constraints.
//!
//! Each resource publishes a [`ConstraintSet`]: one ordered rule table for its
//! create/update payloads and one for its list filters. The tables are plain
//! `static` data; the engine in the parent module interprets them.

/// Value shape a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed string of at most `max_len` characters.
    Text {
        /// Maximum length in characters after trimming.
        max_len: usize,
    },
    /// Integer in the closed range `[min, max]`, given as a JSON number or a
    /// base-10 string.
    Integer {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// Case-insensitive match against a fixed set; sanitised to lower case.
    Enumerated {
        /// Lower-case accepted spellings.
        variants: &'static [&'static str],
    },
    /// Trimmed `local@domain.tld` address of at most `max_len` characters.
    Email {
        /// Maximum length in characters after trimming.
        max_len: usize,
    },
}

/// Whether a payload must carry the field on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing or blank values are rejected on create, and blanking the field
    /// is rejected on update.
    Required,
    /// The field may be left out.
    Optional,
}

/// Constraint for one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// JSON key (camelCase) the rule reads.
    pub name: &'static str,
    /// Accepted value shape.
    pub kind: FieldKind,
    /// Whether the field is required on create.
    pub presence: Presence,
    /// Fixed message reported for any failure of this field.
    pub message: &'static str,
}

impl FieldRule {
    /// Declare a required field.
    #[must_use]
    pub const fn required(name: &'static str, kind: FieldKind, message: &'static str) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
            message,
        }
    }

    /// Declare an optional field.
    #[must_use]
    pub const fn optional(name: &'static str, kind: FieldKind, message: &'static str) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
            message,
        }
    }

    /// Whether this rule is [`Presence::Required`].
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

/// The full set of rules for one resource.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSet {
    /// Payload rules in reporting order.
    pub payload: &'static [FieldRule],
    /// Filter rules; presence is ignored and failures drop the filter.
    pub filters: &'static [FieldRule],
}
