//! Constraint-driven validation of untyped request input.
//!
//! The engine takes a raw JSON body or query map plus a [`ConstraintSet`] and
//! yields either [`SanitizedFields`] or a non-empty, ordered
//! [`ValidationErrors`]. Every field is checked; messages are collected in
//! rule-declaration order rather than stopping at the first failure.
//!
//! Shared conventions:
//! - Missing keys are absent and unknown keys are ignored. `null` is absent
//!   for text fields but breaks integer and enumerated rules.
//! - Strings are trimmed, and blank strings count as absent.
//! - Each rule reports exactly one fixed message however it fails.
//! - Filters never fail: a value that breaks its rule is dropped.

mod rules;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

pub use rules::{ConstraintSet, FieldKind, FieldRule, Presence};

/// Reported when a create or update body is not a JSON object.
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";
/// Reported when an update body names no known field.
pub const AT_LEAST_ONE_FIELD: &str = "At least one field must be provided for update";

static EMAIL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A sanitised field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Trimmed text; enumerated values are lower-cased.
    Text(String),
    /// Range-checked integer.
    Integer(i64),
}

/// Ordered, sanitised fields that passed their rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedFields {
    values: Vec<(&'static str, FieldValue)>,
}

impl SanitizedFields {
    fn push(&mut self, name: &'static str, value: FieldValue) {
        self.values.push((name, value));
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Field names in rule order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(name, _)| *name)
    }

    /// Borrow a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.values.iter().find_map(|(key, value)| match value {
            FieldValue::Text(text) if *key == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Remove and return a text field.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        let index = self
            .values
            .iter()
            .position(|(key, value)| *key == name && matches!(value, FieldValue::Text(_)))?;
        match self.values.remove(index) {
            (_, FieldValue::Text(text)) => Some(text),
            (_, FieldValue::Integer(_)) => None,
        }
    }

    /// Read an integer field.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.values.iter().find_map(|(key, value)| match value {
            FieldValue::Integer(number) if *key == name => Some(*number),
            _ => None,
        })
    }
}

/// Non-empty, ordered list of human-readable validation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    /// A list holding exactly one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Collect messages, returning `None` when there are none.
    pub fn from_messages<I, S>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collected: Vec<String> = messages.into_iter().map(Into::into).collect();
        (!collected.is_empty()).then_some(Self(collected))
    }

    /// The messages in reporting order.
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Whether `message` was reported.
    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|reported| reported == message)
    }

    /// Messages joined with `"; "`.
    pub fn joined(&self) -> String {
        self.0.join("; ")
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Absent,
    Valid(FieldValue),
    Invalid,
}

fn sanitize(kind: FieldKind, raw: Option<&Value>) -> Outcome {
    let Some(raw) = raw else {
        return Outcome::Absent;
    };
    if raw.is_null() {
        return if null_is_absent(kind) {
            Outcome::Absent
        } else {
            Outcome::Invalid
        };
    }
    match kind {
        FieldKind::Text { max_len } => sanitize_text(raw, max_len, |_| true),
        FieldKind::Email { max_len } => sanitize_text(raw, max_len, is_email),
        FieldKind::Enumerated { variants } => sanitize_enumerated(raw, variants),
        FieldKind::Integer { min, max } => sanitize_integer(raw, min, max),
    }
}

fn sanitize_text(raw: &Value, max_len: usize, shape: impl Fn(&str) -> bool) -> Outcome {
    let Some(text) = raw.as_str() else {
        return Outcome::Invalid;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Outcome::Absent
    } else if trimmed.chars().count() > max_len || !shape(trimmed) {
        Outcome::Invalid
    } else {
        Outcome::Valid(FieldValue::Text(trimmed.to_owned()))
    }
}

fn sanitize_enumerated(raw: &Value, variants: &[&str]) -> Outcome {
    let Some(text) = raw.as_str() else {
        return Outcome::Invalid;
    };
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return Outcome::Absent;
    }
    if variants.contains(&lowered.as_str()) {
        Outcome::Valid(FieldValue::Text(lowered))
    } else {
        Outcome::Invalid
    }
}

fn sanitize_integer(raw: &Value, min: i64, max: i64) -> Outcome {
    let parsed = match raw {
        Value::Number(number) => number.as_i64().or_else(|| integral_float(number.as_f64()?)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(value) if (min..=max).contains(&value) => Outcome::Valid(FieldValue::Integer(value)),
        _ => Outcome::Invalid,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "only integral floats well inside the i64 range reach the cast"
)]
fn integral_float(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    (value.fract() == 0.0 && value.abs() <= LIMIT).then(|| value as i64)
}

fn is_email(value: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.as_object()
        .ok_or_else(|| ValidationErrors::single(BODY_NOT_OBJECT))
}

const fn null_is_absent(kind: FieldKind) -> bool {
    matches!(kind, FieldKind::Text { .. } | FieldKind::Email { .. })
}

/// Whether the key carries something the rule must look at.
fn is_supplied(kind: FieldKind, raw: Option<&Value>) -> bool {
    raw.is_some_and(|value| !value.is_null() || !null_is_absent(kind))
}

fn finish(
    fields: SanitizedFields,
    errors: Vec<String>,
) -> Result<SanitizedFields, ValidationErrors> {
    match ValidationErrors::from_messages(errors) {
        Some(errors) => Err(errors),
        None => Ok(fields),
    }
}

/// Validate a create payload against `constraints.payload`.
///
/// Required fields that are missing, `null` or blank report their message, as
/// does any present value that breaks its rule.
///
/// # Errors
///
/// Returns every failing field's message, in rule order.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use shelter::domain::ANIMAL_CONSTRAINTS;
/// use shelter::domain::validation::validate_create;
///
/// let errors = validate_create(&json!({ "name": "  " }), &ANIMAL_CONSTRAINTS)
///     .expect_err("name and species missing");
/// assert_eq!(errors.messages().len(), 2);
/// ```
pub fn validate_create(
    body: &Value,
    constraints: &ConstraintSet,
) -> Result<SanitizedFields, ValidationErrors> {
    let object = as_object(body)?;
    let mut fields = SanitizedFields::default();
    let mut errors = Vec::new();

    for rule in constraints.payload {
        match sanitize(rule.kind, object.get(rule.name)) {
            Outcome::Valid(value) => fields.push(rule.name, value),
            Outcome::Absent if !rule.is_required() => {}
            Outcome::Absent | Outcome::Invalid => errors.push(rule.message.to_owned()),
        }
    }

    finish(fields, errors)
}

/// Validate a partial update payload against `constraints.payload`.
///
/// A body naming no known field with a usable value fails with the single
/// [`AT_LEAST_ONE_FIELD`] message before any field is checked. Blanking a
/// required field is rejected with that field's message.
///
/// # Errors
///
/// Returns every failing field's message, in rule order.
pub fn validate_update(
    body: &Value,
    constraints: &ConstraintSet,
) -> Result<SanitizedFields, ValidationErrors> {
    let object = as_object(body)?;
    let has_known_field = constraints
        .payload
        .iter()
        .any(|rule| is_supplied(rule.kind, object.get(rule.name)));
    if !has_known_field {
        return Err(ValidationErrors::single(AT_LEAST_ONE_FIELD));
    }

    let mut fields = SanitizedFields::default();
    let mut errors = Vec::new();

    for rule in constraints.payload {
        let raw = object.get(rule.name);
        match sanitize(rule.kind, raw) {
            Outcome::Valid(value) => fields.push(rule.name, value),
            Outcome::Absent if rule.is_required() && raw.is_some_and(|v| !v.is_null()) => {
                errors.push(rule.message.to_owned());
            }
            Outcome::Absent => {}
            Outcome::Invalid => errors.push(rule.message.to_owned()),
        }
    }

    finish(fields, errors)
}

/// Sanitise list filters against `constraints.filters`.
///
/// Keys without a filter rule are ignored, and values that fail their rule
/// are dropped.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use shelter::domain::ANIMAL_CONSTRAINTS;
/// use shelter::domain::validation::sanitize_filters;
///
/// let query = HashMap::from([
///     ("species".to_owned(), " Dog ".to_owned()),
///     ("age".to_owned(), "ninety".to_owned()),
/// ]);
/// let filters = sanitize_filters(&query, &ANIMAL_CONSTRAINTS);
/// assert_eq!(filters.text("species"), Some("Dog"));
/// assert_eq!(filters.integer("age"), None);
/// ```
pub fn sanitize_filters<S>(
    query: &HashMap<String, String, S>,
    constraints: &ConstraintSet,
) -> SanitizedFields
where
    S: std::hash::BuildHasher,
{
    let mut fields = SanitizedFields::default();
    for rule in constraints.filters {
        let Some(raw) = query.get(rule.name) else {
            continue;
        };
        if let Outcome::Valid(value) = sanitize(rule.kind, Some(&Value::String(raw.clone()))) {
            fields.push(rule.name, value);
        }
    }
    fields
}
