//! Shelter members: the people who adopt, foster and volunteer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::{
    ConstraintSet, FieldKind, FieldRule, ValidationErrors, sanitize_filters, validate_create,
    validate_update,
};
use crate::domain::{ResourceId, timestamp};

/// Reported when `fullName` is missing, blank, too long or not a string.
pub const FULL_NAME_INVALID: &str = "Full name is required and must be at most 255 characters";
/// Reported when `email` is missing, malformed or too long.
pub const EMAIL_INVALID: &str = "Email must be a valid address of at most 255 characters";

const TEXT_MAX: usize = 255;

/// Field constraints for member payloads and list filters.
pub static MEMBER_CONSTRAINTS: ConstraintSet = ConstraintSet {
    payload: &[
        FieldRule::required(
            "fullName",
            FieldKind::Text { max_len: TEXT_MAX },
            FULL_NAME_INVALID,
        ),
        FieldRule::required(
            "email",
            FieldKind::Email { max_len: TEXT_MAX },
            EMAIL_INVALID,
        ),
    ],
    filters: &[
        FieldRule::optional(
            "fullName",
            FieldKind::Text { max_len: TEXT_MAX },
            FULL_NAME_INVALID,
        ),
        FieldRule::optional(
            "email",
            FieldKind::Text { max_len: TEXT_MAX },
            EMAIL_INVALID,
        ),
    ],
};

/// Persisted member. `email` is unique across members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Store-assigned identifier.
    pub id: ResourceId,
    /// Display name.
    pub full_name: String,
    /// Contact address.
    pub email: String,
    /// Set by the store on insert.
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: DateTime<Utc>,
    /// Set by the store on every write.
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
}

/// Validated create payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    /// Display name.
    pub full_name: String,
    /// Contact address.
    pub email: String,
}

impl MemberDraft {
    /// Validate a raw JSON create body.
    ///
    /// # Errors
    ///
    /// Returns every failing field's message in declaration order.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = validate_create(body, &MEMBER_CONSTRAINTS)?;
        let full_name = fields
            .take_text("fullName")
            .ok_or_else(|| ValidationErrors::single(FULL_NAME_INVALID))?;
        let email = fields
            .take_text("email")
            .ok_or_else(|| ValidationErrors::single(EMAIL_INVALID))?;
        Ok(Self { full_name, email })
    }
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    /// New display name.
    pub full_name: Option<String>,
    /// New contact address.
    pub email: Option<String>,
}

impl MemberChanges {
    /// Validate a raw JSON update body.
    ///
    /// # Errors
    ///
    /// Mirrors [`AnimalChanges::from_json`](crate::domain::AnimalChanges::from_json).
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = validate_update(body, &MEMBER_CONSTRAINTS)?;
        Ok(Self {
            full_name: fields.take_text("fullName"),
            email: fields.take_text("email"),
        })
    }

    /// Apply the changes to `member` in place.
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(full_name) = &self.full_name {
            member.full_name.clone_from(full_name);
        }
        if let Some(email) = &self.email {
            member.email.clone_from(email);
        }
    }
}

/// Sanitised list filters: case-insensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilters {
    /// Substring of the display name.
    pub full_name: Option<String>,
    /// Substring of the contact address.
    pub email: Option<String>,
}

impl MemberFilters {
    /// Build filters from raw query parameters, dropping invalid values.
    pub fn from_query<S>(query: &HashMap<String, String, S>) -> Self
    where
        S: std::hash::BuildHasher,
    {
        let mut fields = sanitize_filters(query, &MEMBER_CONSTRAINTS);
        Self {
            full_name: fields.take_text("fullName"),
            email: fields.take_text("email"),
        }
    }

    /// Whether `member` satisfies every present filter.
    pub fn matches(&self, member: &Member) -> bool {
        fn contains(haystack: &str, needle: Option<&String>) -> bool {
            needle.is_none_or(|wanted| haystack.to_lowercase().contains(&wanted.to_lowercase()))
        }

        contains(&member.full_name, self.full_name.as_ref())
            && contains(&member.email, self.email.as_ref())
    }
}
