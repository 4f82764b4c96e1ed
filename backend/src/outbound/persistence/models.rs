//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{animals, members};

/// Row struct for reading from the animals table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = animals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnimalRow {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating animal records. Timestamps default in SQL.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = animals)]
pub(crate) struct NewAnimalRow<'a> {
    pub name: &'a str,
    pub species: &'a str,
    pub breed: Option<&'a str>,
    pub age: Option<i32>,
    pub size: Option<&'a str>,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Partial changeset; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = animals)]
pub(crate) struct AnimalUpdate<'a> {
    pub name: Option<&'a str>,
    pub species: Option<&'a str>,
    pub breed: Option<&'a str>,
    pub age: Option<i32>,
    pub size: Option<&'a str>,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Row struct for reading from the members table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MemberRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating member records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = members)]
pub(crate) struct NewMemberRow<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
}

/// Partial changeset; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = members)]
pub(crate) struct MemberUpdate<'a> {
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
}
