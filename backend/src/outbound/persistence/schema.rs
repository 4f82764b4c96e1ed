//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Animals in the shelter's care.
    animals (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        name -> Varchar,
        species -> Varchar,
        breed -> Nullable<Varchar>,
        /// Whole years, constrained to `0..=50`.
        age -> Nullable<Int4>,
        /// One of `small`, `medium` or `large`.
        size -> Nullable<Varchar>,
        location -> Nullable<Varchar>,
        description -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Shelter members. `email` carries the `members_email_key` unique
    /// constraint.
    members (id) {
        id -> Int8,
        full_name -> Varchar,
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(animals, members);
