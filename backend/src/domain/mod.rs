//! Domain primitives and aggregates.
//!
//! Purpose: Define the shelter's resources, the constraint tables that guard
//! them, and the ports persistence adapters implement. Nothing here knows
//! about HTTP or SQL.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure.
//! - ErrorCode (alias to `error::ErrorCode`): stable error tag.
//! - Animal / Member and their draft, change and filter types.
//! - ANIMAL_CONSTRAINTS / MEMBER_CONSTRAINTS: rule tables for validation.

pub mod animal;
pub mod error;
pub mod member;
pub mod ports;
pub mod resource_id;
pub mod timestamp;
pub mod trace_id;
pub mod validation;

pub use self::animal::{
    ANIMAL_CONSTRAINTS, Animal, AnimalChanges, AnimalDraft, AnimalFilters, AnimalSize,
    ParseAnimalSizeError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::member::{MEMBER_CONSTRAINTS, Member, MemberChanges, MemberDraft, MemberFilters};
pub use self::resource_id::ResourceId;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use shelter::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("Animal not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
