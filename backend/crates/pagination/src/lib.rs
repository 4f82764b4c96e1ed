//! Offset pagination primitives shared by the shelter list endpoints.
//!
//! Clients send `limit` and `offset` as raw query-string values.
//! [`PageRequest::from_raw`] parses them leniently: a missing or unparsable
//! value falls back to its default and parsed values are clamped into range,
//! so pagination input never produces a validation error. [`PageMeta`]
//! describes the page that was actually served.
//!
//! # Examples
//! ```
//! use pagination::{PageMeta, PageRequest};
//!
//! let request = PageRequest::from_raw(Some("0"), Some("-5"));
//! assert_eq!(request.limit(), 1);
//! assert_eq!(request.offset(), 0);
//!
//! let meta = PageMeta::new(request, 3);
//! assert!(meta.has_more);
//! ```

mod meta;
mod request;

pub use meta::{PageMeta, has_more};
pub use request::{DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_LIMIT, MIN_LIMIT, PageRequest};
