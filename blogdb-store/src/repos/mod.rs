//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Every value is bound as a `$n` parameter
//! - Constraint violations map to `DbError::Conflict` / `DbError::NotFound`
//! - Reads of `blog` always filter `is_deleted = FALSE`

pub mod authors;
pub mod blogs;

pub use authors::{Author, AuthorRepo};
pub use blogs::{Blog, BlogRepo};
