//! blogdb-core: configuration and validated domain values
//!
//! Everything here is database-agnostic apart from the id newtypes,
//! which derive `sqlx::Type` so repositories can bind them directly.

pub mod config;
pub mod error;
pub mod models;

pub use config::{BlogDbConfig, DatabaseConfig};
pub use error::{ConfigError, Result};
pub use models::{
    AuthorId, AuthorName, AuthorPassword, BlogContent, BlogId, BlogTitle, Paginated, Pagination,
    ValidationError,
};
