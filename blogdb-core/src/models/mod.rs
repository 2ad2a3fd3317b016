//! Domain values with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod author;
pub mod blog;
pub mod ids;
pub mod pagination;
pub mod validation;

pub use author::{AuthorName, AuthorPassword};
pub use blog::{BlogContent, BlogTitle};
pub use ids::{AuthorId, BlogId};
pub use pagination::{Paginated, Pagination};
pub use validation::ValidationError;
