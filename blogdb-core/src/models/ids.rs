//! Row identifiers
//!
//! `authors.authorid` and `blog.blogid` are `SERIAL` (INT4) columns, so
//! both ids wrap an `i32` and bind/decode transparently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

macro_rules! row_id {
    ($name:ident, $field:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw id. Ids issued by the database are always positive.
            pub fn new(id: i32) -> Result<Self, ValidationError> {
                if id <= 0 {
                    return Err(ValidationError::InvalidFormat {
                        field: $field,
                        reason: "must be a positive integer",
                    });
                }
                Ok(Self(id))
            }

            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::Empty { field: $field });
                }
                let id = s.parse::<i32>().map_err(|_| ValidationError::InvalidFormat {
                    field: $field,
                    reason: "must be a positive integer",
                })?;
                Self::new(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

row_id!(AuthorId, "author id");
row_id!(BlogId, "blog id");
