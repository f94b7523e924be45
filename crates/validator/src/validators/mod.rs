//! Built-in constraints
//!
//! Each module adds one family of constraint methods to
//! [`ArgInfo`](crate::foundation::ArgInfo). There are no free functions:
//! bringing the crate into scope is enough to chain any of them.
//!
//! # Families
//!
//! - **Presence**: `not_null`, `null`, `not_null_or_empty`, `not_null_or_white_space`
//! - **Boolean**: `is_true`, `is_false`
//! - **Equality**: `equal_to`, `same`
//! - **Range**: `greater_than`, `less_than`, `between`, ...
//! - **Length**: `not_empty`, `length`, `min_length`, `max_length`, `length_between`
//! - **Text**: `not_white_space`, `starts_with`, `ends_with`, `contains`, `letter`, `digit`
//! - **Pattern**: `matches`, `matches_capture`
//! - **Types**: `assignable_to`, `defined`
//! - **URL**: `absolute_with_scheme`
//!
//! # Examples
//!
//! ```rust,ignore
//! use argus_validator::prelude::*;
//!
//! let user = Arg::is(user, "user").not_null_or_white_space()?.max_length(32)?;
//! let age = Arg::is(age, "age").between(18, 130)?;
//! let tags = Arg::is(&tags[..], "tags").length_between(1, 10)?;
//! ```

mod boolean;
mod equality;
mod length;
mod nullable;
mod pattern;
mod range;
mod string;
mod types;
#[cfg(feature = "url")]
mod uri;
