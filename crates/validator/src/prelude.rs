//! Prelude module for convenient imports.
//!
//! Provides a single `use argus_validator::prelude::*;` import that brings
//! in the entry points, the error types and the comparison strategies.
//! Constraint methods are inherent on [`ArgInfo`] and need no import.
//!
//! # Examples
//!
//! ```rust,ignore
//! use argus_validator::prelude::*;
//!
//! let limit = Arg::is(limit, "limit").greater_than(0)?.into_value();
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::arg;
pub use crate::entry::{Arg, Argument};

// ============================================================================
// FOUNDATION: Carrier, capabilities, errors
// ============================================================================

pub use crate::foundation::{
    ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue, BoxError, Countable,
};

// ============================================================================
// COMPARISON
// ============================================================================

pub use crate::compare::{Comparer, EqualityComparer, StringComparison};

// ============================================================================
// FEATURE-GATED: Parsing helpers
// ============================================================================

#[cfg(feature = "temporal")]
pub use crate::parse::TimeSpanError;
#[cfg(feature = "uuid")]
pub use crate::parse::UuidFormat;
