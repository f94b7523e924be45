//! Macros for starting chains and opting types into validation.
//!
//! # Available Macros
//!
//! - [`arg!`]: wrap an expression, using its source text as the argument name
//! - [`impl_arg_value!`]: implement [`ArgValue`](crate::foundation::ArgValue) for plain types
//!
//! # Examples
//!
//! ```rust,ignore
//! use argus_validator::prelude::*;
//!
//! fn resize(width: u32) -> Result<u32, ArgError> {
//!     // Errors name the argument "width".
//!     Ok(arg!(width).greater_than(0)?.into_value())
//! }
//! ```

// ============================================================================
// ARG MACRO
// ============================================================================

/// Starts a validation chain named after the wrapped expression.
///
/// `arg!(expr)` is `Arg::is(expr, stringify!(expr))`; a second argument
/// supplies the custom message.
///
/// # Examples
///
/// ```
/// use argus_validator::prelude::*;
///
/// let retries = 12;
/// let err = arg!(retries).less_than(10).unwrap_err();
/// assert_eq!(err.name(), Some("retries"));
///
/// let err = arg!(retries, "too many retries").less_than(10).unwrap_err();
/// assert_eq!(err.message(), "too many retries");
/// ```
#[macro_export]
macro_rules! arg {
    ($value:expr $(,)?) => {
        $crate::foundation::ArgInfo::new(
            $value,
            ::core::option::Option::Some(::core::stringify!($value)),
            ::core::option::Option::None,
        )
    };
    ($value:expr, $message:expr $(,)?) => {
        $crate::foundation::ArgInfo::new(
            $value,
            ::core::option::Option::Some(::core::stringify!($value)),
            ::core::option::Option::Some($message),
        )
    };
}

// ============================================================================
// ARG VALUE MACRO
// ============================================================================

/// Implements [`ArgValue`](crate::foundation::ArgValue) with the value as
/// its own comparison target.
///
/// # Variants
///
/// **Plain types**:
/// ```rust,ignore
/// impl_arg_value!(Celsius, Port);
/// ```
///
/// **Generic types** (generic parameters in brackets):
/// ```rust,ignore
/// impl_arg_value!([T: Ord] Bounded<T>);
/// impl_arg_value!(['b] Label<'b>);
/// ```
#[macro_export]
macro_rules! impl_arg_value {
    (@impl [$($params:tt)*] $ty:ty) => {
        impl<$($params)*> $crate::foundation::ArgValue for $ty {
            type Target = Self;

            #[inline]
            fn present(&self) -> ::core::option::Option<&Self> {
                ::core::option::Option::Some(self)
            }
        }
    };

    ([$($params:tt)*] $ty:ty) => {
        $crate::impl_arg_value!(@impl [$($params)*] $ty);
    };

    ($($ty:ty),+ $(,)?) => {
        $( $crate::impl_arg_value!(@impl [] $ty); )+
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::ArgValue;

    #[derive(Debug, PartialEq, PartialOrd)]
    struct Celsius(f64);

    #[derive(Debug, PartialEq)]
    struct Wrapper<T>(T);

    crate::impl_arg_value!(Celsius);
    crate::impl_arg_value!([T] Wrapper<T>);

    #[test]
    fn test_arg_captures_expression() {
        let timeout_ms = 250;
        let arg = arg!(timeout_ms);
        assert_eq!(arg.name(), Some("timeout_ms"));
        assert_eq!(arg.message(), None);
    }

    #[test]
    fn test_arg_with_message() {
        let limits = [1, 2];
        let arg = arg!(limits[0], "first limit");
        assert_eq!(arg.name(), Some("limits[0]"));
        assert_eq!(arg.message(), Some("first limit"));
    }

    #[test]
    fn test_impl_arg_value() {
        assert_eq!(Celsius(1.0).present(), Some(&Celsius(1.0)));
        assert_eq!(Some(Wrapper(3)).present(), Some(&Wrapper(3)));
    }
}
