//! Runtime type constraints
//!
//! - [`assignable_to`](ArgInfo::assignable_to) downcasts a `dyn Any` value,
//!   continuing the chain with the concrete type
//! - [`defined`](ArgInfo::defined) checks that a raw value converts into a
//!   closed set such as a fieldless enum

use std::any::{Any, type_name};

use crate::foundation::message::Message;
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<'a, 'b> ArgInfo<'a, &'b dyn Any> {
    /// Requires the value to be a `U`, continuing with `&U`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::NotAssignable`] if the value has another type.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use argus_validator::prelude::*;
    ///
    /// let setting: &dyn Any = &30_u32;
    /// let secs = Arg::is(setting, "timeout")
    ///     .assignable_to::<u32>()?
    ///     .into_value();
    /// assert_eq!(*secs, 30);
    ///
    /// let err = Arg::is(setting, "timeout").assignable_to::<String>().unwrap_err();
    /// assert_eq!(err.kind(), ArgErrorKind::NotAssignable);
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn assignable_to<U: Any>(self) -> ArgResult<ArgInfo<'a, &'b U>> {
        let any: &'b dyn Any = *self.value();
        match any.downcast_ref::<U>() {
            Some(value) => Ok(self.convey(value)),
            None => Err(not_assignable::<U, _>(&self)),
        }
    }
}

impl<'a> ArgInfo<'a, Box<dyn Any>> {
    /// Requires the boxed value to be a `U`, continuing with `Box<U>`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::NotAssignable`] if the value has another type.
    pub fn assignable_to<U: Any>(self) -> ArgResult<ArgInfo<'a, Box<U>>> {
        let (value, name, message) = self.into_parts();
        match value.downcast::<U>() {
            Ok(value) => Ok(ArgInfo::new(value, name, message)),
            Err(_) => Err(not_assignable::<U, _>(&ArgInfo::new((), name, message))),
        }
    }
}

fn not_assignable<U, T>(arg: &ArgInfo<'_, T>) -> ArgError {
    ArgError::build(
        ArgErrorKind::NotAssignable,
        arg,
        Message::MustBeAssignableTo,
        &[&type_name::<U>()],
    )
}

impl<V> ArgInfo<'_, V>
where
    V: ArgValue,
    V::Target: Clone,
{
    /// Requires the value to convert into `E`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if `E::try_from` rejects the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    ///
    /// #[derive(Debug)]
    /// enum Level { Low = 1, High = 2 }
    ///
    /// impl TryFrom<u8> for Level {
    ///     type Error = ();
    ///
    ///     fn try_from(raw: u8) -> Result<Self, ()> {
    ///         match raw {
    ///             1 => Ok(Level::Low),
    ///             2 => Ok(Level::High),
    ///             _ => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// assert!(Arg::is(2_u8, "level").defined::<Level>().is_ok());
    /// let err = Arg::is(7_u8, "level").defined::<Level>().unwrap_err();
    /// assert_eq!(err.message(), "Value is not defined.");
    /// ```
    pub fn defined<E>(self) -> ArgResult<Self>
    where
        E: TryFrom<V::Target>,
    {
        if self
            .target()
            .is_none_or(|value| E::try_from(value.clone()).is_ok())
        {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::OutOfRange,
            &self,
            Message::NotDefined,
            &[],
        ))
    }
}
