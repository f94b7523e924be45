//! Boolean constraints

use crate::foundation::message::Message;
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<V: ArgValue<Target = bool>> ArgInfo<'_, V> {
    /// Requires the value to be `true`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the value is `false`.
    pub fn is_true(self) -> ArgResult<Self> {
        self.expect_bool(true, Message::MustBeTrue)
    }

    /// Requires the value to be `false`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the value is `true`.
    pub fn is_false(self) -> ArgResult<Self> {
        self.expect_bool(false, Message::MustBeFalse)
    }

    fn expect_bool(self, expected: bool, template: Message) -> ArgResult<Self> {
        if self.target().is_none_or(|&actual| actual == expected) {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            template,
            &[],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(ArgInfo::new(true, None, None).is_true().is_ok());
        let err = ArgInfo::new(false, Some("flag"), None).is_true().unwrap_err();
        assert_eq!(err.message(), "Value must be true.");
        assert_eq!(err.kind(), ArgErrorKind::PredicateFailed);
    }

    #[test]
    fn test_is_false() {
        assert!(ArgInfo::new(false, None, None).is_false().is_ok());
        let err = ArgInfo::new(true, None, None).is_false().unwrap_err();
        assert_eq!(err.message(), "Value must be false.");
    }

    #[test]
    fn test_none_passes() {
        assert!(ArgInfo::new(None::<bool>, None, None).is_true().is_ok());
        assert!(ArgInfo::new(None::<bool>, None, None).is_false().is_ok());
    }
}
