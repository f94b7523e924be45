//! Capabilities of values that can be carried through a chain
//!
//! - [`ArgValue`] separates "the value may be absent" (`Option<T>`) from
//!   the thing constraints actually compare (the *target*). Every
//!   constraint starts with [`ArgValue::present`]: `None` short-circuits.
//! - [`Countable`] gives length constraints the actual number of elements
//!   (collections) or Unicode scalar values (text).
//!
//! Implementations are per concrete type. Downstream types opt in with
//! [`impl_arg_value!`](crate::impl_arg_value).

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// ARG VALUE
// ============================================================================

/// A value that constraints can be evaluated against.
///
/// For plain values the target is the value itself. For `Option<T>` the
/// target is `T`'s target, and `present` returns `None` for `None`.
pub trait ArgValue {
    /// The type constraints compare against.
    type Target;

    /// Returns the comparison target, or `None` if the value is absent.
    fn present(&self) -> Option<&Self::Target>;
}

impl<T: ArgValue> ArgValue for Option<T> {
    type Target = T::Target;

    #[inline]
    fn present(&self) -> Option<&Self::Target> {
        self.as_ref().and_then(ArgValue::present)
    }
}

crate::impl_arg_value!(
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String, Box<str>, Arc<str>, Rc<str>,
    std::time::Duration,
    std::net::IpAddr, std::net::Ipv4Addr, std::net::Ipv6Addr, std::net::SocketAddr,
    std::path::PathBuf,
);

crate::impl_arg_value!(['b] &'b str);
crate::impl_arg_value!(['b] Cow<'b, str>);
crate::impl_arg_value!(['b, T] &'b [T]);
crate::impl_arg_value!([T] Vec<T>);
crate::impl_arg_value!([T] VecDeque<T>);
crate::impl_arg_value!([T, S] HashSet<T, S>);
crate::impl_arg_value!([K, V, S] HashMap<K, V, S>);
crate::impl_arg_value!([T] BTreeSet<T>);
crate::impl_arg_value!([K, V] BTreeMap<K, V>);

impl<T, const N: usize> ArgValue for [T; N] {
    type Target = Self;

    #[inline]
    fn present(&self) -> Option<&Self> {
        Some(self)
    }
}

#[cfg(feature = "temporal")]
mod temporal {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

    crate::impl_arg_value!(NaiveDate, NaiveTime, NaiveDateTime, TimeDelta);
    crate::impl_arg_value!([Tz: TimeZone] DateTime<Tz>);
}

#[cfg(feature = "uuid")]
crate::impl_arg_value!(uuid::Uuid);

#[cfg(feature = "url")]
crate::impl_arg_value!(url::Url);

// ============================================================================
// COUNTABLE
// ============================================================================

/// A sequence with a countable number of elements.
///
/// Text counts Unicode scalar values; collections count elements.
pub trait Countable {
    /// The actual number of elements.
    fn count(&self) -> usize;

    /// Returns true if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Countable for str {
    #[inline]
    fn count(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Countable for String {
    #[inline]
    fn count(&self) -> usize {
        self.as_str().count()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T: Countable + ?Sized> Countable for &T {
    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Countable::is_empty(*self)
    }
}

impl<B: Countable + ToOwned + ?Sized> Countable for Cow<'_, B> {
    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<T: Countable + ?Sized> Countable for Box<T> {
    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<T: Countable + ?Sized> Countable for Arc<T> {
    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<T: Countable + ?Sized> Countable for Rc<T> {
    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }
}

macro_rules! countable_by_len {
    ($(<$($gen:ident),*> $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen),*> Countable for $ty {
                #[inline]
                fn count(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

countable_by_len!(
    <T> [T],
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T, S> HashSet<T, S>,
    <K, V, S> HashMap<K, V, S>,
    <T> BTreeSet<T>,
    <K, V> BTreeMap<K, V>,
);

impl<T, const N: usize> Countable for [T; N] {
    #[inline]
    fn count(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_present() {
        assert_eq!(5_i32.present(), Some(&5));
        assert_eq!("abc".present(), Some(&"abc"));
    }

    #[test]
    fn test_option_presence() {
        assert_eq!(Some(5_u8).present(), Some(&5));
        assert_eq!(None::<u8>.present(), None);
        assert_eq!(Some(None::<u8>).present(), None);
    }

    #[test]
    fn test_text_counts_chars() {
        assert_eq!("h\u{e9}llo".count(), 5);
        assert_eq!(String::from("\u{1f44b}\u{1f30d}").count(), 2);
        assert_eq!(Cow::Borrowed("abc").count(), 3);
    }

    #[test]
    fn test_collections_count_elements() {
        assert_eq!(vec![1, 2, 3].count(), 3);
        assert_eq!([1_u8; 4].count(), 4);
        assert_eq!((&[1, 2][..]).count(), 2);
        assert!(Countable::is_empty(&Vec::<i32>::new()));
    }
}
