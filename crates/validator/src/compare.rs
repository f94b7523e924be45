//! Comparison strategies injectable into constraints
//!
//! Ordering and equality constraints have a `*_with` variant taking
//! `Option<&dyn Comparer<T>>` or `Option<&dyn EqualityComparer<T>>`.
//! `None` selects the type's own `PartialOrd` / `PartialEq`; the plain
//! variants are exactly the `None` case.
//!
//! Closures implement both traits:
//!
//! ```
//! use argus_validator::prelude::*;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! let word = Arg::is("pear", "word")
//!     .less_than_with("banana", Some(&by_len))
//!     .unwrap();
//! assert_eq!(word.into_value(), "pear");
//! ```

use std::cmp::Ordering;

/// An ordering strategy for `T`.
pub trait Comparer<T: ?Sized> {
    /// Orders `left` relative to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// An equality strategy for `T`.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns true if `left` and `right` are equal.
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Orders `left` against `right` with `comparer`, falling back to
/// `PartialOrd`. Incomparable values (e.g. NaN) yield `None`.
#[inline]
pub(crate) fn order<T: PartialOrd>(
    left: &T,
    right: &T,
    comparer: Option<&dyn Comparer<T>>,
) -> Option<Ordering> {
    match comparer {
        Some(comparer) => Some(comparer.compare(left, right)),
        None => left.partial_cmp(right),
    }
}

/// Tests equality with `comparer`, falling back to `PartialEq`.
#[inline]
pub(crate) fn equal<T: PartialEq>(
    left: &T,
    right: &T,
    comparer: Option<&dyn EqualityComparer<T>>,
) -> bool {
    match comparer {
        Some(comparer) => comparer.equals(left, right),
        None => left == right,
    }
}

// ============================================================================
// STRING COMPARISON
// ============================================================================

/// How text constraints compare strings.
///
/// `IgnoreCase` compares one source character against one source character
/// through their full lowercase mappings, independent of any locale. Match
/// boundaries therefore always fall between source characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringComparison {
    /// Exact scalar-value comparison.
    #[default]
    Ordinal,
    /// Character-wise comparison after lowercasing.
    IgnoreCase,
}

impl StringComparison {
    /// Returns true if the strings are equal under this comparison.
    #[must_use]
    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            Self::Ordinal => left == right,
            Self::IgnoreCase => same_chars(&chars(left), &chars(right)),
        }
    }

    /// Returns true if `haystack` starts with `prefix`.
    #[must_use]
    pub fn starts_with(self, haystack: &str, prefix: &str) -> bool {
        match self {
            Self::Ordinal => haystack.starts_with(prefix),
            Self::IgnoreCase => {
                let (haystack, prefix) = (chars(haystack), chars(prefix));
                haystack
                    .get(..prefix.len())
                    .is_some_and(|head| same_chars(head, &prefix))
            }
        }
    }

    /// Returns true if `haystack` ends with `suffix`.
    #[must_use]
    pub fn ends_with(self, haystack: &str, suffix: &str) -> bool {
        match self {
            Self::Ordinal => haystack.ends_with(suffix),
            Self::IgnoreCase => {
                let (haystack, suffix) = (chars(haystack), chars(suffix));
                haystack
                    .len()
                    .checked_sub(suffix.len())
                    .is_some_and(|start| same_chars(&haystack[start..], &suffix))
            }
        }
    }

    /// Returns true if `haystack` contains `needle`.
    #[must_use]
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Ordinal => haystack.contains(needle),
            Self::IgnoreCase => {
                let (haystack, needle) = (chars(haystack), chars(needle));
                needle.is_empty()
                    || haystack
                        .windows(needle.len())
                        .any(|window| same_chars(window, &needle))
            }
        }
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn same_chars(left: &[char], right: &[char]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(&l, &r)| l == r || l.to_lowercase().eq(r.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_defaults_to_partial_ord() {
        assert_eq!(order(&1, &2, None), Some(Ordering::Less));
        assert_eq!(order(&f64::NAN, &1.0, None), None);
    }

    #[test]
    fn test_order_uses_comparer() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(order(&1, &2, Some(&reversed)), Some(Ordering::Greater));
    }

    #[test]
    fn test_equal_uses_comparer() {
        let always = |_: &i32, _: &i32| true;
        assert!(equal(&1, &2, Some(&always)));
        assert!(!equal(&1, &2, None));
    }

    #[test]
    fn test_ordinal() {
        let cmp = StringComparison::Ordinal;
        assert!(cmp.equals("abc", "abc"));
        assert!(!cmp.equals("abc", "ABC"));
        assert!(cmp.starts_with("abc", "ab"));
        assert!(cmp.ends_with("abc", "bc"));
        assert!(cmp.contains("abc", "b"));
    }

    #[test]
    fn test_ignore_case() {
        let cmp = StringComparison::IgnoreCase;
        assert!(cmp.equals("Stra\u{df}e", "STRA\u{df}E"));
        assert!(cmp.starts_with("Hello", "hE"));
        assert!(!cmp.starts_with("He", "hello"));
        assert!(cmp.ends_with("Hello", "LLO"));
        assert!(!cmp.ends_with("lo", "hello"));
        assert!(cmp.contains("Hello", "ELL"));
        assert!(cmp.contains("Hello", ""));
        assert!(!cmp.contains("Hello", "xyz"));
    }

    #[test]
    fn test_ignore_case_keeps_char_boundaries() {
        let cmp = StringComparison::IgnoreCase;
        assert!(!cmp.ends_with("\u{130}", "\u{307}"));
        assert!(!cmp.starts_with("\u{130}x", "i"));
        assert!(!cmp.contains("a\u{130}b", "\u{307}B"));
        assert!(!cmp.equals("\u{130}", "i\u{307}"));

        assert!(cmp.equals("\u{130}", "\u{130}"));
        assert!(cmp.contains("x\u{130}y", "\u{130}Y"));
        assert!(cmp.ends_with("caf\u{c9}", "\u{e9}"));
    }
}
