//! Maybe - a value that is either a success (`Just`) or failure (`Nothing`).
//!
//! `Maybe<T>` models domain failure as a first-class value rather than an
//! exception: `bind` short-circuits on `Nothing` without invoking the
//! kleisli, so the absence of a successful branch propagates through an
//! entire chain.
//!
//! The variants are re-exported, so `Just(x)` and `Nothing` read as
//! constructors:
//!
//! ```rust
//! use funcrs::data::{Just, Maybe, Nothing};
//! use funcrs::typeclass::Monad;
//!
//! let present = Just(1).bind(|x| Just(x + 1));
//! assert_eq!(present, Just(2));
//!
//! let absent: Maybe<i32> = Nothing;
//! assert_eq!(absent.bind(|x| Just(x + 1)), Nothing);
//! ```

use std::fmt;

use crate::typeclass::Monad;

pub use self::Maybe::{Just, Nothing};

/// A value that is either a success (`Just`) or failure (`Nothing`).
///
/// Equality is structural: `Just(x) == Just(y)` iff `x == y`, and any two
/// `Nothing` values are equal. Extracting a value from `Nothing` is never
/// attempted - `bind` short-circuits instead.
///
/// # Examples
///
/// ```rust
/// use funcrs::data::{Just, Maybe, Nothing};
///
/// let found: Maybe<i32> = Just(2);
/// let missing: Maybe<i32> = Nothing;
/// assert_ne!(found, missing);
/// assert_eq!(found.to_string(), "Just 2");
/// assert_eq!(missing.to_string(), "Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absence of a value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Returns `true` if the value is `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe, Nothing};
    ///
    /// assert!(Just(1).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// Returns `true` if the value is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }
}

impl<T> Monad for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;

    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Just(value)
    }

    #[inline]
    fn bind<B, K>(self, kleisli: K) -> Maybe<B>
    where
        K: Fn(T) -> Maybe<B>,
    {
        match self {
            Just(value) => kleisli(value),
            Nothing => Nothing,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(value) => write!(formatter, "Just {value}"),
            Nothing => write!(formatter, "Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, PartialEq, Eq, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_wraps_in_just() {
        assert_eq!(<Maybe<()>>::pure(2), Just(2));
    }

    #[rstest]
    fn bind_applies_kleisli_to_just() {
        assert_eq!(Just(1).bind(|x| Just(x + 1)), Just(2));
    }

    #[rstest]
    fn bind_short_circuits_nothing() {
        let absent: Maybe<i32> = Nothing;
        let mut_witness = std::cell::Cell::new(false);
        let result = absent.bind(|x| {
            mut_witness.set(true);
            Just(x + 1)
        });
        assert_eq!(result, Nothing);
        assert!(!mut_witness.get(), "kleisli must not run on Nothing");
    }

    #[rstest]
    fn equality_is_structural() {
        assert_eq!(Just(2), Just(2));
        assert_ne!(Just(2), Just(3));
        assert_ne!(Just(2), Nothing);
        assert_eq!(Maybe::<i32>::Nothing, Nothing);
    }

    #[rstest]
    #[case(Just(2), "Just 2")]
    #[case(Nothing, "Nothing")]
    fn display_matches_constructor(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn option_round_trip() {
        assert_eq!(Maybe::from(Some(5)), Just(5));
        assert_eq!(Maybe::<i32>::from(None), Nothing);
        assert_eq!(Option::from(Just(5)), Some(5));
        assert_eq!(Option::<i32>::from(Maybe::Nothing), None);
    }

    #[rstest]
    fn predicates_report_variant() {
        assert!(Just(1).is_just());
        assert!(Maybe::<i32>::Nothing.is_nothing());
    }
}
