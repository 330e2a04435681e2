//! Generic monadic traversals - mapping and filtering with effects.
//!
//! [`filter_m`] and [`map_m`] apply an effectful function to each element of
//! a sequence while collecting the results inside the effect. They are
//! written once against the [`Monad`](crate::typeclass::Monad) capability
//! and work identically across `Maybe`, `List`, and `Writer`: both fold the
//! input from a `pure(vec![])` seed, appending through `lift_m2` so the
//! append itself happens inside the monadic context.
//!
//! The concrete monad is fixed by the return type of the supplied function;
//! there is no runtime type discovery. A consequence the dynamic original
//! of this design could not offer: the empty input is well defined and
//! yields `pure(vec![])`.
//!
//! # Examples
//!
//! ```rust
//! use funcrs::control::{filter_m, map_m};
//! use funcrs::data::{Just, Nothing};
//!
//! // All predicate evaluations succeed: the kept items come back in order.
//! let kept = filter_m(|&x: &i32| Just(x > 5), vec![2, 4, 6, 8, 10]);
//! assert_eq!(kept, Just(vec![6, 8, 10]));
//!
//! // Any failing evaluation fails the whole traversal.
//! let failed = map_m(
//!     |x: i32| if x > 1 { Nothing } else { Just(x.to_string()) },
//!     vec![1, 2, 3],
//! );
//! assert_eq!(failed, Nothing);
//! ```

use crate::typeclass::Monad;

/// Filters a sequence with a monadic predicate.
///
/// For each item the predicate produces a monadic boolean; the fold keeps
/// the item only when the boolean payload is true, appending *within* the
/// monadic context via `lift_m2`. If any predicate evaluation is itself
/// failing (e.g. `Nothing`), the whole result is failing.
///
/// For `List`, a predicate producing several booleans per item enumerates
/// every inclusion/exclusion combination - all 2^n subsets, in
/// binary-counting order.
///
/// # Arguments
///
/// * `predicate` - A function from an item reference to a monadic boolean
/// * `items` - The sequence to filter
///
/// # Examples
///
/// ```rust
/// use funcrs::control::filter_m;
/// use funcrs::data::{Just, Nothing};
///
/// let kept = filter_m(|&x: &i32| Just(x > 5), vec![2, 4, 6, 8, 10]);
/// assert_eq!(kept, Just(vec![6, 8, 10]));
///
/// let failed = filter_m(
///     |&x: &i32| if x > 5 { Nothing } else { Just(false) },
///     vec![2, 4, 6, 8, 10],
/// );
/// assert_eq!(failed, Nothing);
/// ```
///
/// Powerset-style non-determinism with `List`:
///
/// ```rust
/// use funcrs::control::filter_m;
/// use funcrs::data::List;
///
/// let subsets = filter_m(|_: &i32| List::from(vec![true, false]), vec![1, 2, 3]);
/// assert_eq!(
///     subsets,
///     List::from(vec![
///         vec![1, 2, 3],
///         vec![2, 3],
///         vec![1, 3],
///         vec![3],
///         vec![1, 2],
///         vec![2],
///         vec![1],
///         vec![],
///     ])
/// );
/// ```
pub fn filter_m<M, T, I, P>(predicate: P, items: I) -> M::WithType<Vec<T>>
where
    M: Monad<Inner = bool>,
    T: Clone,
    I: IntoIterator<Item = T>,
    P: Fn(&T) -> M,
    M::WithType<Vec<T>>: Monad<Inner = Vec<T>, WithType<Vec<T>> = M::WithType<Vec<T>>> + Clone,
    M::WithType<T>: Monad<Inner = T, WithType<Vec<T>> = M::WithType<Vec<T>>> + Clone,
{
    items
        .into_iter()
        .fold(M::pure(Vec::new()), |accumulated, item| {
            let verdict = predicate(&item);
            verdict.bind(move |keep| {
                if keep {
                    M::lift_m2(
                        |mut kept: Vec<T>, value: T| {
                            kept.push(value);
                            kept
                        },
                        accumulated.clone(),
                        M::pure(item.clone()),
                    )
                } else {
                    accumulated.clone()
                }
            })
        })
}

/// Maps a kleisli function over a sequence, collecting the results inside
/// the monad.
///
/// Each `kleisli(item)` result is appended to the accumulator via
/// `lift_m2`, so the traversal short-circuits (or branches, or logs) per
/// the concrete monad's `bind` semantics: one `Nothing` makes the whole
/// result `Nothing`, and a `Writer` kleisli's logs concatenate across items
/// in order.
///
/// # Arguments
///
/// * `kleisli` - A function from an item to a monadic result
/// * `items` - The sequence to traverse
///
/// # Examples
///
/// ```rust
/// use funcrs::control::map_m;
/// use funcrs::data::{Just, Nothing};
///
/// let mapped = map_m(|x: i32| Just(x.to_string()), vec![1, 2, 3, 4, 5]);
/// assert_eq!(
///     mapped,
///     Just(vec![
///         String::from("1"),
///         String::from("2"),
///         String::from("3"),
///         String::from("4"),
///         String::from("5"),
///     ])
/// );
///
/// let failed = map_m(
///     |x: i32| if x > 1 { Nothing } else { Just(x.to_string()) },
///     vec![1, 2, 3, 4, 5],
/// );
/// assert_eq!(failed, Nothing);
/// ```
pub fn map_m<M, T, S, I, K>(kleisli: K, items: I) -> M::WithType<Vec<S>>
where
    M: Monad<Inner = S, WithType<S> = M> + Clone,
    S: Clone,
    I: IntoIterator<Item = T>,
    K: Fn(T) -> M,
    M::WithType<Vec<S>>: Monad<Inner = Vec<S>, WithType<Vec<S>> = M::WithType<Vec<S>>> + Clone,
{
    items
        .into_iter()
        .fold(M::pure(Vec::new()), |accumulated, item| {
            M::lift_m2(
                |mut collected: Vec<S>, value: S| {
                    collected.push(value);
                    collected
                },
                accumulated,
                kleisli(item),
            )
        })
}
