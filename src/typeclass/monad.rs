//! Monad type class - sequencing computations within a context.
//!
//! This module provides the [`Monad`] trait, the single capability contract
//! of the crate: implementers supply `pure` (embed a value in the minimal
//! context) and `bind` (sequence a dependent computation), and every derived
//! operation - `apply`, `then`, `lift_m` through `lift_m5` - comes for free,
//! written once in terms of those two methods.
//!
//! # Higher-Kinded Types Emulation
//!
//! Rust does not natively support Higher-Kinded Types: we cannot write a
//! trait that abstracts over `Maybe<_>` and `List<_>` as type constructors.
//! This trait emulates HKT with a Generic Associated Type: `Inner` is the
//! type the constructor is currently applied to, and `WithType<B>` is the
//! same constructor applied to `B`. For `Maybe<i32>`, `Inner` is `i32` and
//! `WithType<String>` is `Maybe<String>`.
//!
//! The `WithType<B>: Monad<Inner = B>` bound guarantees that re-applying the
//! constructor always lands back inside the capability, which is what lets
//! generic code (such as [`filter_m`](crate::control::filter_m)) chain
//! `pure` and `bind` at several inner types without knowing the concrete
//! monad.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the
//! function:
//!
//! ```text
//! Self::pure(a).bind(k) == k(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` returns the original monad:
//!
//! ```text
//! m.bind(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.bind(k1).bind(k2) == m.bind(|x| k1(x).bind(k2))
//! ```
//!
//! When the laws hold, every derived operation is correct automatically -
//! there is no per-type logic to duplicate.
//!
//! # Examples
//!
//! ```rust
//! use funcrs::data::{Just, Maybe, Nothing};
//! use funcrs::typeclass::Monad;
//!
//! // Chaining computations that may fail
//! let result = Just(5).bind(|n| if n > 0 { Just(n * 2) } else { Nothing });
//! assert_eq!(result, Just(10));
//!
//! // Failure short-circuits the chain
//! let none: Maybe<i32> = Nothing;
//! assert_eq!(none.bind(|n| Just(n * 2)), Nothing);
//! ```

/// A type class for types that support embedding values and sequencing
/// computations.
///
/// A kleisli function is a function from a plain value to a monadic value
/// (`T -> M<S>`); `bind` threads a monadic value through one, with the
/// monad-specific effect (short-circuiting, branching, log accumulation)
/// determined entirely by the implementation.
///
/// # Implementing
///
/// A conforming type provides `Inner`, `WithType`, `pure`, and `bind`. The
/// `bind` kleisli takes its argument by value and must be callable multiple
/// times (`Fn`), because branching monads such as
/// [`List`](crate::data::List) invoke it once per element.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).bind(k) == k(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.bind(pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.bind(k1).bind(k2) == m.bind(|x| k1(x).bind(k2))
/// ```
///
/// # Examples
///
/// ```rust
/// use funcrs::data::{Just, Maybe};
/// use funcrs::typeclass::Monad;
///
/// let x: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(x, Just(42));
///
/// let y = Just(5).bind(|n| Just(n + 1));
/// assert_eq!(y, Just(6));
/// ```
pub trait Monad {
    /// The inner type this constructor is currently applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`. The
    /// `Monad<Inner = B>` bound keeps re-application inside the capability.
    type WithType<B>: Monad<Inner = B>;

    /// Embeds a plain value in the minimal context of the monad.
    ///
    /// For `Maybe` this is `Just(value)`, for `List` a one-element list,
    /// for `Writer` a value paired with the empty log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, List, Maybe};
    /// use funcrs::typeclass::Monad;
    ///
    /// assert_eq!(<Maybe<()>>::pure(2), Just(2));
    /// assert_eq!(<List<()>>::pure(2), List::from(vec![2]));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Passes the monadic value to a kleisli function, sequencing the
    /// computation.
    ///
    /// This is Haskell's `>>=`. The kleisli receives the inner value and
    /// returns a new monadic value; the implementation decides how context
    /// is threaded (short-circuit, fan-out, log accumulation).
    ///
    /// # Arguments
    ///
    /// * `kleisli` - A function from the inner value to a monadic value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe, Nothing};
    /// use funcrs::typeclass::Monad;
    ///
    /// assert_eq!(Just(1).bind(|x| Just(x + 1)), Just(2));
    ///
    /// let none: Maybe<i32> = Nothing;
    /// assert_eq!(none.bind(|x| Just(x + 1)), Nothing);
    /// ```
    fn bind<B, K>(self, kleisli: K) -> Self::WithType<B>
    where
        Self: Sized,
        K: Fn(Self::Inner) -> Self::WithType<B>;

    // =========================================================================
    // Derived operations - every method below is expressed only in terms of
    // `pure` and `bind`, so implementers get them for free.
    // =========================================================================

    /// Applies a function held inside the monad to a value held inside the
    /// monad.
    ///
    /// This is Haskell's `<*>` (`ap`), derived from `pure`/`bind`: bind the
    /// function out of `self`, bind the argument out of `value`, and embed
    /// the application. With a curried function (see
    /// [`curry2!`](crate::curry2)), repeated `apply` calls feed an n-ary
    /// function one monadic argument at a time.
    ///
    /// # Arguments
    ///
    /// * `value` - A monadic value to apply the contained function to
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe, Nothing};
    /// use funcrs::typeclass::Monad;
    ///
    /// let result = <Maybe<()>>::pure(|x: i32| x + 1).apply(Just(1));
    /// assert_eq!(result, Just(2));
    ///
    /// let none: Maybe<i32> = Nothing;
    /// let result = <Maybe<()>>::pure(|x: i32| x + 1).apply(none);
    /// assert_eq!(result, Nothing);
    /// ```
    fn apply<B, C>(self, value: Self::WithType<B>) -> Self::WithType<C>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> C,
        Self::WithType<B>: Monad<Inner = B, WithType<C> = Self::WithType<C>> + Clone,
    {
        self.bind(move |function| {
            value
                .clone()
                .bind::<C, _>(move |argument| Self::pure(function(argument)))
        })
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// This is Haskell's `>>`. The first computation's effect (failure,
    /// branching, log) still applies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe, Nothing};
    /// use funcrs::typeclass::Monad;
    ///
    /// assert_eq!(Just(1).then(Just("ok")), Just("ok"));
    ///
    /// let none: Maybe<i32> = Nothing;
    /// assert_eq!(none.then(Just("ok")), Nothing);
    /// ```
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.bind(move |_| next.clone())
    }

    /// Lifts a plain unary function into the monadic context.
    ///
    /// This is `fmap` expressed through the monad capability:
    /// `pure(function).apply(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe, Nothing};
    /// use funcrs::typeclass::Monad;
    ///
    /// assert_eq!(<Maybe<()>>::lift_m(|x: i32| x + 1, Just(1)), Just(2));
    ///
    /// let none: Maybe<i32> = Nothing;
    /// assert_eq!(<Maybe<()>>::lift_m(|x: i32| x + 1, none), Nothing);
    /// ```
    fn lift_m<A, B, F>(function: F, value: Self::WithType<A>) -> Self::WithType<B>
    where
        F: Fn(A) -> B,
        Self::WithType<F>:
            Monad<Inner = F, WithType<A> = Self::WithType<A>, WithType<B> = Self::WithType<B>>,
        Self::WithType<A>: Monad<Inner = A, WithType<B> = Self::WithType<B>> + Clone,
    {
        Self::pure(function).apply(value)
    }

    /// Lifts a plain binary function into the monadic context.
    ///
    /// Derived from `pure`/`bind` as the do-notation expansion
    /// `a.bind(|x| b.bind(|y| pure(f(x, y))))`; equivalent to
    /// `pure(curry2!(f)).apply(a).apply(b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe, Nothing};
    /// use funcrs::typeclass::Monad;
    ///
    /// let sum = <Maybe<()>>::lift_m2(|x, y| x + y, Just(1), Just(2));
    /// assert_eq!(sum, Just(3));
    ///
    /// let none: Maybe<i32> = Nothing;
    /// let sum = <Maybe<()>>::lift_m2(|x, y| x + y, Just(1), none);
    /// assert_eq!(sum, Nothing);
    /// ```
    fn lift_m2<A, B, C, F>(
        function: F,
        first: Self::WithType<A>,
        second: Self::WithType<B>,
    ) -> Self::WithType<C>
    where
        F: Fn(A, B) -> C + Clone,
        A: Clone,
        Self::WithType<A>: Monad<Inner = A, WithType<C> = Self::WithType<C>>,
        Self::WithType<B>: Monad<Inner = B, WithType<C> = Self::WithType<C>> + Clone,
    {
        first.bind::<C, _>(move |first_value| {
            let function = function.clone();
            second.clone().bind::<C, _>(move |second_value| {
                Self::pure(function(first_value.clone(), second_value))
            })
        })
    }

    /// Lifts a plain ternary function into the monadic context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe};
    /// use funcrs::typeclass::Monad;
    ///
    /// let sum = <Maybe<()>>::lift_m3(|x, y, z| x + y + z, Just(1), Just(2), Just(3));
    /// assert_eq!(sum, Just(6));
    /// ```
    fn lift_m3<A, B, C, D, F>(
        function: F,
        first: Self::WithType<A>,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
    ) -> Self::WithType<D>
    where
        F: Fn(A, B, C) -> D + Clone,
        A: Clone,
        B: Clone,
        Self::WithType<A>: Monad<Inner = A, WithType<D> = Self::WithType<D>>,
        Self::WithType<B>: Monad<Inner = B, WithType<D> = Self::WithType<D>> + Clone,
        Self::WithType<C>: Monad<Inner = C, WithType<D> = Self::WithType<D>> + Clone,
    {
        first.bind::<D, _>(move |first_value| {
            let function = function.clone();
            let third = third.clone();
            second.clone().bind::<D, _>(move |second_value| {
                let function = function.clone();
                let first_value = first_value.clone();
                third.clone().bind::<D, _>(move |third_value| {
                    Self::pure(function(
                        first_value.clone(),
                        second_value.clone(),
                        third_value,
                    ))
                })
            })
        })
    }

    /// Lifts a plain 4-ary function into the monadic context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe};
    /// use funcrs::typeclass::Monad;
    ///
    /// let sum = <Maybe<()>>::lift_m4(
    ///     |a, b, c, d| a + b + c + d,
    ///     Just(1),
    ///     Just(2),
    ///     Just(3),
    ///     Just(4),
    /// );
    /// assert_eq!(sum, Just(10));
    /// ```
    fn lift_m4<A, B, C, D, E, F>(
        function: F,
        first: Self::WithType<A>,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        fourth: Self::WithType<D>,
    ) -> Self::WithType<E>
    where
        F: Fn(A, B, C, D) -> E + Clone,
        A: Clone,
        B: Clone,
        C: Clone,
        Self::WithType<A>: Monad<Inner = A, WithType<E> = Self::WithType<E>>,
        Self::WithType<B>: Monad<Inner = B, WithType<E> = Self::WithType<E>> + Clone,
        Self::WithType<C>: Monad<Inner = C, WithType<E> = Self::WithType<E>> + Clone,
        Self::WithType<D>: Monad<Inner = D, WithType<E> = Self::WithType<E>> + Clone,
    {
        first.bind::<E, _>(move |first_value| {
            let function = function.clone();
            let third = third.clone();
            let fourth = fourth.clone();
            second.clone().bind::<E, _>(move |second_value| {
                let function = function.clone();
                let first_value = first_value.clone();
                let fourth = fourth.clone();
                third.clone().bind::<E, _>(move |third_value| {
                    let function = function.clone();
                    let first_value = first_value.clone();
                    let second_value = second_value.clone();
                    fourth.clone().bind::<E, _>(move |fourth_value| {
                        Self::pure(function(
                            first_value.clone(),
                            second_value.clone(),
                            third_value.clone(),
                            fourth_value,
                        ))
                    })
                })
            })
        })
    }

    /// Lifts a plain 5-ary function into the monadic context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::data::{Just, Maybe};
    /// use funcrs::typeclass::Monad;
    ///
    /// let sum = <Maybe<()>>::lift_m5(
    ///     |a, b, c, d, e| a + b + c + d + e,
    ///     Just(1),
    ///     Just(2),
    ///     Just(3),
    ///     Just(4),
    ///     Just(5),
    /// );
    /// assert_eq!(sum, Just(15));
    /// ```
    fn lift_m5<A, B, C, D, E, G, F>(
        function: F,
        first: Self::WithType<A>,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        fourth: Self::WithType<D>,
        fifth: Self::WithType<E>,
    ) -> Self::WithType<G>
    where
        F: Fn(A, B, C, D, E) -> G + Clone,
        A: Clone,
        B: Clone,
        C: Clone,
        D: Clone,
        Self::WithType<A>: Monad<Inner = A, WithType<G> = Self::WithType<G>>,
        Self::WithType<B>: Monad<Inner = B, WithType<G> = Self::WithType<G>> + Clone,
        Self::WithType<C>: Monad<Inner = C, WithType<G> = Self::WithType<G>> + Clone,
        Self::WithType<D>: Monad<Inner = D, WithType<G> = Self::WithType<G>> + Clone,
        Self::WithType<E>: Monad<Inner = E, WithType<G> = Self::WithType<G>> + Clone,
    {
        first.bind::<G, _>(move |first_value| {
            let function = function.clone();
            let third = third.clone();
            let fourth = fourth.clone();
            let fifth = fifth.clone();
            second.clone().bind::<G, _>(move |second_value| {
                let function = function.clone();
                let first_value = first_value.clone();
                let fourth = fourth.clone();
                let fifth = fifth.clone();
                third.clone().bind::<G, _>(move |third_value| {
                    let function = function.clone();
                    let first_value = first_value.clone();
                    let second_value = second_value.clone();
                    let fifth = fifth.clone();
                    fourth.clone().bind::<G, _>(move |fourth_value| {
                        let function = function.clone();
                        let first_value = first_value.clone();
                        let second_value = second_value.clone();
                        let third_value = third_value.clone();
                        fifth.clone().bind::<G, _>(move |fifth_value| {
                            Self::pure(function(
                                first_value.clone(),
                                second_value.clone(),
                                third_value.clone(),
                                fourth_value.clone(),
                                fifth_value,
                            ))
                        })
                    })
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::Identity;
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_identity_law() {
        let kleisli = |x: i32| Identity(x * x);
        assert_eq!(<Identity<()>>::pure(11).bind(kleisli), kleisli(11));
    }

    #[rstest]
    fn right_identity_law() {
        let monad = Identity(11);
        assert_eq!(monad.clone().bind(|x| <Identity<()>>::pure(x)), monad);
    }

    #[rstest]
    fn associativity_law() {
        let kleisli1 = |x: i32| Identity(x * x);
        let kleisli2 = |x: i32| Identity(-x);
        let left = Identity(11).bind(kleisli1).bind(kleisli2);
        let right = Identity(11).bind(|x| kleisli1(x).bind(kleisli2));
        assert_eq!(left, right);
    }

    #[rstest]
    fn apply_feeds_contained_function() {
        let result = <Identity<()>>::pure(|x: i32| x + 1).apply(Identity(41));
        assert_eq!(result, Identity(42));
    }

    #[rstest]
    fn then_discards_first_result() {
        assert_eq!(Identity(1).then(Identity("next")), Identity("next"));
    }

    #[rstest]
    fn lift_m_maps_unary_function() {
        assert_eq!(
            <Identity<()>>::lift_m(|x: i32| x.to_string(), Identity(7)),
            Identity(String::from("7"))
        );
    }

    #[rstest]
    fn lift_m2_combines_two_values() {
        let result = <Identity<()>>::lift_m2(|x, y| x + y, Identity(1), Identity(2));
        assert_eq!(result, Identity(3));
    }

    #[rstest]
    fn lift_m3_combines_three_values() {
        let result =
            <Identity<()>>::lift_m3(|x, y, z| x + y + z, Identity(1), Identity(2), Identity(3));
        assert_eq!(result, Identity(6));
    }

    #[rstest]
    fn lift_m4_combines_four_values() {
        let result = <Identity<()>>::lift_m4(
            |a, b, c, d| a + b + c + d,
            Identity(1),
            Identity(2),
            Identity(3),
            Identity(4),
        );
        assert_eq!(result, Identity(10));
    }

    #[rstest]
    fn lift_m5_combines_five_values() {
        let result = <Identity<()>>::lift_m5(
            |a, b, c, d, e| a + b + c + d + e,
            Identity(1),
            Identity(2),
            Identity(3),
            Identity(4),
            Identity(5),
        );
        assert_eq!(result, Identity(15));
    }

    #[rstest]
    fn lift_m2_with_mixed_types() {
        let result = <Identity<()>>::lift_m2(
            |count: usize, label: &str| format!("{label}: {count}"),
            Identity(3),
            Identity("items"),
        );
        assert_eq!(result, Identity(String::from("items: 3")));
    }
}
