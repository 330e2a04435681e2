//! The curry macro family for converting multi-argument functions to curried
//! form.
//!
//! Currying transforms a function that takes multiple arguments into a
//! sequence of functions, each taking a single argument. Arity is fixed at
//! macro expansion time, so there is no runtime probing to decide whether a
//! call "needs more arguments" - a partially applied function is simply a
//! closure awaiting the rest.
//!
//! The curried form is what bridges plain n-ary functions into
//! [`Monad::apply`](crate::typeclass::Monad::apply):
//! `pure(curry2!(f)).apply(a).apply(b)` feeds `f` one monadic argument at a
//! time and agrees with
//! [`Monad::lift_m2`](crate::typeclass::Monad::lift_m2).
//!
//! # Design Decisions
//!
//! The macros use `std::rc::Rc` internally to share the function and earlier
//! arguments across closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused
//! - Arguments that don't implement `Copy` to work correctly (they must
//!   implement `Clone`)
//!
//! The returned closures implement `Fn` and `Clone`, so they can live inside
//! monadic values.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and
/// returns another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types must implement [`Clone`] (for reusability of partial
///   applications)
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use funcrs::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Partial application
///
/// ```
/// use funcrs::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(double(7), 14);
/// ```
///
/// ## Feeding `apply` one argument at a time
///
/// ```
/// use funcrs::curry2;
/// use funcrs::data::{Just, Maybe};
/// use funcrs::typeclass::Monad;
///
/// let sum = <Maybe<()>>::pure(curry2!(|x: i32, y: i32| x + y))
///     .apply(Just(1))
///     .apply(Just(2));
/// assert_eq!(sum, Just(3));
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given a function `f(a, b, c) -> d`, returns nested closures that take one
/// argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funcrs::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use funcrs::curry4;
///
/// fn join(a: i32, b: i32, c: i32, d: i32) -> String {
///     format!("{a}{b}{c}{d}")
/// }
///
/// let curried = curry4!(join);
/// assert_eq!(curried(1)(2)(3)(4), "1234");
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// The deepest tier of the family, matching the 5-ary
/// [`Monad::lift_m5`](crate::typeclass::Monad::lift_m5).
///
/// # Examples
///
/// ```
/// use funcrs::curry5;
///
/// fn sum(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
///     a + b + c + d + e
/// }
///
/// let curried = curry5!(sum);
/// assert_eq!(curried(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        let function = ::std::rc::Rc::clone(&function);
                        let arg1 = ::std::rc::Rc::clone(&arg1);
                        let arg2 = ::std::rc::Rc::clone(&arg2);
                        let arg3 = ::std::rc::Rc::clone(&arg3);
                        let arg4 = ::std::rc::Rc::new(arg4);
                        move |arg5| {
                            function(
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                                ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg4)),
                                arg5,
                            )
                        }
                    }
                }
            }
        }
    }};
}
