//! Function composition utilities.
//!
//! This module provides the currying support used to bridge plain n-ary
//! functions into the monad capability, plus function arity inspection:
//!
//! - [`curry2!`](crate::curry2) through [`curry5!`](crate::curry5): convert
//!   a multi-argument function into nested single-argument closures
//! - [`num_args`] / [`FnArity`]: report a function's declared parameter
//!   count from its type
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use funcrs::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let curried_add = curry2!(add);
//! let add_five = curried_add(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Arity inspection
//!
//! ```
//! use funcrs::compose::num_args;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! assert_eq!(num_args(&(add as fn(i32, i32) -> i32)), 2);
//! ```

mod arity;
mod curry_macro;

pub use arity::{FnArity, num_args};
