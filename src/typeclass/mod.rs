//! Type class traits for functional programming abstractions.
//!
//! This module provides the traits that form the foundation of the crate:
//!
//! - [`Monad`]: the capability contract - `pure` and `bind`, with `apply`,
//!   `then`, and `lift_m` through `lift_m5` derived from them
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). The
//! [`Monad`] trait uses a Generic Associated Type (`WithType<B>`) to emulate
//! HKT behavior, allowing `pure`, `bind`, and the derived operations to be
//! defined generically over `Maybe`, `List`, and `Writer` alike.
//!
//! ## Algebraic Structures
//!
//! - [`Semigroup`]: types with an associative `combine`
//! - [`Monoid`]: semigroups with an `empty` identity element
//! - [`Sum`], [`Product`]: numeric wrappers selecting the additive or
//!   multiplicative monoid for one carrier type
//!
//! # Examples
//!
//! ## Using Monad
//!
//! ```rust
//! use funcrs::data::{Just, Maybe};
//! use funcrs::typeclass::Monad;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Just(42));
//!
//! let sum = <Maybe<()>>::lift_m2(|x, y| x + y, Just(1), Just(2));
//! assert_eq!(sum, Just(3));
//! ```
//!
//! ## Using Semigroup and Monoid
//!
//! ```rust
//! use funcrs::typeclass::{Monoid, Semigroup, Sum};
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
