//! # funcrs
//!
//! A small functional programming library for Rust built around a single
//! generic monad capability.
//!
//! ## Overview
//!
//! The crate provides:
//!
//! - **Type Classes**: a GAT-based [`Monad`](typeclass::Monad) trait whose
//!   derived operations (`apply`, `then`, `lift_m` through `lift_m5`) are
//!   written once in terms of `pure` and `bind`, plus
//!   [`Semigroup`](typeclass::Semigroup) and [`Monoid`](typeclass::Monoid)
//! - **Data Types**: [`Maybe`](data::Maybe) (optional results) and
//!   [`List`](data::List) (non-deterministic choice)
//! - **Effects**: the [`Writer`](effect::Writer) monad family, one generic
//!   type parameterized by the log monoid
//! - **Monadic Traversals**: [`filter_m`](control::filter_m) and
//!   [`map_m`](control::map_m), generic over any monad
//! - **Function Composition**: `curry2!` through `curry5!` macros and
//!   function arity inspection
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (Monad, Semigroup, Monoid)
//! - `compose`: currying and arity utilities
//! - `data`: Maybe and List
//! - `effect`: the Writer monad family
//! - `control`: generic monadic traversals
//!
//! ## Example
//!
//! ```rust
//! use funcrs::data::Just;
//! use funcrs::typeclass::Monad;
//!
//! let result = Just(1).bind(|x| Just(x + 1));
//! assert_eq!(result, Just(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funcrs::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "control")]
pub mod control;
