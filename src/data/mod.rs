//! Concrete monadic data types.
//!
//! - [`Maybe`]: a value that is either a success ([`Just`]) or failure
//!   ([`Nothing`]), with short-circuiting `bind`
//! - [`List`]: an ordered sequence treated as a non-deterministic
//!   computation producing all of its elements
//!
//! Both types implement the [`Monad`](crate::typeclass::Monad) capability,
//! so `apply`, `then`, and the `lift_m` family come for free, and both work
//! with the generic traversals in [`control`](crate::control).

mod list;
mod maybe;

pub use list::List;
pub use maybe::{Just, Maybe, Nothing};
