//! Control structures built on the monad capability.
//!
//! Home of the generic monadic traversals: [`filter_m`] (monadic filter)
//! and [`map_m`] (monadic map), written once against
//! [`Monad`](crate::typeclass::Monad) and instantiated by whichever
//! concrete monad the supplied function returns.

mod traverse;

pub use traverse::{filter_m, map_m};
