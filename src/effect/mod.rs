//! Effectful computation types.
//!
//! Currently this is the [`Writer`] monad family: one generic type
//! parameterized by the log [`Monoid`](crate::typeclass::Monoid), with
//! aliases fixing the four stock log carriers ([`WriterStr`],
//! [`WriterList`], [`WriterSum`], [`WriterProd`]).

mod writer;

pub use writer::{Writer, WriterList, WriterProd, WriterStr, WriterSum};
