//! Writer Monad - computation with accumulated output.
//!
//! The Writer monad represents computations that produce a value along with
//! accumulated output (logs, counters, traces). A `Writer<W, A>`
//! encapsulates a pair `(A, W)`, where `A` is the result type and `W` is the
//! output type. The output type must implement
//! [`Monoid`](crate::typeclass::Monoid): `pure` starts from the monoid
//! identity and `bind` combines outputs left-to-right while threading the
//! value.
//!
//! One generic type covers the whole family; the aliases pick the log
//! monoid:
//!
//! - [`WriterStr`]: string concatenation (`""`, `+`)
//! - [`WriterList`]: sequence concatenation (`[]`, `+`)
//! - [`WriterSum`]: numeric sum (`0`, `+`)
//! - [`WriterProd`]: numeric product (`1`, `*`)
//!
//! # Laws
//!
//! Writer satisfies the Monad laws, plus the MonadWriter-specific laws:
//!
//! - Tell Monoid Law: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//! - Listen Tell Law: `listen(tell(w))` captures the output correctly
//! - Censor Definition: `censor(f, m) == pass(m.bind(|a| pure((a, f))))`
//!
//! # Examples
//!
//! Logging pattern:
//!
//! ```rust
//! use funcrs::effect::{Writer, WriterList};
//! use funcrs::typeclass::Monad;
//!
//! let computation = <WriterList<String, ()>>::pure(5)
//!     .bind(|x| Writer::new(x + 1, vec![String::from("Added 1")]))
//!     .bind(|x| Writer::new(x + 2, vec![String::from("Added 2")]));
//!
//! let (result, log) = computation.run();
//! assert_eq!(result, 8);
//! assert_eq!(log, vec!["Added 1", "Added 2"]);
//! ```

use std::fmt;

use crate::typeclass::{Monad, Monoid, Product, Semigroup, Sum};

/// A monad for computations that produce accumulated output alongside a
/// result.
///
/// `Writer<W, A>` represents a computation producing a value of type `A`
/// while accumulating output of type `W`. The output type must be a
/// [`Monoid`] so sequential outputs can be combined.
///
/// # Type Parameters
///
/// - `W`: The output type (must implement `Monoid`)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use funcrs::effect::Writer;
/// use funcrs::typeclass::Monad;
///
/// let computation: Writer<Vec<String>, i32> =
///     Writer::tell(vec![String::from("log")]).then(<Writer<Vec<String>, ()>>::pure(42));
///
/// let (result, output) = computation.run();
/// assert_eq!(result, 42);
/// assert_eq!(output, vec!["log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A>
where
    W: Monoid,
{
    /// The result value.
    result: A,
    /// The accumulated output.
    output: W,
}

/// Writer whose log is a `String` under concatenation.
pub type WriterStr<A> = Writer<String, A>;

/// Writer whose log is a `Vec<L>` under concatenation.
pub type WriterList<L, A> = Writer<Vec<L>, A>;

/// Writer whose log is a number under addition.
pub type WriterSum<N, A> = Writer<Sum<N>, A>;

/// Writer whose log is a number under multiplication.
pub type WriterProd<N, A> = Writer<Product<N>, A>;

impl<W, A> Writer<W, A>
where
    W: Monoid,
{
    /// Creates a new Writer with the given result and output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::WriterStr;
    ///
    /// let writer = WriterStr::new(42, String::from("initial"));
    /// let (result, output) = writer.run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, "initial");
    /// ```
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Runs the Writer computation, returning the result and output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec![String::from("log")]);
    /// let (result, output) = writer.run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Runs the Writer computation and returns only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::WriterStr;
    ///
    /// assert_eq!(WriterStr::new(42, String::from("log")).eval(), 42);
    /// ```
    pub fn eval(&self) -> A
    where
        A: Clone,
    {
        self.result.clone()
    }

    /// Runs the Writer computation and returns only the accumulated output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::WriterStr;
    ///
    /// assert_eq!(WriterStr::new(42, String::from("log")).exec(), "log");
    /// ```
    pub fn exec(&self) -> W
    where
        W: Clone,
    {
        self.output.clone()
    }
}

// =============================================================================
// MonadWriter Operations
// =============================================================================

impl<W> Writer<W, ()>
where
    W: Monoid,
{
    /// Creates a Writer that appends output without producing a meaningful
    /// result.
    ///
    /// The result is the unit no-value placeholder; `tell` exists purely to
    /// splice a log entry into a bind chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::WriterStr;
    /// use funcrs::typeclass::Monad;
    ///
    /// let computation = <WriterStr<()>>::pure(1).bind(|x| {
    ///     <WriterStr<()>>::pure(2).bind(move |y| {
    ///         WriterStr::tell(String::from("Added 1, 2"))
    ///             .bind(move |_| <WriterStr<()>>::pure(x + y))
    ///     })
    /// });
    /// assert_eq!(computation, WriterStr::new(3, String::from("Added 1, 2")));
    /// ```
    pub fn tell(output: W) -> Self {
        Self { result: (), output }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid + Clone,
{
    /// Executes a computation and also returns its output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec![String::from("log")]);
    /// let ((result, captured), output) = Writer::listen(writer).run();
    /// assert_eq!(result, 42);
    /// assert_eq!(captured, vec!["log"]);
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn listen(computation: Self) -> Writer<W, (A, W)> {
        Writer {
            result: (computation.result, computation.output.clone()),
            output: computation.output,
        }
    }

    /// Executes a computation that also yields a function modifying its own
    /// output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::Writer;
    ///
    /// let writer: Writer<String, (i32, fn(String) -> String)> = Writer::new(
    ///     (42, (|output: String| output.to_uppercase()) as fn(String) -> String),
    ///     String::from("hello"),
    /// );
    /// let (result, output) = Writer::pass(writer).run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, "HELLO");
    /// ```
    pub fn pass<F>(computation: Writer<W, (A, F)>) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let (result, modifier) = computation.result;
        Writer {
            result,
            output: modifier(computation.output),
        }
    }

    /// Executes a computation with a function that modifies its output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcrs::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec![String::from("hello")]);
    /// let censored = Writer::censor(
    ///     |output: Vec<String>| output.into_iter().map(|s| s.to_uppercase()).collect(),
    ///     writer,
    /// );
    /// let (result, output) = censored.run();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["HELLO"]);
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Writer {
            result: computation.result,
            output: modifier(computation.output),
        }
    }
}

impl<W, A> Monad for Writer<W, A>
where
    W: Monoid,
{
    type Inner = A;
    type WithType<B> = Writer<W, B>;

    #[inline]
    fn pure<B>(value: B) -> Writer<W, B> {
        Writer {
            result: value,
            output: W::empty(),
        }
    }

    // The kleisli sees only the value; outputs combine left-to-right.
    fn bind<B, K>(self, kleisli: K) -> Writer<W, B>
    where
        K: Fn(A) -> Writer<W, B>,
    {
        let next = kleisli(self.result);
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }
}

impl<W, A> fmt::Display for Writer<W, A>
where
    W: Monoid + fmt::Debug,
    A: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {:?})", self.result, self.output)
    }
}

static_assertions::assert_impl_all!(WriterStr<i32>: Clone, PartialEq, Send, Sync);
