//! Writer Monad - a result paired with an append-only log.
//!
//! A `Writer<W, A>` holds a result of type `A` and the output of type `W`
//! accumulated while computing it. Chaining runs the next step on the result
//! and appends the step's output after everything logged so far, so no step
//! ever has to know how to merge logs itself.
//!
//! The output type must be a [`Monoid`]: `empty` is the log of a freshly
//! wrapped value, `combine` is how two logs are appended. The common case,
//! a list of messages, has its own alias: [`Logged<A>`].
//!
//! # Laws
//!
//! - Left Identity: `chain(wrap(a), f) == f(a)`
//! - Right Identity: `chain(m, wrap) == m`
//! - Associativity: `chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))`
//! - Log order: `chain(chain(wrap(a), f), g).logs == f(a).logs ++ g(f(a).result).logs`
//!
//! # Examples
//!
//! ```rust
//! use monadkit::writer::{self, Logged, Writer};
//!
//! fn square(x: i32) -> Logged<i32> {
//!     Writer::logged(x * x, format!("Squared {x} to get {}", x * x))
//! }
//!
//! fn add_one(x: i32) -> Logged<i32> {
//!     Writer::logged(x + 1, format!("Added one to {x} to get {}", x + 1))
//! }
//!
//! let first = writer::chain(writer::wrap(2), square);
//! let second = writer::chain(first, add_one);
//!
//! assert_eq!(second.result(), &5);
//! assert_eq!(second.logs(), ["Squared 2 to get 4", "Added one to 4 to get 5"]);
//!
//! // Steps compose freely, including squaring a value that already has logs.
//! let twice = writer::wrap(2).flat_map(square).flat_map(square);
//! assert_eq!(twice.result(), &16);
//! assert_eq!(twice.logs(), ["Squared 2 to get 4", "Squared 4 to get 16"]);
//! ```

#![forbid(unsafe_code)]

use crate::typeclass::{Applicative, Functor, Monad, Monoid, TypeConstructor};

/// A computation result together with the output it accumulated.
///
/// Both fields are private and there is no mutable access to either:
/// output only grows through chaining (or [`log`](Writer::log), which
/// returns a new `Writer`).
///
/// # Type Parameters
///
/// - `W`: The output type (a `Monoid` for every chaining operation)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use monadkit::writer::Writer;
///
/// let computation: Writer<Vec<String>, i32> = Writer::tell(vec!["log".to_string()])
///     .then(Writer::pure(42));
///
/// let (result, output) = computation.into_parts();
/// assert_eq!(result, 42);
/// assert_eq!(output, vec!["log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    result: A,
    output: W,
}

/// A `Writer` whose output is an ordered list of messages.
pub type Logged<A> = Writer<Vec<String>, A>;

impl<W, A> Writer<W, A> {
    /// Creates a new Writer with the given result and output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> =
    ///     Writer::new(42, vec!["initial".to_string()]);
    /// assert_eq!(writer.result(), &42);
    /// assert_eq!(writer.output(), &vec!["initial".to_string()]);
    /// ```
    #[inline]
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Returns a reference to the result.
    #[inline]
    pub const fn result(&self) -> &A {
        &self.result
    }

    /// Returns a reference to the accumulated output.
    #[inline]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the Writer, returning the result and the output.
    #[inline]
    pub fn into_parts(self) -> (A, W) {
        (self.result, self.output)
    }

    /// Runs the Writer computation, returning clones of the result and output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["log".to_string()]);
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

    /// Returns a clone of the result only.
    pub fn eval(&self) -> A
    where
        A: Clone,
    {
        self.result.clone()
    }

    /// Returns a clone of the output only.
    pub fn exec(&self) -> W
    where
        W: Clone,
    {
        self.output.clone()
    }

    /// Maps a function over the result, leaving the output untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(21, vec!["log".to_string()]);
    /// let mapped = writer.fmap(|value| value * 2);
    /// assert_eq!(mapped.into_parts(), (42, vec!["log".to_string()]));
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            result: function(self.result),
            output: self.output,
        }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid,
{
    /// Wraps a value with empty output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::pure(42);
    /// assert_eq!(writer.result(), &42);
    /// assert!(writer.output().is_empty());
    /// ```
    #[inline]
    pub fn pure(value: A) -> Self {
        Self {
            result: value,
            output: W::empty(),
        }
    }

    /// Runs `function` on the result and appends its output after this one.
    ///
    /// `function` is called exactly once. The output of `self` comes first,
    /// the step's output second, neither is reordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(10, vec!["first".to_string()]);
    /// let chained = writer.flat_map(|value| Writer::new(value * 2, vec!["second".to_string()]));
    /// assert_eq!(chained.result(), &20);
    /// assert_eq!(chained.output(), &vec!["first".to_string(), "second".to_string()]);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.result);

        #[cfg(feature = "tracing")]
        tracing::trace!("writer step appended its output");

        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.flat_map(function)
    }

    /// Alias for `flat_map` matching the free [`chain`] function.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.flat_map(function)
    }

    /// Sequences two Writers, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer1: Writer<Vec<String>, i32> = Writer::new(42, vec!["first".to_string()]);
    /// let writer2: Writer<Vec<String>, &str> = Writer::new("result", vec!["second".to_string()]);
    /// let (result, output) = writer1.then(writer2).into_parts();
    /// assert_eq!(result, "result");
    /// assert_eq!(output, vec!["first", "second"]);
    /// ```
    #[inline]
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Combines two Writers using a binary function.
    ///
    /// Output of `self` comes before output of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer1: Writer<Vec<String>, i32> = Writer::new(10, vec!["first".to_string()]);
    /// let writer2: Writer<Vec<String>, i32> = Writer::new(20, vec!["second".to_string()]);
    /// let (result, output) = writer1.map2(writer2, |a, b| a + b).into_parts();
    /// assert_eq!(result, 30);
    /// assert_eq!(output, vec!["first", "second"]);
    /// ```
    #[inline]
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer {
            result: function(self.result, other.result),
            output: self.output.combine(other.output),
        }
    }

    /// Combines two Writers into a tuple.
    #[inline]
    pub fn product<B>(self, other: Writer<W, B>) -> Writer<W, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Collects the results of independent computations, joining their
    /// outputs in iteration order.
    ///
    /// An empty input yields an empty result list and `W::empty()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::{Logged, Writer};
    ///
    /// let steps: Vec<Logged<i32>> = vec![
    ///     Writer::logged(1, "loaded a"),
    ///     Writer::logged(2, "loaded b"),
    /// ];
    /// let all = Writer::sequence(steps);
    /// assert_eq!(all.result(), &vec![1, 2]);
    /// assert_eq!(all.logs(), ["loaded a", "loaded b"]);
    /// ```
    pub fn sequence<I>(computations: I) -> Writer<W, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let (results, outputs): (Vec<A>, Vec<W>) = computations
            .into_iter()
            .map(|computation| (computation.result, computation.output))
            .unzip();
        Writer {
            result: results,
            output: W::combine_all(outputs),
        }
    }

    /// Applies a function produced alongside the result to the output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, (i32, fn(Vec<String>) -> Vec<String>)> = Writer::new(
    ///     (
    ///         42,
    ///         (|output: Vec<String>| output.into_iter().rev().collect())
    ///             as fn(Vec<String>) -> Vec<String>,
    ///     ),
    ///     vec!["a".to_string(), "b".to_string()],
    /// );
    /// let (result, output) = Writer::pass(writer).into_parts();
    /// assert_eq!(result, 42);
    /// assert_eq!(output, vec!["b", "a"]);
    /// ```
    pub fn pass<F>(computation: Writer<W, (A, F)>) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let (result, modifier) = computation.result;
        Self {
            result,
            output: modifier(computation.output),
        }
    }

    /// Rewrites the output of a computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["hello".to_string()]);
    /// let censored = Writer::censor(
    ///     |output: Vec<String>| output.into_iter().map(|s| s.to_uppercase()).collect(),
    ///     writer,
    /// );
    /// assert_eq!(censored.into_parts(), (42, vec!["HELLO".to_string()]));
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            result: computation.result,
            output: modifier(computation.output),
        }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid + Clone,
{
    /// Pairs the result with a copy of the output produced so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["log".to_string()]);
    /// let ((result, captured), output) = Writer::listen(writer).into_parts();
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
}

impl<W> Writer<W, ()>
where
    W: Monoid,
{
    /// Creates a Writer that only contributes output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::Writer;
    ///
    /// let writer: Writer<Vec<String>, ()> = Writer::tell(vec!["log message".to_string()]);
    /// assert_eq!(writer.output(), &vec!["log message".to_string()]);
    /// ```
    #[inline]
    pub const fn tell(output: W) -> Self {
        Self { result: (), output }
    }
}

// =============================================================================
// Logged (Vec<String> output) helpers
// =============================================================================

impl<A> Writer<Vec<String>, A> {
    /// Creates a Writer with a single log entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::{Logged, Writer};
    ///
    /// let squared: Logged<i32> = Writer::logged(4, "Squared 2 to get 4");
    /// assert_eq!(squared.logs(), ["Squared 2 to get 4"]);
    /// ```
    pub fn logged(result: A, message: impl Into<String>) -> Self {
        Self {
            result,
            output: vec![message.into()],
        }
    }

    /// Returns the log entries in the order they were appended.
    #[inline]
    pub fn logs(&self) -> &[String] {
        &self.output
    }

    /// Returns a Writer with one more entry at the end of the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::writer::{self, Logged};
    ///
    /// let noted: Logged<i32> = writer::wrap(3).log("started").log("checked");
    /// assert_eq!(noted.logs(), ["started", "checked"]);
    /// ```
    #[must_use]
    pub fn log(mut self, message: impl Into<String>) -> Self {
        self.output.push(message.into());
        self
    }

    /// Forwards every log entry to `tracing`, oldest first.
    ///
    /// Each entry becomes one `INFO` event with an `entry` field. Returns
    /// the number of entries replayed. The Writer itself is left as is.
    #[cfg(feature = "tracing")]
    pub fn replay(&self) -> usize {
        for entry in &self.output {
            tracing::info!(entry = %entry, "writer log entry");
        }
        self.output.len()
    }
}

/// Lifts a plain value into a Writer with empty output.
///
/// # Examples
///
/// ```rust
/// use monadkit::writer::{self, Logged};
///
/// let wrapped: Logged<i32> = writer::wrap(2);
/// assert_eq!(wrapped.result(), &2);
/// assert!(wrapped.logs().is_empty());
/// ```
#[inline]
pub fn wrap<W, A>(value: A) -> Writer<W, A>
where
    W: Monoid,
{
    Writer::pure(value)
}

/// Runs `transform` on the result of `input`, appending the step's output
/// after the output of `input`.
///
/// # Examples
///
/// ```rust
/// use monadkit::writer::{self, Logged, Writer};
///
/// let doubled: Logged<i32> = writer::chain(Writer::logged(3, "start"), |n| {
///     Writer::logged(n * 2, "doubled")
/// });
/// assert_eq!(doubled.result(), &6);
/// assert_eq!(doubled.logs(), ["start", "doubled"]);
/// ```
#[inline]
pub fn chain<W, A, B, F>(input: Writer<W, A>, transform: F) -> Writer<W, B>
where
    W: Monoid,
    F: FnOnce(A) -> Writer<W, B>,
{
    input.flat_map(transform)
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W: Clone, A> Functor for Writer<W, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Self::fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Writer<W, B>
    where
        F: FnOnce(&A) -> B,
    {
        Writer {
            result: function(&self.result),
            output: self.output.clone(),
        }
    }
}

impl<W: Monoid + Clone, A> Applicative for Writer<W, A> {
    #[inline]
    fn pure<B>(value: B) -> Writer<W, B> {
        Writer::new(value, W::empty())
    }

    #[inline]
    fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    fn map3<B, C, D, F>(
        self,
        second: Writer<W, B>,
        third: Writer<W, C>,
        function: F,
    ) -> Writer<W, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Writer {
            result: function(self.result, second.result, third.result),
            output: self.output.combine(second.output).combine(third.output),
        }
    }
}

impl<W: Monoid + Clone, A> Monad for Writer<W, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Logged<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Logged<std::rc::Rc<i32>>: Send, Sync);
