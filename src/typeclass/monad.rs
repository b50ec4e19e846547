//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`: the value produced by one
//! step decides which wrapped value comes next. The container decides what
//! "next" means. For `Maybe`, an absent value ends the chain; for `Writer`,
//! the step's log is appended to the log so far.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use monadkit::typeclass::Monad;
///
/// let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// The function returns a value already in the context, which is handed
    /// back as is rather than wrapped a second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = Monad::and_then(x, |n| Some(n * 2));
    /// assert_eq!(y, Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` ends the chain (an absent `Maybe`, say), `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn safe_divide(divisor: i32) -> impl FnOnce(i32) -> Option<i32> {
        move |dividend| {
            if divisor == 0 {
                None
            } else {
                Some(dividend / divisor)
            }
        }
    }

    #[rstest]
    #[case(Some(20), 2, Some(10))]
    #[case(Some(20), 0, None)]
    #[case(None, 2, None)]
    fn option_flat_map(
        #[case] input: Option<i32>,
        #[case] divisor: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(input.flat_map(safe_divide(divisor)), expected);
    }

    #[rstest]
    fn option_left_identity() {
        let function = |n: i32| Some(n + 1);
        assert_eq!(<Option<()>>::pure(3).flat_map(function), function(3));
    }

    #[rstest]
    fn option_right_identity() {
        let value = Some(3);
        assert_eq!(value.flat_map(|n| <Option<()>>::pure(n)), value);
    }

    #[rstest]
    fn option_associativity() {
        let function1 = |n: i32| Some(n + 1);
        let function2 = |n: i32| if n > 2 { Some(n * 2) } else { None };
        let value = Some(2);

        assert_eq!(
            value.flat_map(function1).flat_map(function2),
            value.flat_map(|n| function1(n).flat_map(function2))
        );
    }

    #[rstest]
    fn option_then_keeps_second_value() {
        assert_eq!(Some(1).then(Some(2)), Some(2));
    }
}
