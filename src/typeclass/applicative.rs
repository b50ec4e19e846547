//! Applicative type class - lifting values and combining contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the context (the "wrap" of a monad)
//! - `map2`/`map3`: combine independent values already in the context
//! - `product`: pair two values in the context
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(x).map2(v, |_, y| y) == v   (when pure carries no bookkeeping)
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// This is the "wrap" operation: the result carries no bookkeeping of
    /// its own (a present value, an empty log).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// assert_eq!(None::<i32>.product_right(Some(2)), None);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}
