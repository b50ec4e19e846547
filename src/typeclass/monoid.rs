//! Monoid type class - semigroups with an identity element.
//!
//! The identity element is what a freshly wrapped `Writer` starts with: the
//! log of a value that has not been through any step yet.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::typeclass::{Semigroup, Monoid};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! let logs: Vec<String> = Vec::empty();
//! assert!(logs.is_empty());
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use monadkit::typeclass::{Semigroup, Monoid};
///
/// let s = String::from("hello");
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Monoid;
    ///
    /// let batches = vec![vec![1], vec![2, 3], vec![]];
    /// assert_eq!(Vec::combine_all(batches), vec![1, 2, 3]);
    ///
    /// let none: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(none), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}
