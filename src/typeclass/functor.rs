//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value inside a container while
//! keeping the container's shape: an absent value stays absent, a log stays
//! exactly as it was.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadkit::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use monadkit::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let length = x.fmap_ref(|text| text.len());
    /// assert_eq!(length, Some(5));
    /// assert_eq!(x, Some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("done"), Some("done"));
    /// assert_eq!(None::<i32>.replace("done"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(move |_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
