//! Maybe Monad - a value that may be absent.
//!
//! `Maybe<T>` is either `Present(value)` or `Empty`. It replaces a ladder of
//! "check for absence before using it" statements with a single operator,
//! [`chain`], which feeds a present value to the next step and lets an
//! absent value fall straight through to the end.
//!
//! # Overview
//!
//! Like every monad in this crate, `Maybe` has three parts:
//!
//! 1. **Wrapper type**: [`Maybe<T>`]
//! 2. **Wrap function**: [`wrap`] (also `Maybe::present` and `Applicative::pure`)
//! 3. **Chain function**: [`chain`] (also `Maybe::chain`, `Monad::flat_map`)
//!
//! # Laws
//!
//! - Left Identity: `chain(wrap(a), f) == f(a)`
//! - Right Identity: `chain(m, wrap) == m`
//! - Associativity: `chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))`
//!
//! # Examples
//!
//! Looking up a nested value where every level may be missing:
//!
//! ```rust
//! use monadkit::maybe::{self, Maybe};
//!
//! struct Pet {
//!     nickname: Maybe<String>,
//! }
//!
//! struct User {
//!     pet: Maybe<Pet>,
//! }
//!
//! fn nickname_of(user: Maybe<User>) -> Maybe<String> {
//!     let pet = maybe::chain(user, |user| user.pet);
//!     maybe::chain(pet, |pet| pet.nickname)
//! }
//!
//! let with_pet = User {
//!     pet: Maybe::present(Pet { nickname: Maybe::present("rex".to_string()) }),
//! };
//! assert_eq!(nickname_of(maybe::wrap(with_pet)), Maybe::present("rex".to_string()));
//!
//! let without_pet = User { pet: Maybe::empty() };
//! assert_eq!(nickname_of(maybe::wrap(without_pet)), Maybe::empty());
//! ```

#![forbid(unsafe_code)]

use std::fmt;

use crate::error::AbsentValueError;
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A value that is either present or absent.
///
/// Exactly one variant is active, and a `Maybe` is never changed in place:
/// every operation that looks like a change consumes the value and returns a
/// new one.
///
/// # Examples
///
/// ```rust
/// use monadkit::maybe::Maybe;
///
/// let present = Maybe::present(42);
/// let empty: Maybe<i32> = Maybe::empty();
///
/// assert!(present.is_present());
/// assert!(empty.is_empty());
///
/// match present {
///     Maybe::Present(value) => assert_eq!(value, 42),
///     Maybe::Empty => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Empty,
    /// Exactly one value.
    Present(T),
}

impl<T> Maybe<T> {
    /// Creates a `Maybe` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(1), Maybe::Present(1));
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// let empty: Maybe<i32> = Maybe::empty();
    /// assert_eq!(empty, Maybe::Empty);
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert!(Maybe::present(4).is_present_and(|n| n % 2 == 0));
    /// assert!(!Maybe::present(3).is_present_and(|n| n % 2 == 0));
    /// assert!(!Maybe::<i32>::empty().is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Empty => false,
        }
    }

    /// Borrows the contents, producing a `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// let name = Maybe::present("rex".to_string());
    /// assert_eq!(name.as_ref(), Maybe::present(&"rex".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Feeds the value to `transform`, or stays empty without calling it.
    ///
    /// The step's result is returned as is: a `Maybe<B>` coming out of
    /// `transform` is not wrapped a second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::empty() };
    ///
    /// assert_eq!(Maybe::present(8).chain(half).chain(half), Maybe::present(2));
    /// assert_eq!(Maybe::present(6).chain(half).chain(half), Maybe::empty());
    /// ```
    #[inline]
    pub fn chain<B, F>(self, transform: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Empty => {
                #[cfg(feature = "tracing")]
                tracing::trace!("chain short-circuited on Empty");
                Maybe::Empty
            }
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(4).filter(|n| *n > 3), Maybe::present(4));
    /// assert_eq!(Maybe::present(2).filter(|n| *n > 3), Maybe::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).or(Maybe::present(2)), Maybe::present(1));
    /// assert_eq!(Maybe::empty().or(Maybe::present(2)), Maybe::present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Empty => alternative,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    ///
    /// `alternative` is only called when `self` is empty.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Empty => alternative(),
        }
    }

    /// Returns the one present value when exactly one side has it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).xor(Maybe::empty()), Maybe::present(1));
    /// assert_eq!(Maybe::present(1).xor(Maybe::present(2)), Maybe::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Empty) | (Self::Empty, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Empty,
        }
    }

    /// Pairs two values when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).zip(Maybe::present("a")), Maybe::present((1, "a")));
    /// assert_eq!(Maybe::present(1).zip(Maybe::<&str>::empty()), Maybe::empty());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present((left, right)),
            _ => Maybe::Empty,
        }
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the value, or computes one when empty.
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => default(),
        }
    }

    /// Returns the value, or `T::default()` when empty.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Converts into a `Result`, using `error` for the empty case.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).ok_or("missing"), Ok(1));
    /// assert_eq!(Maybe::<i32>::empty().ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(error),
        }
    }

    /// Converts into a `Result`, computing the error only when empty.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when no value is present.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(error()),
        }
    }

    /// Extracts the value, reporting absence as an [`AbsentValueError`].
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] when no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(7).try_into_value(), Ok(7));
    ///
    /// let error = Maybe::<i32>::empty().try_into_value().unwrap_err();
    /// assert_eq!(error.operation, "Maybe::try_into_value");
    /// ```
    #[inline]
    pub fn try_into_value(self) -> Result<T, AbsentValueError> {
        self.ok_or(AbsentValueError::new("Maybe::try_into_value"))
    }

    /// Returns an iterator over the zero or one contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// let value = Maybe::present(3);
    /// let values: Vec<&i32> = value.iter().collect();
    /// assert_eq!(values, vec![&3]);
    /// assert_eq!(Maybe::<i32>::empty().iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadkit::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(Maybe::present(1)).flatten(), Maybe::present(1));
    /// assert_eq!(Maybe::present(Maybe::<i32>::empty()).flatten(), Maybe::empty());
    /// assert_eq!(Maybe::<Maybe<i32>>::empty().flatten(), Maybe::empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.chain(|inner| inner)
    }
}

/// Lifts a plain value into `Maybe`. Always present.
///
/// # Examples
///
/// ```rust
/// use monadkit::maybe::{self, Maybe};
///
/// assert_eq!(maybe::wrap("rex"), Maybe::present("rex"));
/// ```
#[inline]
pub const fn wrap<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Feeds a present value to `transform`, or returns `Empty` without calling it.
///
/// # Examples
///
/// ```rust
/// use monadkit::maybe::{self, Maybe};
///
/// let first_char = |text: &'static str| match text.chars().next() {
///     Some(character) => Maybe::present(character),
///     None => Maybe::empty(),
/// };
///
/// assert_eq!(maybe::chain(maybe::wrap("rex"), first_char), Maybe::present('r'));
/// assert_eq!(maybe::chain(maybe::wrap(""), first_char), Maybe::empty());
/// assert_eq!(maybe::chain(Maybe::empty(), first_char), Maybe::empty());
/// ```
#[inline]
pub fn chain<A, B, F>(input: Maybe<A>, transform: F) -> Maybe<B>
where
    F: FnOnce(A) -> Maybe<B>,
{
    input.chain(transform)
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Empty => write!(formatter, "Empty"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects an iterator of `Maybe` values, all or nothing.
///
/// The first `Empty` stops the iteration and the whole result is `Empty`.
///
/// # Examples
///
/// ```rust
/// use monadkit::maybe::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::present(1), Maybe::present(2)].into_iter().collect();
/// assert_eq!(all, Maybe::present(vec![1, 2]));
///
/// let some: Maybe<Vec<i32>> = vec![Maybe::present(1), Maybe::empty()].into_iter().collect();
/// assert_eq!(some, Maybe::empty());
/// ```
impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        iterator
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).fmap(|(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Empty,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::chain(self, function)
    }
}

/// Maybe forms a semigroup when its inner type is a semigroup.
///
/// Present values are combined; an `Empty` side contributes nothing.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Empty) | (Self::Empty, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Empty, Self::Empty) => Self::Empty,
        }
    }
}

/// The identity element is `Empty`.
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Empty
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn counting<'a>(calls: &'a Cell<usize>) -> impl FnOnce(i32) -> Maybe<i32> + 'a {
        move |value| {
            calls.set(calls.get() + 1);
            Maybe::present(value + 1)
        }
    }

    #[rstest]
    fn wrap_is_always_present() {
        assert_eq!(wrap(0), Maybe::Present(0));
        assert!(wrap(()).is_present());
    }

    #[rstest]
    fn chain_on_empty_never_calls_transform() {
        let calls = Cell::new(0);
        let result = chain(Maybe::empty(), counting(&calls));
        assert_eq!(result, Maybe::empty());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn chain_on_present_calls_transform_once() {
        let calls = Cell::new(0);
        let result = chain(wrap(1), counting(&calls));
        assert_eq!(result, Maybe::present(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn chain_does_not_double_wrap() {
        let result: Maybe<i32> = chain(wrap(1), |_| Maybe::empty());
        assert_eq!(result, Maybe::Empty);
    }

    #[rstest]
    fn empty_propagates_through_later_steps() {
        let calls = Cell::new(0);
        let result = wrap(1)
            .chain(|_| Maybe::<i32>::empty())
            .chain(counting(&calls))
            .chain(counting(&calls));
        assert_eq!(result, Maybe::empty());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(3), Maybe::Present(3))]
    #[case(None, Maybe::Empty)]
    fn converts_from_option(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::from(option), expected);
        let back: Option<i32> = expected.into();
        assert_eq!(back, option);
    }

    #[rstest]
    fn default_is_empty() {
        assert_eq!(Maybe::<String>::default(), Maybe::Empty);
    }

    #[rstest]
    #[case(Maybe::present(5), "Present(5)")]
    #[case(Maybe::empty(), "Empty")]
    fn display(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn try_into_value_reports_absence() {
        let error = Maybe::<i32>::empty().try_into_value().unwrap_err();
        assert_eq!(error, AbsentValueError::new("Maybe::try_into_value"));
    }

    #[rstest]
    fn unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let value = Maybe::present(1).unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn unwrap_or_default_on_empty() {
        assert_eq!(Maybe::<String>::empty().unwrap_or_default(), String::new());
    }

    #[rstest]
    fn fmap_keeps_shape() {
        assert_eq!(Maybe::present(2).fmap(|n| n * 10), Maybe::present(20));
        assert_eq!(Maybe::<i32>::empty().fmap(|n| n * 10), Maybe::empty());
    }

    #[rstest]
    fn map2_needs_both() {
        assert_eq!(
            Maybe::present(2).map2(Maybe::present(3), |a, b| a * b),
            Maybe::present(6)
        );
        assert_eq!(
            Maybe::present(2).map2(Maybe::<i32>::empty(), |a, b| a * b),
            Maybe::empty()
        );
    }

    #[rstest]
    fn semigroup_combines_present_values() {
        let left = Maybe::present(vec!["a".to_string()]);
        let right = Maybe::present(vec!["b".to_string()]);
        assert_eq!(
            left.combine(right),
            Maybe::present(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[rstest]
    fn monoid_empty_is_identity() {
        let value = Maybe::present(String::from("rex"));
        assert_eq!(<Maybe<String> as Monoid>::empty().combine(value.clone()), value);
    }

    #[rstest]
    fn borrowed_iteration() {
        let value = Maybe::present(String::from("rex"));
        let mut seen = Vec::new();
        for name in &value {
            seen.push(name.clone());
        }
        assert_eq!(seen, vec!["rex"]);
        assert!(value.is_present());
    }

    #[rstest]
    fn collect_stops_at_first_empty() {
        let pulled = Cell::new(0);
        let items = [Maybe::present(1), Maybe::empty(), Maybe::present(3)];
        let collected: Maybe<Vec<i32>> = items
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect();
        assert_eq!(collected, Maybe::empty());
        assert_eq!(pulled.get(), 2);
    }
}

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn short_circuit_is_traced() {
        let result: Maybe<i32> = chain(Maybe::<i32>::empty(), |n| Maybe::present(n + 1));
        assert_eq!(result, Maybe::empty());
        assert!(logs_contain("chain short-circuited on Empty"));
    }

    #[test]
    #[traced_test]
    fn present_chain_is_silent() {
        let result = chain(wrap(1), |n| Maybe::present(n + 1));
        assert_eq!(result, Maybe::present(2));
        assert!(!logs_contain("short-circuited"));
    }
}
