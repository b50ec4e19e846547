//! Type class traits shared by the containers in this crate.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations where each step depends on the last
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name
//! "the same container holding a different type", which is what
//! `fmap` and `flat_map` need to return.
//!
//! ## Where the containers plug in
//!
//! `Maybe` and `Writer` implement `Functor`, `Applicative` and `Monad`.
//! `Writer` additionally relies on `Monoid` for its output: `pure` starts
//! from `Monoid::empty` and chaining merges outputs with
//! `Semigroup::combine`.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use monadkit::typeclass::Semigroup;
//!
//! let first = vec!["Squared 2 to get 4".to_string()];
//! let second = vec!["Added one to 4 to get 5".to_string()];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["Squared 2 to get 4", "Added one to 4 to get 5"]
//! );
//! ```
//!
//! ## Using Monad generically
//!
//! ```rust
//! use monadkit::typeclass::Monad;
//!
//! fn increment_twice<M>(value: M) -> M
//! where
//!     M: Monad<Inner = i32, WithType<i32> = M>,
//! {
//!     value
//!         .flat_map::<i32, _>(|n| M::pure(n + 1))
//!         .flat_map::<i32, _>(|n| M::pure(n + 1))
//! }
//!
//! assert_eq!(increment_twice(Some(1)), Some(3));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
