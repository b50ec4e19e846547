//! # monadkit
//!
//! Two small monads for Rust and the type classes they are built on.
//!
//! ## Overview
//!
//! - **[`Maybe`](maybe::Maybe)**: a value that may be absent. Chaining
//!   through an `Empty` skips every later step, which replaces a ladder of
//!   "is it there yet?" checks with a single operator.
//! - **[`Writer`](writer::Writer)**: a value paired with an append-only log.
//!   Chaining appends each step's log after the logs produced so far.
//! - **Type classes**: `Functor`, `Applicative`, `Monad`, `Semigroup` and
//!   `Monoid`, with higher-kinded types emulated through generic associated
//!   types.
//!
//! Every monad here has the same three parts: a wrapper type, a `wrap`
//! function that lifts a plain value into it, and a `chain` function that
//! feeds the wrapped value to a step returning another wrapper.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `maybe`: The `Maybe` container
//! - `writer`: The `Writer` container and the `Logged` alias
//! - `macros`: The `mdo!` do-notation macro
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `tracing`: Diagnostic events for chaining and log replay
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadkit::maybe::{self, Maybe};
//! use monadkit::writer::{self, Logged, Writer};
//!
//! let halved = maybe::chain(maybe::wrap(10), |n| {
//!     if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::empty() }
//! });
//! assert_eq!(halved, Maybe::present(5));
//!
//! let squared: Logged<i32> = writer::chain(writer::wrap(3), |n| {
//!     Writer::logged(n * n, format!("Squared {n} to get {}", n * n))
//! });
//! assert_eq!(squared.result(), &9);
//! assert_eq!(squared.logs(), ["Squared 3 to get 9"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadkit::prelude::*;
///
/// let value = Maybe::present(2).flat_map(|n| Maybe::present(n + 1));
/// assert_eq!(value, Maybe::present(3));
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;

    #[cfg(feature = "writer")]
    pub use crate::writer::{Logged, Writer};

    pub use crate::error::AbsentValueError;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "writer")]
pub mod writer;

#[cfg(feature = "macros")]
mod mdo_macro;
