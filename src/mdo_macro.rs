//! `mdo!` macro for do-notation style chaining.
//!
//! Nested `chain` calls read inside out. `mdo!` lets the same pipeline be
//! written top to bottom, one step per line. Binds expand to
//! [`Monad::flat_map`](crate::typeclass::Monad::flat_map) called through the
//! trait path, so callers do not need the trait in scope and the block works
//! for every `Monad` in the crate: `Maybe`, `Writer` and `Option`.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: run the step and name its value.
//!   `pattern` is one token tree: `x`, `_` or `(a, b)`.
//! - `let pattern = expression;` - Pure let binding, same pattern rule
//! - `tell output;` - Writer only: append `output` to the log
//! - `ensure condition;` - Maybe only: the block is `Empty` unless
//!   `condition` holds
//! - `expression` - Final expression (already wrapped)
//!
//! `<-` is not a single token in Rust, so `<=` stands in for it.
//!
//! # Examples
//!
//! ## Maybe
//!
//! ```rust
//! use monadkit::mdo;
//! use monadkit::maybe::Maybe;
//!
//! fn checked_sum(left: Maybe<i32>, right: Maybe<i32>) -> Maybe<i32> {
//!     mdo! {
//!         x <= left;
//!         y <= right;
//!         ensure x + y < 100;
//!         Maybe::present(x + y)
//!     }
//! }
//!
//! assert_eq!(checked_sum(Maybe::present(5), Maybe::present(10)), Maybe::present(15));
//! assert_eq!(checked_sum(Maybe::present(5), Maybe::empty()), Maybe::empty());
//! assert_eq!(checked_sum(Maybe::present(60), Maybe::present(60)), Maybe::empty());
//! ```
//!
//! ## Writer
//!
//! ```rust
//! use monadkit::mdo;
//! use monadkit::writer::{self, Logged, Writer};
//!
//! let computation: Logged<i32> = mdo! {
//!     start <= writer::wrap(2);
//!     tell vec![format!("starting from {start}")];
//!     squared <= Writer::logged(start * start, "squared");
//!     Writer::logged(squared + 1, "added one")
//! };
//!
//! assert_eq!(computation.result(), &5);
//! assert_eq!(computation.logs(), ["starting from 2", "squared", "added one"]);
//! ```

#![forbid(unsafe_code)]

/// Do-notation over `Maybe`, `Writer` and `Option`.
///
/// Each step ends in `;` and the last line is the result. Steps are
/// `pattern <= step;`, `let pattern = value;`, `tell output;` (Writer) and
/// `ensure condition;` (Maybe).
///
/// # Examples
///
/// ```rust
/// use monadkit::mdo;
/// use monadkit::maybe::Maybe;
///
/// let skipped: Maybe<i32> = mdo! {
///     x <= Maybe::present(5);
///     _ <= Maybe::<()>::empty();
///     Maybe::present(x)
/// };
/// assert_eq!(skipped, Maybe::empty());
/// ```
#[macro_export]
macro_rules! mdo {
    ($result:expr) => {
        $result
    };

    (tell $output:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map(
            $crate::writer::Writer::tell($output),
            move |()| $crate::mdo!($($rest)+),
        )
    };

    (ensure $condition:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::mdo!($($rest)+)
        } else {
            $crate::maybe::Maybe::Empty
        }
    };

    (let $pattern:tt = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::mdo!($($rest)+)
    }};

    ($pattern:tt <= $step:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($step, move |$pattern| $crate::mdo!($($rest)+))
    };
}

#[cfg(all(test, feature = "maybe", feature = "writer"))]
mod tests {
    use crate::maybe::Maybe;
    use crate::writer::{self, Logged, Writer};
    use rstest::rstest;

    fn halve(n: i32) -> Maybe<i32> {
        if n % 2 == 0 {
            Maybe::present(n / 2)
        } else {
            Maybe::empty()
        }
    }

    #[rstest]
    #[case(8, Maybe::present(2))]
    #[case(6, Maybe::empty())]
    fn bind_matches_chain(#[case] input: i32, #[case] expected: Maybe<i32>) {
        let block = mdo! {
            once <= halve(input);
            halve(once)
        };
        assert_eq!(block, Maybe::present(input).chain(halve).chain(halve));
        assert_eq!(block, expected);
    }

    #[rstest]
    #[case(4, Maybe::present(4))]
    #[case(-4, Maybe::empty())]
    fn ensure_turns_failed_condition_into_empty(
        #[case] input: i32,
        #[case] expected: Maybe<i32>,
    ) {
        let result = mdo! {
            n <= Maybe::present(input);
            ensure n > 0;
            Maybe::present(n)
        };
        assert_eq!(result, expected);
    }

    #[rstest]
    fn let_with_tuple_pattern() {
        let result = mdo! {
            n <= Maybe::present(7);
            let (quotient, remainder) = (n / 2, n % 2);
            Maybe::present(quotient * 10 + remainder)
        };
        assert_eq!(result, Maybe::present(31));
    }

    #[rstest]
    fn tell_appends_between_steps() {
        let result: Logged<i32> = mdo! {
            tell vec!["begin".to_string()];
            n <= Writer::logged(3, "three");
            tell vec![format!("saw {n}")];
            writer::wrap(n)
        };
        assert_eq!(result.result(), &3);
        assert_eq!(result.logs(), ["begin", "three", "saw 3"]);
    }

    #[rstest]
    fn tell_with_string_output() {
        let result: Writer<String, i32> = mdo! {
            tell "a;".to_string();
            tell "b;".to_string();
            writer::wrap(1)
        };
        assert_eq!(result.into_parts(), (1, "a;b;".to_string()));
    }
}
