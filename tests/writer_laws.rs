//! Property-based tests for Writer laws.
//!
//! ## Functor Laws
//! - Identity: writer.fmap(|x| x) == writer
//! - Composition: writer.fmap(f).fmap(g) == writer.fmap(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: wrap(a).chain(f) == f(a)
//! - Right Identity: m.chain(wrap) == m
//! - Associativity: m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//!
//! ## Output Laws
//! - Tell Monoid Law: tell(w1).then(tell(w2)) == tell(w1.combine(w2))
//! - Log order follows step order

#![cfg(feature = "writer")]

use monadkit::typeclass::Semigroup;
use monadkit::writer::{self, Logged, Writer};
use proptest::prelude::*;

fn any_logs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..5)
}

fn double(x: i32) -> Logged<i32> {
    Writer::logged(x.wrapping_mul(2), format!("doubled {x}"))
}

fn negate(x: i32) -> Logged<i32> {
    Writer::logged(x.wrapping_neg(), format!("negated {x}"))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_writer_functor_identity(value in any::<i32>(), logs in any_logs()) {
        let computation: Logged<i32> = Writer::new(value, logs);
        prop_assert_eq!(computation.clone().fmap(|x| x), computation);
    }

    #[test]
    fn prop_writer_functor_composition(value in any::<i32>(), logs in any_logs()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);
        let computation: Logged<i32> = Writer::new(value, logs);

        let left = computation.clone().fmap(function1).fmap(function2);
        let right = computation.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_writer_left_identity(value in any::<i32>()) {
        prop_assert_eq!(writer::wrap(value).chain(double), double(value));
    }

    #[test]
    fn prop_writer_right_identity(value in any::<i32>(), logs in any_logs()) {
        let computation: Logged<i32> = Writer::new(value, logs);
        prop_assert_eq!(computation.clone().chain(writer::wrap), computation);
    }

    #[test]
    fn prop_writer_associativity(value in any::<i32>(), logs in any_logs()) {
        let computation: Logged<i32> = Writer::new(value, logs);

        let left = computation.clone().chain(double).chain(negate);
        let right = computation.chain(|x| double(x).chain(negate));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Output Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_tell_combines_outputs(first in any_logs(), second in any_logs()) {
        let sequenced = Writer::tell(first.clone()).then(Writer::tell(second.clone()));
        let combined = Writer::tell(first.combine(second));
        prop_assert_eq!(sequenced, combined);
    }

    #[test]
    fn prop_logs_follow_step_order(start in -1000i32..1000, steps in 0usize..10) {
        let mut current: Logged<i32> = writer::wrap(start);
        for index in 0..steps {
            current = current.chain(|n| Writer::logged(n + 1, format!("step {index}")));
        }

        let expected: Vec<String> = (0..steps).map(|index| format!("step {index}")).collect();
        prop_assert_eq!(current.logs(), expected.as_slice());
    }

    #[test]
    fn prop_earlier_logs_are_never_dropped(prefix in any_logs(), value in any::<i32>()) {
        let computation: Logged<i32> = Writer::new(value, prefix.clone());
        let result = computation.chain(double);
        prop_assert_eq!(&result.logs()[..prefix.len()], prefix.as_slice());
        prop_assert_eq!(result.logs().len(), prefix.len() + 1);
    }
}
