//! Runtime invariant checking with contract-test support.
//!
//! The metric scans assert numeric invariants (finite results, bounded
//! ranges) through [`assert_invariant!`]. Every checked invariant is
//! recorded per thread, so contract tests can verify that exercising a
//! scan actually drove its guards.
//!
//! ```rust,ignore
//! assert_invariant!(value.is_finite(), "brightness is finite", "metrics::brightness");
//!
//! #[test]
//! fn contract_brightness_guards() {
//!     let _ = brightness(&buffer);
//!     contract_test("brightness guards", &["brightness is finite"]);
//! }
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;

thread_local! {
    static CHECKED: RefCell<BTreeSet<&'static str>> = RefCell::new(BTreeSet::new());
}

/// Assert a numeric invariant and record that it was checked.
///
/// Panics with the invariant message and its context when the condition
/// does not hold.
#[macro_export]
macro_rules! assert_invariant {
    ($condition:expr, $message:expr) => {
        $crate::invariant_ppt::record_check($condition, $message, module_path!())
    };
    ($condition:expr, $message:expr, $context:expr) => {
        $crate::invariant_ppt::record_check($condition, $message, $context)
    };
}

/// Backing function for [`assert_invariant!`]; not meant to be called
/// directly.
#[doc(hidden)]
pub fn record_check(condition: bool, message: &'static str, context: &str) {
    CHECKED.with(|checked| {
        checked.borrow_mut().insert(message);
    });

    if !condition {
        panic!("INVARIANT VIOLATION [{}]: {}", context, message);
    }
}

/// True when the named invariant has been checked on this thread.
pub fn was_checked(message: &str) -> bool {
    CHECKED.with(|checked| checked.borrow().contains(message))
}

/// Panic unless every listed invariant was checked on this thread.
pub fn contract_test(test_name: &str, required: &[&str]) {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|message| !was_checked(message))
        .collect();

    if !missing.is_empty() {
        panic!(
            "CONTRACT FAILURE [{}]: invariants never checked:\n  - {}",
            test_name,
            missing.join("\n  - ")
        );
    }
}

/// Forget all recorded checks on this thread.
pub fn clear_checked() {
    CHECKED.with(|checked| checked.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_invariant_is_recorded() {
        record_check(true, "recorded test invariant", "invariant_ppt::tests");
        assert!(was_checked("recorded test invariant"));
        contract_test("recording", &["recorded test invariant"]);
    }

    #[test]
    #[should_panic(expected = "INVARIANT VIOLATION")]
    fn test_failing_invariant_panics() {
        record_check(false, "failing test invariant", "invariant_ppt::tests");
    }

    #[test]
    #[should_panic(expected = "CONTRACT FAILURE")]
    fn test_missing_invariant_fails_contract() {
        contract_test("missing", &["never checked anywhere"]);
    }
}
