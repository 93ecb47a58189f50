//! Custom assertion helpers for common test patterns

use crate::evaluation::models::{Outcome, OutcomeValue};

/// Custom assertions for evaluation outcomes
pub mod outcome_assertions {
    use super::*;

    /// Assert that an outcome holds the expected boolean
    pub fn assert_bool_outcome(outcome: &Outcome, expected: bool) {
        assert_eq!(
            outcome.value,
            OutcomeValue::Bool(expected),
            "Unexpected value for {}",
            outcome
        );
    }

    /// Assert that an outcome is an error whose message contains `fragment`
    pub fn assert_error_outcome(outcome: &Outcome, fragment: &str) {
        match &outcome.value {
            OutcomeValue::Error(message) => assert!(
                message.contains(fragment),
                "Error '{}' should contain '{}'",
                message,
                fragment
            ),
            other => panic!("Expected error outcome for {}, got {:?}", outcome, other),
        }
    }
}

/// Custom assertions for the digit predicates
pub mod digit_assertions {
    use crate::properties::{digit_sum, split_at_middle};

    /// Assert that the halves of `n` have the expected contents
    pub fn assert_halves(n: i64, expected_lhs: &str, expected_rhs: &str) {
        let rendered = n.to_string();
        let (lhs, rhs) = split_at_middle(&rendered);
        assert_eq!(
            (lhs, rhs),
            (expected_lhs, expected_rhs),
            "Unexpected halves for {}",
            n
        );
    }

    /// Assert that the halves never overlap and cover all but the pivot
    pub fn assert_split_covers_rendering(n: i64) {
        let rendered = n.to_string();
        let (lhs, rhs) = split_at_middle(&rendered);
        assert_eq!(lhs.len(), rhs.len(), "Halves of {} differ in length", n);
        assert_eq!(
            lhs.len() + rhs.len() + rendered.len() % 2,
            rendered.len(),
            "Halves of {} do not cover the rendering",
            n
        );
        if n >= 0 {
            assert!(digit_sum(lhs).is_ok() && digit_sum(rhs).is_ok());
        }
    }
}
