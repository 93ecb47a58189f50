//! Dispatches named operations onto the property library
//!
//! Evaluation never panics: a zero divisor goes through
//! [`checked_divides`] and every library error is folded into an
//! [`OutcomeValue::Error`].

use tracing::{debug, info, warn};

use super::models::{BatchReport, Operation, Outcome, OutcomeValue};
use crate::config::models::Batch;
use crate::error::NumberResult;
use crate::properties::{
    checked_divides, factorial, is_balanced, is_even, is_odd, is_palindrome, sum_from_one_to,
    verify_is_odd,
};

/// Evaluates `operation` on `input`
///
/// `divisor` is only read by [`Operation::Divides`], where it is required.
pub fn evaluate(operation: Operation, input: i64, divisor: Option<i64>) -> Outcome {
    let value = match operation {
        Operation::IsEven => OutcomeValue::Bool(is_even(input)),
        Operation::IsOdd => OutcomeValue::Bool(is_odd(input)),
        Operation::IsPalindrome => OutcomeValue::Bool(is_palindrome(input)),
        Operation::Divides => match divisor {
            Some(d) => fold(checked_divides(d, input), OutcomeValue::Bool),
            None => OutcomeValue::Error("divides requires a divisor".to_string()),
        },
        Operation::VerifyIsOdd => fold(verify_is_odd(input), |()| OutcomeValue::Unit),
        Operation::Factorial => fold(factorial(input), OutcomeValue::Integer),
        Operation::SumFromOneTo => fold(sum_from_one_to(input), OutcomeValue::Integer),
        Operation::IsBalanced => fold(is_balanced(input), OutcomeValue::Bool),
    };

    let outcome = Outcome {
        operation,
        input,
        divisor: divisor.filter(|_| operation.requires_divisor()),
        value,
    };
    debug!("{}", outcome);
    outcome
}

/// Evaluates every input of `batch` in order
pub fn run_batch(batch: &Batch) -> BatchReport {
    info!(
        "Running batch '{}': {} over {} input(s)",
        batch.name,
        batch.operation,
        batch.inputs.len()
    );

    let outcomes: Vec<Outcome> = batch
        .inputs
        .iter()
        .map(|&input| evaluate(batch.operation, input, batch.divisor))
        .collect();

    let report = BatchReport {
        batch: batch.name.clone(),
        outcomes,
    };
    let failures = report.failures();
    if failures > 0 {
        warn!("Batch '{}' produced {} failure(s)", batch.name, failures);
    }

    report
}

fn fold<T>(result: NumberResult<T>, ok: impl FnOnce(T) -> OutcomeValue) -> OutcomeValue {
    match result {
        Ok(value) => ok(value),
        Err(e) => OutcomeValue::Error(e.to_string()),
    }
}
