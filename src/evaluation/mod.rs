pub mod evaluator;
pub mod models;

pub use evaluator::{evaluate, run_batch};
pub use models::{BatchReport, Operation, Outcome, OutcomeValue};
