use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operations exposed by the library, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    IsEven,
    IsOdd,
    Divides,
    VerifyIsOdd,
    Factorial,
    SumFromOneTo,
    IsBalanced,
    IsPalindrome,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::IsEven,
        Operation::IsOdd,
        Operation::Divides,
        Operation::VerifyIsOdd,
        Operation::Factorial,
        Operation::SumFromOneTo,
        Operation::IsBalanced,
        Operation::IsPalindrome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::IsEven => "is_even",
            Operation::IsOdd => "is_odd",
            Operation::Divides => "divides",
            Operation::VerifyIsOdd => "verify_is_odd",
            Operation::Factorial => "factorial",
            Operation::SumFromOneTo => "sum_from_one_to",
            Operation::IsBalanced => "is_balanced",
            Operation::IsPalindrome => "is_palindrome",
        }
    }

    pub fn requires_divisor(&self) -> bool {
        matches!(self, Operation::Divides)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts both `snake_case` and `kebab-case` names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
                format!("Unknown operation '{}'. Known: {}", s, known.join(", "))
            })
    }
}

/// Result of evaluating an operation on one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OutcomeValue {
    Bool(bool),
    /// Serialized as a string since JSON numbers cannot hold every `u128`
    Integer(#[serde(with = "u128_string")] u128),
    Unit,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub operation: Operation,
    pub input: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisor: Option<i64>,
    pub value: OutcomeValue,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self.value, OutcomeValue::Error(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.divisor {
            Some(divisor) if self.operation.requires_divisor() => {
                write!(f, "{}({}, {})", self.operation, divisor, self.input)?
            }
            _ => write!(f, "{}({})", self.operation, self.input)?,
        }

        match &self.value {
            OutcomeValue::Bool(b) => write!(f, " = {}", b),
            OutcomeValue::Integer(n) => write!(f, " = {}", n),
            OutcomeValue::Unit => write!(f, " ok"),
            OutcomeValue::Error(message) => write!(f, " failed: {}", message),
        }
    }
}

mod u128_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Outcomes of one configured batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch: String,
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_error()).count()
    }
}
