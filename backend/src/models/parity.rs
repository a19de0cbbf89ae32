use serde::{Deserialize, Serialize};
use std::fmt;

/// Parity of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify `n` using the mathematical modulus, so zero and negative
    /// values resolve the same way as positive ones.
    pub fn of(n: i64) -> Self {
        if n.rem_euclid(2) == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn is_even(&self) -> bool {
        matches!(self, Parity::Even)
    }

    pub fn is_odd(&self) -> bool {
        matches!(self, Parity::Odd)
    }

    /// Lowercase label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }

    /// Human-readable sentence describing the parity of `n`.
    pub fn describe(n: i64) -> String {
        format!("The number {} is {}", n, Parity::of(n))
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
