//! Canonical recurrences with well-known names.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSequenceNameError;
use crate::pair::TermPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedSequence {
    /// <https://oeis.org/A000045>
    Fibonacci,
    /// <https://oeis.org/A000032>
    Lucas,
    /// Arbitrary seeds with no special closed form. <https://oeis.org/A247698>
    Brady,
}

impl NamedSequence {
    pub const ALL: [NamedSequence; 3] = [Self::Fibonacci, Self::Lucas, Self::Brady];

    pub fn seeds(self) -> TermPair {
        match self {
            Self::Fibonacci => TermPair::new(0, 1),
            Self::Lucas => TermPair::new(2, 1),
            Self::Brady => TermPair::new(2308, 4261),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Lucas => "lucas",
            Self::Brady => "brady",
        }
    }

    pub fn oeis(self) -> &'static str {
        match self {
            Self::Fibonacci => "A000045",
            Self::Lucas => "A000032",
            Self::Brady => "A247698",
        }
    }
}

impl fmt::Display for NamedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedSequence {
    type Err = ParseSequenceNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fib" | "fibonacci" => Ok(Self::Fibonacci),
            "l" | "lucas" => Ok(Self::Lucas),
            "b" | "brady" => Ok(Self::Brady),
            _ => Err(ParseSequenceNameError(s.to_string())),
        }
    }
}
