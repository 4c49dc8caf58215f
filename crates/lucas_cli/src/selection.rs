//! Turning the command line selection into a sequence handle.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use lucas_core::{LucasSequence, NamedSequence, TermPair};

use crate::args::SequenceArgs;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSelection {
    Named(NamedSequence),
    Custom(TermPair),
}

impl SequenceSelection {
    pub fn from_args(args: &SequenceArgs) -> Result<Self, ConfigError> {
        if let Some(definition) = &args.custom {
            return parse_seed_pair(definition).map(Self::Custom);
        }
        let named = if args.fibonacci {
            NamedSequence::Fibonacci
        } else if args.lucas {
            NamedSequence::Lucas
        } else {
            NamedSequence::Brady
        };
        Ok(Self::Named(named))
    }

    pub fn seeds(&self) -> TermPair {
        match self {
            Self::Named(named) => named.seeds(),
            Self::Custom(seeds) => seeds.clone(),
        }
    }

    pub fn build(&self, stride: u64) -> LucasSequence {
        match self {
            Self::Named(named) => LucasSequence::named(*named, Some(stride)),
            Self::Custom(seeds) => LucasSequence::new(seeds.clone(), stride),
        }
    }
}

impl fmt::Display for SequenceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{named}"),
            Self::Custom(_) => f.write_str("custom"),
        }
    }
}

/// Parse `"A,B"` into a seed pair. Both parts must be integers.
pub fn parse_seed_pair(definition: &str) -> Result<TermPair, ConfigError> {
    let malformed = |reason: String| ConfigError::MalformedSeeds {
        input: definition.to_string(),
        reason,
    };

    let parts: Vec<&str> = definition.split(',').map(str::trim).collect();
    let [first, second] = parts.as_slice() else {
        return Err(malformed(format!(
            "expected two comma-separated integers, found {} part(s)",
            parts.len()
        )));
    };

    let parse = |part: &str| {
        BigInt::from_str(part).map_err(|_| malformed(format!("'{part}' is not an integer")))
    };
    Ok(TermPair::new(parse(*first)?, parse(*second)?))
}
