use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
#[error("Unknown placement policy flag '{0}'.")]
pub struct UnknownPolicy(String);

/// Placement policy for blocks returned to the free list. The
/// policy never changes how allocation searches (always the
/// first block that fits, from the head); it only decides where
/// freed blocks and fragments are inserted, which in turn
/// decides what that search finds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Freed blocks are appended at the tail.
    Fifo,
    /// Freed blocks are inserted in capacity-ascending order.
    BestFit,
    /// Freed blocks are inserted in capacity-descending order.
    WorstFit,
}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        // The flag comes straight from the command line and is
        // accepted in any case, short or long form.
        match flag.to_uppercase().as_str() {
            "-F" | "-FIFO" => Ok(Policy::Fifo),
            "-B" | "-BESTFIT" => Ok(Policy::BestFit),
            "-W" | "-WORSTFIT" => Ok(Policy::WorstFit),
            _ => Err(UnknownPolicy(flag.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::BestFit => write!(f, "BESTFIT"),
            Policy::WorstFit => write!(f, "WORSTFIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_flags() {
        assert_eq!("-F".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("-fifo".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("-b".parse::<Policy>().unwrap(), Policy::BestFit);
        assert_eq!("-BESTFIT".parse::<Policy>().unwrap(), Policy::BestFit);
        assert_eq!("-w".parse::<Policy>().unwrap(), Policy::WorstFit);
        assert_eq!("-WorstFit".parse::<Policy>().unwrap(), Policy::WorstFit);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!("-x".parse::<Policy>().is_err());
        assert!("FIFO".parse::<Policy>().is_err());
    }
}
