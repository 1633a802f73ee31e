use serde::Deserialize;
use serde::Serialize;

/// the five supported complex-predicate kinds. closed set;
/// matching is exhaustive everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// strand ids plus an exact dot-bracket structure
    Exact,
    /// strand ids alone, any structure
    Disassoc,
    /// wildcarded dot-bracket within a disagreement tolerance
    Loose,
    /// plain dot-bracket within a disagreement tolerance
    Count,
    /// named strands must be paired to another strand
    Bound,
}

impl TryFrom<&str> for Kind {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "STRUCTURE" => Ok(Self::Exact),
            "DISASSOC" => Ok(Self::Disassoc),
            "LOOSE_STRUCTURE" => Ok(Self::Loose),
            "PERCENT_OR_COUNT_STRUCTURE" => Ok(Self::Count),
            "BOUND" => Ok(Self::Bound),
            s => Err(anyhow::anyhow!("unknown stop predicate kind: {}", s)),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "STRUCTURE"),
            Self::Disassoc => write!(f, "DISASSOC"),
            Self::Loose => write!(f, "LOOSE_STRUCTURE"),
            Self::Count => write!(f, "PERCENT_OR_COUNT_STRUCTURE"),
            Self::Bound => write!(f, "BOUND"),
        }
    }
}
