use serde::Deserialize;
use serde::Serialize;

/// per-simulation state machine. a simulation is Initialized
/// until its first flux query, Running between steps, and ends
/// in exactly one of the three terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Initialized,
    Running,
    /// a stop condition matched; the tag identifies which
    Stopped(String),
    /// the time or step budget ran out with no match
    Expired,
    /// total flux reached zero before any match
    Dead,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Initialized | Self::Running)
    }
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Stopped(tag) => Some(tag),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized => write!(f, "initialized"),
            Self::Running => write!(f, "running"),
            Self::Stopped(tag) => write!(f, "stopped({})", tag),
            Self::Expired => write!(f, "expired"),
            Self::Dead => write!(f, "dead"),
        }
    }
}
