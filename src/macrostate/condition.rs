use super::kind::Kind;
use crate::StrandId;
use serde::Deserialize;
use serde::Serialize;

/// one structural predicate over a single live complex: an
/// ordered strand id list (matched up to circular rotation), a
/// kind, and for the structural kinds a dot-bracket target and
/// an integer disagreement tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexItem {
    ids: Vec<StrandId>,
    kind: Kind,
    structure: String,
    tolerance: usize,
}

impl ComplexItem {
    pub fn exact(ids: Vec<StrandId>, structure: &str) -> Self {
        Self {
            ids,
            kind: Kind::Exact,
            structure: structure.to_string(),
            tolerance: 0,
        }
    }
    pub fn disassoc(ids: Vec<StrandId>) -> Self {
        Self {
            ids,
            kind: Kind::Disassoc,
            structure: String::new(),
            tolerance: 0,
        }
    }
    pub fn loose(ids: Vec<StrandId>, structure: &str, tolerance: usize) -> Self {
        Self {
            ids,
            kind: Kind::Loose,
            structure: structure.to_string(),
            tolerance,
        }
    }
    pub fn counted(ids: Vec<StrandId>, structure: &str, tolerance: usize) -> Self {
        Self {
            ids,
            kind: Kind::Count,
            structure: structure.to_string(),
            tolerance,
        }
    }
    pub fn bound(ids: Vec<StrandId>) -> Self {
        Self {
            ids,
            kind: Kind::Bound,
            structure: String::new(),
            tolerance: 0,
        }
    }
    /// percentage tolerances are converted to integer
    /// disagreement counts here, before evaluation ever sees
    /// the predicate
    pub fn with_percent(mut self, percent: f64) -> Self {
        assert!((0. ..=100.).contains(&percent));
        let marks = self.structure.chars().filter(|c| *c != '+').count();
        self.tolerance = (percent / 100. * marks as f64).floor() as usize;
        self
    }

    pub fn ids(&self) -> &[StrandId] {
        &self.ids
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn structure(&self) -> &str {
        &self.structure
    }
    pub fn tolerance(&self) -> usize {
        self.tolerance
    }
}

/// a stop condition: a tag surfaced to the driver on match,
/// and complex items joined by logical AND. every item must be
/// satisfied by at least one live complex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopCondition {
    tag: String,
    items: Vec<ComplexItem>,
}

impl StopCondition {
    pub fn new(tag: &str, items: Vec<ComplexItem>) -> Self {
        Self {
            tag: tag.to_string(),
            items,
        }
    }
    pub fn tag(&self) -> &str {
        &self.tag
    }
    pub fn items(&self) -> &[ComplexItem] {
        &self.items
    }
}

impl std::fmt::Display for StopCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} items)", self.tag, self.items.len())
    }
}
