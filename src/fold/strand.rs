use crate::base::Base;
use crate::StrandId;

/// one named nucleic-acid strand. ids are assigned by the caller
/// and referenced by stop predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    id: StrandId,
    name: String,
    bases: Vec<Base>,
}

impl Strand {
    pub fn new(id: StrandId, name: &str, sequence: &str) -> anyhow::Result<Self> {
        let bases = sequence
            .chars()
            .map(Base::try_from)
            .collect::<anyhow::Result<Vec<Base>>>()?;
        anyhow::ensure!(!bases.is_empty(), "empty strand: {}", name);
        Ok(Self {
            id,
            name: name.to_string(),
            bases,
        })
    }
    pub fn id(&self) -> StrandId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }
    pub fn len(&self) -> usize {
        self.bases.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.bases.iter().try_for_each(|b| write!(f, "{}", b))
    }
}
