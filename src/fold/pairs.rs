/// base-pair table over a concatenated strand sequence.
/// position i maps to its partner, or None when unpaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(Vec<Option<usize>>);

impl PairTable {
    pub fn new(n: usize) -> Self {
        Self(vec![None; n])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn partner(&self, i: usize) -> Option<usize> {
        self.0[i]
    }
    pub fn is_paired(&self, i: usize) -> bool {
        self.0[i].is_some()
    }
    pub fn pair(&mut self, i: usize, j: usize) {
        assert!(i != j);
        assert!(self.0[i].is_none());
        assert!(self.0[j].is_none());
        self.0[i] = Some(j);
        self.0[j] = Some(i);
    }
    pub fn unpair(&mut self, i: usize) {
        let j = self.0[i].expect("unpairing a paired base");
        self.0[i] = None;
        self.0[j] = None;
    }
    /// all pairs (i, j) with i < j, in order of the opening base
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(i, p)| p.filter(|&j| i < j).map(|j| (i, j)))
    }
    /// would a new pair (i, j) cross an existing pair?
    pub fn crosses(&self, i: usize, j: usize) -> bool {
        assert!(i < j);
        self.pairs().any(|(k, l)| {
            let k_inside = i < k && k < j;
            let l_inside = i < l && l < j;
            k_inside != l_inside
        })
    }
    /// nesting depth per position; unpaired bases at depth zero
    /// are exterior
    pub fn depths(&self) -> Vec<usize> {
        let mut depth = 0usize;
        self.0
            .iter()
            .enumerate()
            .map(|(i, p)| match p {
                Some(j) if j > &i => {
                    let d = depth;
                    depth += 1;
                    d
                }
                Some(_) => {
                    depth -= 1;
                    depth
                }
                None => depth,
            })
            .collect()
    }
}

impl TryFrom<&str> for PairTable {
    type Error = anyhow::Error;
    /// parse a dot-bracket string; '+' strand separators are
    /// skipped and do not occupy a position
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let marks = s.chars().filter(|c| *c != '+').collect::<Vec<char>>();
        let mut table = Self::new(marks.len());
        let mut stack = Vec::new();
        for (i, c) in marks.iter().enumerate() {
            match c {
                '.' => {}
                '(' => stack.push(i),
                ')' => {
                    let j = stack
                        .pop()
                        .ok_or_else(|| anyhow::anyhow!("unbalanced structure: {}", s))?;
                    table.pair(j, i);
                }
                c => anyhow::bail!("invalid structure character: {}", c),
            }
        }
        anyhow::ensure!(stack.is_empty(), "unbalanced structure: {}", s);
        Ok(table)
    }
}
