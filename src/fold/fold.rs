use super::pairs::PairTable;
use super::strand::Strand;
use crate::base::Base;
use crate::base::Tally;
use crate::complex::Complex;
use crate::complex::JoinSite;
use crate::energy::EnergyModel;
use crate::energy::Metropolis;
use crate::Energy;
use crate::Rate;
use crate::StrandId;

/// a single elementary step: form or break one base pair,
/// addressed in concatenated-sequence coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairMove {
    Close { i: usize, j: usize, rate: Rate },
    Open { i: usize, j: usize, rate: Rate },
}

impl PairMove {
    pub fn rate(&self) -> Rate {
        match self {
            Self::Close { rate, .. } => *rate,
            Self::Open { rate, .. } => *rate,
        }
    }
    pub fn ij(&self) -> (usize, usize) {
        match self {
            Self::Close { i, j, .. } => (*i, *j),
            Self::Open { i, j, .. } => (*i, *j),
        }
    }
}

/// a connected complex of strands with an explicit pair table.
/// moves are single pair closings and openings over pseudoknot-
/// free structures; rates come from the owned Metropolis model.
#[derive(Debug, Clone)]
pub struct FoldComplex {
    strands: Vec<Strand>,
    pairs: PairTable,
    model: Metropolis,
    moves: Vec<PairMove>,
    flux: Rate,
}

impl FoldComplex {
    pub fn new(strands: Vec<Strand>, model: Metropolis) -> Self {
        assert!(!strands.is_empty());
        let n = strands.iter().map(Strand::len).sum();
        let mut complex = Self {
            strands,
            pairs: PairTable::new(n),
            model,
            moves: Vec::new(),
            flux: 0.,
        };
        complex.generate_loops();
        complex
    }

    /// start from an explicit dot-bracket structure instead of
    /// the fully open state
    pub fn with_structure(mut self, structure: &str) -> anyhow::Result<Self> {
        let pairs = PairTable::try_from(structure)?;
        anyhow::ensure!(
            pairs.len() == self.total_len(),
            "structure length {} does not fit sequence length {}",
            pairs.len(),
            self.total_len(),
        );
        for (i, j) in pairs.pairs() {
            anyhow::ensure!(
                self.base(i).complements(&self.base(j)),
                "non-complementary pair ({}, {})",
                i,
                j,
            );
        }
        self.pairs = pairs;
        self.generate_loops();
        Ok(self)
    }

    pub fn total_len(&self) -> usize {
        self.pairs.len()
    }
    pub fn strands(&self) -> &[Strand] {
        &self.strands
    }
    pub fn model(&self) -> &Metropolis {
        &self.model
    }
    pub fn moves(&self) -> &[PairMove] {
        &self.moves
    }

    fn base(&self, i: usize) -> Base {
        let (s, k) = self.locate(i);
        self.strands[s].bases()[k]
    }
    /// global position -> (strand index, offset within strand)
    fn locate(&self, mut i: usize) -> (usize, usize) {
        for (s, strand) in self.strands.iter().enumerate() {
            if i < strand.len() {
                return (s, i);
            }
            i -= strand.len();
        }
        unreachable!("position out of range");
    }
    fn strand_of(&self, i: usize) -> usize {
        self.locate(i).0
    }

    fn enumerate(&self) -> Vec<PairMove> {
        let mut moves = Vec::new();
        for (i, j) in self.pairs.pairs() {
            let delta = -self.model.bond(self.base(i), self.base(j));
            let rate = self.model.rate(delta);
            moves.push(PairMove::Open { i, j, rate });
        }
        let n = self.total_len();
        for i in 0..n {
            if self.pairs.is_paired(i) {
                continue;
            }
            for j in (i + 1)..n {
                if self.pairs.is_paired(j) {
                    continue;
                }
                if !self.base(i).complements(&self.base(j)) {
                    continue;
                }
                if self.strand_of(i) == self.strand_of(j) && j - i <= crate::MIN_HAIRPIN {
                    continue;
                }
                if self.pairs.crosses(i, j) {
                    continue;
                }
                let delta = self.model.bond(self.base(i), self.base(j));
                let rate = self.model.rate(delta);
                moves.push(PairMove::Close { i, j, rate });
            }
        }
        moves
    }

    /// strand connectivity under the current pair table; one
    /// component id per strand
    fn components(&self) -> Vec<usize> {
        let n = self.strands.len();
        let mut component = (0..n).collect::<Vec<usize>>();
        // union by repeated relabeling; strand counts are tiny
        for (i, j) in self.pairs.pairs() {
            let (a, b) = (component[self.strand_of(i)], component[self.strand_of(j)]);
            if a != b {
                let lo = a.min(b);
                let hi = a.max(b);
                for c in component.iter_mut() {
                    if *c == hi {
                        *c = lo;
                    }
                }
            }
        }
        component
    }

    /// extract the strands whose component id differs from that
    /// of the first strand, preserving order. self keeps the
    /// rest; the extracted complex is returned.
    fn split_off(&mut self) -> Self {
        let component = self.components();
        let keep = component[0];
        let mut offsets = Vec::with_capacity(self.strands.len());
        let mut total = 0;
        for strand in self.strands.iter() {
            offsets.push(total);
            total += strand.len();
        }
        // old global index -> new global index, per side
        let mut ours = std::collections::HashMap::new();
        let mut theirs = std::collections::HashMap::new();
        let mut our_next = 0;
        let mut their_next = 0;
        for (s, strand) in self.strands.iter().enumerate() {
            for k in 0..strand.len() {
                if component[s] == keep {
                    ours.insert(offsets[s] + k, our_next);
                    our_next += 1;
                } else {
                    theirs.insert(offsets[s] + k, their_next);
                    their_next += 1;
                }
            }
        }
        let mut our_pairs = PairTable::new(our_next);
        let mut their_pairs = PairTable::new(their_next);
        for (i, j) in self.pairs.pairs() {
            match (ours.get(&i), ours.get(&j)) {
                (Some(&a), Some(&b)) => our_pairs.pair(a, b),
                (None, None) => their_pairs.pair(theirs[&i], theirs[&j]),
                _ => unreachable!("pair spans split components"),
            }
        }
        let mut their_strands = Vec::new();
        let mut our_strands = Vec::new();
        for (s, strand) in self.strands.drain(..).enumerate() {
            if component[s] == keep {
                our_strands.push(strand);
            } else {
                their_strands.push(strand);
            }
        }
        self.strands = our_strands;
        self.pairs = our_pairs;
        self.generate_loops();
        let mut other = Self {
            strands: their_strands,
            pairs: their_pairs,
            model: self.model,
            moves: Vec::new(),
            flux: 0.,
        };
        other.generate_loops();
        other
    }

    /// global index of the offset-th exterior base of the given
    /// kind, in scan order. must agree with exterior_bases().
    fn exterior_index(&self, site: JoinSite) -> usize {
        let depths = self.pairs.depths();
        let mut seen = 0;
        for i in 0..self.total_len() {
            if self.pairs.is_paired(i) || depths[i] != 0 {
                continue;
            }
            if self.base(i) != site.base {
                continue;
            }
            if seen == site.offset {
                return i;
            }
            seen += 1;
        }
        unreachable!("join site offset out of range");
    }
}

impl Complex for FoldComplex {
    type Move = PairMove;

    fn generate_loops(&mut self) {
        self.moves = self.enumerate();
        self.flux = self.moves.iter().map(PairMove::rate).sum();
    }

    fn display_moves(&self) {
        for mv in self.moves.iter() {
            log::trace!("{:?}", mv);
        }
    }

    fn total_flux(&self) -> Rate {
        self.flux
    }

    fn energy(&self) -> Energy {
        self.pairs
            .pairs()
            .map(|(i, j)| self.model.bond(self.base(i), self.base(j)))
            .sum()
    }

    fn strand_count(&self) -> usize {
        self.strands.len()
    }

    fn exterior_bases(&self) -> Tally {
        let depths = self.pairs.depths();
        let mut tally = Tally::default();
        for i in 0..self.total_len() {
            if !self.pairs.is_paired(i) && depths[i] == 0 {
                tally.record(self.base(i));
            }
        }
        tally
    }

    fn select_move(&self, budget: &mut Rate) -> PairMove {
        for mv in self.moves.iter() {
            if *budget < mv.rate() {
                return *mv;
            }
            *budget -= mv.rate();
        }
        unreachable!("move selection budget exceeds complex flux");
    }

    fn apply(&mut self, mv: PairMove) -> Option<Self> {
        match mv {
            PairMove::Close { i, j, .. } => {
                self.pairs.pair(i, j);
                self.generate_loops();
                None
            }
            PairMove::Open { i, .. } => {
                self.pairs.unpair(i);
                let component = self.components();
                if component.iter().any(|c| *c != component[0]) {
                    Some(self.split_off())
                } else {
                    self.generate_loops();
                    None
                }
            }
        }
    }

    fn structure(&self) -> String {
        let mut out = String::new();
        let mut i = 0;
        for (s, strand) in self.strands.iter().enumerate() {
            if s > 0 {
                out.push('+');
            }
            for _ in 0..strand.len() {
                out.push(match self.pairs.partner(i) {
                    Some(j) if j > i => '(',
                    Some(_) => ')',
                    None => '.',
                });
                i += 1;
            }
        }
        out
    }

    fn strand_names(&self) -> String {
        self.strands
            .iter()
            .map(Strand::name)
            .collect::<Vec<&str>>()
            .join(",")
    }

    fn sequence(&self) -> String {
        self.strands
            .iter()
            .map(Strand::to_string)
            .collect::<Vec<String>>()
            .join("+")
    }

    fn check_id_bound(&self, id: StrandId) -> bool {
        self.pairs.pairs().any(|(i, j)| {
            let (si, sj) = (self.strand_of(i), self.strand_of(j));
            si != sj && (self.strands[si].id() == id || self.strands[sj].id() == id)
        })
    }

    fn check_id_list(&self, ids: &[StrandId]) -> bool {
        let ours = self
            .strands
            .iter()
            .map(Strand::id)
            .collect::<Vec<StrandId>>();
        if ours.len() != ids.len() {
            return false;
        }
        (0..ours.len()).any(|r| (0..ours.len()).all(|k| ours[(r + k) % ours.len()] == ids[k]))
    }

    fn join(first: Self, second: Self, first_site: JoinSite, second_site: JoinSite) -> Self {
        let i = first.exterior_index(first_site);
        let j = second.exterior_index(second_site) + first.total_len();
        let offset = first.total_len();
        let total = first.total_len() + second.total_len();
        let mut pairs = PairTable::new(total);
        for (a, b) in first.pairs.pairs() {
            pairs.pair(a, b);
        }
        for (a, b) in second.pairs.pairs() {
            pairs.pair(a + offset, b + offset);
        }
        pairs.pair(i, j);
        let mut strands = first.strands;
        strands.extend(second.strands);
        let mut merged = Self {
            strands,
            pairs,
            model: first.model,
            moves: Vec::new(),
            flux: 0.,
        };
        merged.generate_loops();
        merged
    }
}

impl std::fmt::Display for FoldComplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.sequence(), self.structure())
    }
}
