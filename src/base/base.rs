/// the four-letter nucleobase alphabet.
/// discriminants are the 1-4 wire encoding
/// shared with the join engine.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Base {
    A = 1,
    C = 2,
    G = 3,
    T = 4,
}

impl Base {
    pub const fn all() -> &'static [Self] {
        &[Self::A, Self::C, Self::G, Self::T]
    }
    /// Watson-Crick complement
    pub const fn complement(&self) -> Self {
        match self {
            Self::A => Self::T,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::T => Self::A,
        }
    }
    pub const fn complements(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::A, Self::T) | (Self::T, Self::A) | (Self::G, Self::C) | (Self::C, Self::G)
        )
    }
}

impl From<u8> for Base {
    fn from(n: u8) -> Self {
        match n {
            1 => Self::A,
            2 => Self::C,
            3 => Self::G,
            4 => Self::T,
            _ => panic!("invalid base encoding"),
        }
    }
}
impl From<Base> for u8 {
    fn from(base: Base) -> Self {
        base as u8
    }
}

impl TryFrom<char> for Base {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'C' => Ok(Self::C),
            'G' => Ok(Self::G),
            'T' | 'U' => Ok(Self::T),
            c => Err(anyhow::anyhow!("invalid base character: {}", c)),
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::C => write!(f, "C"),
            Self::G => write!(f, "G"),
            Self::T => write!(f, "T"),
        }
    }
}

impl crate::Arbitrary for Base {
    fn random() -> Self {
        Self::from(rand::random_range(1..=4u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_involution() {
        for base in Base::all() {
            assert_eq!(base.complement().complement(), *base);
        }
    }

    #[test]
    fn complementarity_is_symmetric() {
        for a in Base::all() {
            for b in Base::all() {
                assert_eq!(a.complements(b), b.complements(a));
                assert_eq!(a.complements(b), a.complement() == *b);
            }
        }
    }

    #[test]
    fn bijective_encoding() {
        for base in Base::all() {
            assert_eq!(Base::from(u8::from(*base)), *base);
        }
    }
}
