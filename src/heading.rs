//! The four cardinal directions an ant can face.

use std::fmt;

/// A facing direction. The discriminant order (N=0, E=1, S=2, W=3) is part
/// of the external contract: transition-table rows are keyed by this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    /// Index into a transition-table row, matching the N/E/S/W = 0/1/2/3 order.
    pub fn index(self) -> usize {
        self as u8 as usize
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Heading::N,
            1 => Heading::E,
            2 => Heading::S,
            3 => Heading::W,
            _ => panic!("heading index out of range: {}", index),
        }
    }

    /// The literal grammar character for this heading (§6.1).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Heading::N),
            'E' => Some(Heading::E),
            'S' => Some(Heading::S),
            'W' => Some(Heading::W),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Heading::N => 'N',
            Heading::E => 'E',
            Heading::S => 'S',
            Heading::W => 'W',
        }
    }

    /// The fixed position delta for moving one step while facing this heading.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::N => (0, 1),
            Heading::E => (1, 0),
            Heading::S => (0, -1),
            Heading::W => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_order_matches_contract() {
        assert_eq!(Heading::N.index(), 0);
        assert_eq!(Heading::E.index(), 1);
        assert_eq!(Heading::S.index(), 2);
        assert_eq!(Heading::W.index(), 3);
    }

    #[test]
    fn deltas_match_spec() {
        assert_eq!(Heading::N.delta(), (0, 1));
        assert_eq!(Heading::E.delta(), (1, 0));
        assert_eq!(Heading::S.delta(), (0, -1));
        assert_eq!(Heading::W.delta(), (-1, 0));
    }

    #[test]
    fn from_char_roundtrips() {
        for h in Heading::ALL {
            assert_eq!(Heading::from_char(h.to_char()), Some(h));
        }
        assert_eq!(Heading::from_char('R'), None);
    }
}
