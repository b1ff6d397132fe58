// crates/bishop-core/src/walk/moves.rs

use crate::fingerprint::Fingerprint;
use crate::grid::pos::Position;

pub const MOVES_PER_OCTET: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Move {
    /// Low bit picks the column direction, high bit the row direction.
    #[inline]
    pub fn from_bits(pair: u8) -> Self {
        match pair & 0b11 {
            0b00 => Move::UpLeft,
            0b01 => Move::UpRight,
            0b10 => Move::DownLeft,
            _ => Move::DownRight,
        }
    }

    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Move::UpLeft => (-1, -1),
            Move::UpRight => (1, -1),
            Move::DownLeft => (-1, 1),
            Move::DownRight => (1, 1),
        }
    }

    #[inline]
    pub fn apply(self, p: Position) -> Position {
        let (dc, dr) = self.delta();
        p.nudge(dc, dr)
    }

    pub fn arrow(self) -> char {
        match self {
            Move::UpLeft => '\u{2196}',
            Move::UpRight => '\u{2197}',
            Move::DownLeft => '\u{2199}',
            Move::DownRight => '\u{2198}',
        }
    }
}

/// Bits 0-1 first, then 2-3, 4-5, 6-7.
#[inline]
pub fn decode_octet(b: u8) -> [Move; MOVES_PER_OCTET] {
    [
        Move::from_bits(b),
        Move::from_bits(b >> 2),
        Move::from_bits(b >> 4),
        Move::from_bits(b >> 6),
    ]
}

pub fn decode_moves(fp: &Fingerprint) -> impl Iterator<Item = Move> + '_ {
    fp.as_bytes().iter().flat_map(|&b| decode_octet(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_pair_first() {
        // 0b11_10_01_00
        assert_eq!(
            decode_octet(0xe4),
            [Move::UpLeft, Move::UpRight, Move::DownLeft, Move::DownRight]
        );
        // 0b00_01_10_11
        assert_eq!(
            decode_octet(0x1b),
            [Move::DownRight, Move::DownLeft, Move::UpRight, Move::UpLeft]
        );
    }

    #[test]
    fn sixty_four_moves() {
        let fp = Fingerprint::from_bytes([0x5a; 16]);
        assert_eq!(decode_moves(&fp).count(), 64);
    }
}
