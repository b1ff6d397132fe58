// crates/bishop-core/src/render/symbols.rs

/// Glyph per visit count, index == count.
pub const SYMBOLS: [char; 15] = [
    ' ', '.', 'o', '+', '=', '*', 'B', 'O', 'X', '@', '%', '&', '#', '/', '^',
];

pub const START_MARK: char = 'S';
pub const END_MARK: char = 'E';

/// What to draw for counts past the last glyph (`^`, 14).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Saturate at `^`.
    #[default]
    Clamp,
    /// count mod 15; a heavily visited cell may come out blank.
    Wrap,
}

#[inline]
pub fn symbol(count: u32, overflow: Overflow) -> char {
    let last = SYMBOLS.len() - 1;
    let i = match overflow {
        Overflow::Clamp => (count as usize).min(last),
        Overflow::Wrap => count as usize % SYMBOLS.len(),
    };
    SYMBOLS[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_edges() {
        assert_eq!(symbol(0, Overflow::Clamp), ' ');
        assert_eq!(symbol(1, Overflow::Clamp), '.');
        assert_eq!(symbol(14, Overflow::Clamp), '^');
    }

    #[test]
    fn overflow_policies() {
        assert_eq!(symbol(15, Overflow::Clamp), '^');
        assert_eq!(symbol(57, Overflow::Clamp), '^');
        assert_eq!(symbol(15, Overflow::Wrap), ' ');
        assert_eq!(symbol(17, Overflow::Wrap), 'o');
    }

    #[test]
    fn markers_never_in_table() {
        assert!(!SYMBOLS.contains(&START_MARK));
        assert!(!SYMBOLS.contains(&END_MARK));
    }
}
