// crates/bishop-core/src/walk/mod.rs

pub mod moves;
pub mod walker;

/// Moves per fingerprint: 16 octets x 4 bit-pairs.
pub const STEPS: usize = crate::fingerprint::OCTETS * moves::MOVES_PER_OCTET;
