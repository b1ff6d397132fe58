// crates/bishop-core/src/grid/mod.rs

pub mod board;
pub mod pos;

pub const COLS: usize = 17;
pub const ROWS: usize = 9;
