pub mod error;
pub mod fingerprint;

pub mod grid;
pub mod render;
pub mod walk;

pub use crate::error::{BishopError, Result};
pub use crate::fingerprint::Fingerprint;
pub use crate::grid::pos::{Position, START};
pub use crate::render::{labelled, Overflow, RenderOptions, Style};
pub use crate::walk::moves::Move;
pub use crate::walk::walker::{BishopWalker, Walk};
