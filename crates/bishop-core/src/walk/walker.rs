// crates/bishop-core/src/walk/walker.rs

use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::grid::board::Grid;
use crate::grid::pos::{Position, START};
use crate::render::{self, RenderOptions};
use crate::walk::moves::{decode_moves, Move};
use crate::walk::STEPS;

/// Grid plus bishop position: the whole mutable state of one walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    pub grid: Grid,
    pub pos: Position,
}

impl Walk {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            pos: START,
        }
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.pos = START;
    }

    /// Move once (clamped) and count the landing cell.
    #[inline]
    pub fn step(&mut self, m: Move) -> Position {
        self.pos = m.apply(self.pos);
        self.grid.visit(self.pos);
        self.pos
    }

    /// Fresh walk over all 64 moves of `fp`.
    pub fn run(fp: &Fingerprint) -> Self {
        let mut w = Self::new();
        for m in decode_moves(fp) {
            w.step(m);
        }
        w
    }

    /// Position after every move, in order (64 entries).
    pub fn trace(fp: &Fingerprint) -> Vec<(Move, Position)> {
        let mut w = Self::new();
        let mut out = Vec::with_capacity(STEPS);
        for m in decode_moves(fp) {
            out.push((m, w.step(m)));
        }
        out
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.pos
    }

    pub fn render(&self, opts: &RenderOptions) -> String {
        render::render(&self.grid, START, self.pos, opts)
    }
}

impl Default for Walk {
    fn default() -> Self {
        Self::new()
    }
}

/// Reusable walker: one `Walk` plus render settings.
///
/// `generate` leaves the walker reset, so repeated calls never see each
/// other's counts. For parallel use give each thread its own walker, or
/// call `Walk::run` directly.
#[derive(Clone, Debug, Default)]
pub struct BishopWalker {
    state: Walk,
    pub opts: RenderOptions,
}

impl BishopWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: RenderOptions) -> Self {
        Self {
            state: Walk::new(),
            opts,
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn step(&mut self, m: Move) -> Position {
        self.state.step(m)
    }

    /// Parse, reset, walk. On a format error the current state is untouched.
    pub fn walk(&mut self, fingerprint: &str) -> Result<Position> {
        let fp = Fingerprint::parse(fingerprint)?;
        Ok(self.walk_fingerprint(&fp))
    }

    pub fn walk_fingerprint(&mut self, fp: &Fingerprint) -> Position {
        self.state = Walk::run(fp);
        self.state.end()
    }

    pub fn render(&self, start: Position, end: Position) -> String {
        render::render(&self.state.grid, start, end, &self.opts)
    }

    pub fn generate(&mut self, fingerprint: &str) -> Result<String> {
        let end = self.walk(fingerprint)?;
        let out = self.render(START, end);
        self.reset();
        Ok(out)
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.state.pos
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }
}
