// crates/bishop-core/src/render/mod.rs

pub mod symbols;

pub use symbols::{Overflow, END_MARK, START_MARK};

use crate::grid::board::Grid;
use crate::grid::pos::Position;
use crate::grid::COLS;

/// Padded-style column width.
pub const PAD_WIDTH: usize = 4;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// One char per cell inside a `+`/`-`/`|` frame.
    #[default]
    Bordered,
    /// No frame; each cell left-aligned in a 4-char column.
    Padded,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: Style,
    pub overflow: Overflow,
    /// Bracketed text centred in the top border (bordered style only).
    pub title: Option<String>,
    /// Same, for the bottom border.
    pub footer: Option<String>,
}

/// Board text for `grid`. `S` goes down before `E`, so a walk that ends
/// where it started shows only `E`.
pub fn render(grid: &Grid, start: Position, end: Position, opts: &RenderOptions) -> String {
    let cells: Vec<Vec<char>> = grid
        .rows()
        .enumerate()
        .map(|(row, counts)| {
            counts
                .iter()
                .enumerate()
                .map(|(col, &n)| {
                    let here = Position::new(col, row);
                    if here == end {
                        END_MARK
                    } else if here == start {
                        START_MARK
                    } else {
                        symbols::symbol(n, opts.overflow)
                    }
                })
                .collect()
        })
        .collect();

    match opts.style {
        Style::Bordered => bordered(&cells, opts),
        Style::Padded => padded(&cells),
    }
}

fn bordered(cells: &[Vec<char>], opts: &RenderOptions) -> String {
    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(frame(opts.title.as_deref()));
    for row in cells {
        let mut s = String::with_capacity(COLS + 2);
        s.push('|');
        s.extend(row.iter());
        s.push('|');
        lines.push(s);
    }
    lines.push(frame(opts.footer.as_deref()));
    lines.join("\n")
}

fn padded(cells: &[Vec<char>]) -> String {
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| format!("{c:<PAD_WIDTH$}"))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `+-----------------+`, optionally with `[label]` centred in the dashes.
pub fn frame(label: Option<&str>) -> String {
    let inner = match label {
        None => "-".repeat(COLS),
        Some(text) => {
            let text: String = text.chars().take(COLS - 2).collect();
            let tag = format!("[{text}]");
            let width = tag.chars().count();
            let left = (COLS - width) / 2;
            let right = COLS - width - left;
            format!("{}{tag}{}", "-".repeat(left), "-".repeat(right))
        }
    };
    format!("+{inner}+")
}

/// Label line, the fingerprint as given, then the board.
pub fn labelled(fingerprint: &str, board: &str) -> String {
    format!("Fingerprint:\n{fingerprint}\n{board}")
}
