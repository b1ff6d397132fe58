// crates/bishop-cli/src/cmd/art.rs

use anyhow::Result;
use bishop_core::{labelled, BishopWalker, Overflow, RenderOptions, Style, Walk};
use clap::{Args, ValueEnum};

use crate::cmd::StatusArgs;
use crate::io::source::SourceArgs;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ArtStyle {
    /// Framed board, one char per cell
    Bordered,
    /// Unframed board, 4-char columns
    Padded,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ArtOverflow {
    /// Counts past 14 draw as '^'
    Clamp,
    /// Counts wrap modulo 15
    Wrap,
}

#[derive(Args, Debug)]
pub struct ArtArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long, value_enum, default_value_t = ArtStyle::Bordered)]
    pub style: ArtStyle,

    #[arg(long, value_enum, default_value_t = ArtOverflow::Clamp)]
    pub overflow: ArtOverflow,

    /// Text for the top border, e.g. "RSA 2048" (bordered style only)
    #[arg(long)]
    pub title: Option<String>,

    /// Text for the bottom border, e.g. "MD5" (bordered style only)
    #[arg(long)]
    pub footer: Option<String>,

    /// Print the board without the "Fingerprint:" label lines
    #[arg(long)]
    pub no_label: bool,

    #[command(flatten)]
    pub status: StatusArgs,
}

impl ArtArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            style: match self.style {
                ArtStyle::Bordered => Style::Bordered,
                ArtStyle::Padded => Style::Padded,
            },
            overflow: match self.overflow {
                ArtOverflow::Clamp => Overflow::Clamp,
                ArtOverflow::Wrap => Overflow::Wrap,
            },
            title: self.title.clone(),
            footer: self.footer.clone(),
        }
    }
}

pub fn run(args: ArtArgs) -> Result<()> {
    let src = args.source.resolve()?;

    let mut walker = BishopWalker::with_options(args.render_options());
    let board = walker.generate(&src.literal)?;

    if args.no_label {
        println!("{board}");
    } else {
        println!("{}", labelled(&src.literal, &board));
    }

    let walk = Walk::run(&src.fp);
    args.status.report(format_args!(
        "bishop ok: end={} max_visits={} source={}",
        walk.end(),
        walk.grid.max_count(),
        src.origin
    ));
    Ok(())
}
