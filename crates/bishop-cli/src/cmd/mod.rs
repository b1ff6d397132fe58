// crates/bishop-cli/src/cmd/mod.rs

use clap::Args;

pub mod art;
pub mod random;
pub mod trace;

/// Status-line control shared by the drawing subcommands.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// No status line on stderr
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl StatusArgs {
    pub fn report(&self, line: impl std::fmt::Display) {
        if !self.quiet {
            eprintln!("{line}");
        }
    }
}
