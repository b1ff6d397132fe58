// crates/bishop-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "bishop-cli")]
#[command(about = "Drunken Bishop fingerprint art", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the fingerprint board
    Art(cmd::art::ArtArgs),

    /// Print the 64 decoded moves and the position after each
    Trace(cmd::trace::TraceArgs),

    /// Print a random fingerprint from the OS entropy source
    Random(cmd::random::RandomArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Art(args) => cmd::art::run(args),
        Commands::Trace(args) => cmd::trace::run(args),
        Commands::Random(args) => cmd::random::run(args),
    }
}
