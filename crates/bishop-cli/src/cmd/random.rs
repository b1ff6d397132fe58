// crates/bishop-cli/src/cmd/random.rs

use anyhow::Result;
use clap::Args;

use crate::io::entropy;

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// How many fingerprints to print
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

pub fn run(args: RandomArgs) -> Result<()> {
    for _ in 0..args.count {
        println!("{}", entropy::os_fingerprint());
    }
    Ok(())
}
