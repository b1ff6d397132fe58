// crates/bishop-cli/src/cmd/trace.rs

use anyhow::Result;
use bishop_core::Walk;
use clap::Args;

use crate::cmd::StatusArgs;
use crate::io::source::SourceArgs;

#[derive(Args, Debug)]
pub struct TraceArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub status: StatusArgs,
}

/// One line per move: `<step> <octet> <arrow> <col>,<row>`.
pub fn run(args: TraceArgs) -> Result<()> {
    let src = args.source.resolve()?;
    let bytes = src.fp.as_bytes();

    for (i, (m, p)) in Walk::trace(&src.fp).into_iter().enumerate() {
        println!("{i:02} {:02x} {} {},{}", bytes[i / 4], m.arrow(), p.col(), p.row());
    }

    args.status
        .report(format_args!("trace ok: fp={} source={}", src.fp, src.origin));
    Ok(())
}
