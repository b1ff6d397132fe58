// crates/bishop-cli/src/io/source.rs

use anyhow::{bail, Context, Result};
use bishop_core::Fingerprint;
use clap::Args;

use crate::io::entropy;

/// Where the fingerprint comes from. Shared by `art` and `trace`.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Fingerprint, 16 colon-separated hex octets
    #[arg(value_name = "FINGERPRINT", conflicts_with_all = ["fingerprint", "random"])]
    pub positional: Option<String>,

    /// Fingerprint, 16 colon-separated hex octets
    #[arg(long, short = 'f', conflicts_with = "random")]
    pub fingerprint: Option<String>,

    /// Use a random fingerprint from the OS entropy source
    #[arg(long, short = 'r')]
    pub random: bool,
}

/// Parsed fingerprint plus the text to show on the label line.
pub struct Source {
    pub fp: Fingerprint,
    pub literal: String,
    pub origin: &'static str,
}

impl SourceArgs {
    pub fn resolve(&self) -> Result<Source> {
        if self.random {
            let fp = entropy::os_fingerprint();
            return Ok(Source {
                literal: fp.to_string(),
                fp,
                origin: "random",
            });
        }

        let text = match (&self.positional, &self.fingerprint) {
            (Some(s), _) | (None, Some(s)) => s,
            (None, None) => bail!("no fingerprint: pass one, or use --random"),
        };
        let fp = Fingerprint::parse(text).with_context(|| format!("parse fingerprint {text:?}"))?;
        Ok(Source {
            fp,
            literal: text.trim().to_string(),
            origin: "arg",
        })
    }
}
