// crates/bishop-cli/src/io/mod.rs

pub mod entropy;
pub mod source;
