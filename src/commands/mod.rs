use clap::Parser;
use std::path::PathBuf;

/// Packs an ARM7 and an ARM64 payload into a single v6 payload container.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ARM7 payload file
    #[arg(value_name = "ARM7_PAYLOAD")]
    pub arm7: PathBuf,

    /// ARM64 payload file
    #[arg(value_name = "ARM64_PAYLOAD")]
    pub arm64: PathBuf,

    /// Output v6 payload file, overwritten if it already exists
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}
