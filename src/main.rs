use crate::commands::Cli;
use crate::payload::pack_v6_payload;
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

mod commands;
mod error;
mod payload;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    debug!("{} v{}", built_info::PKG_NAME, built_info::PKG_VERSION);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage goes to stdout with exit status 1 rather than clap's default of 2.
            println!("{}", err.render());
            std::process::exit(1);
        }
    };

    pack_v6_payload(&cli.arm7, &cli.arm64, &cli.output)?;
    println!("Packed v6 payload written to {}", cli.output.display());

    Ok(())
}
