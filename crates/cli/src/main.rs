use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod demos;
mod logger;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    logger::init(logger::level_from_verbosity(cli.verbose));
    crate::app::run(cli)
}
