use clap::Parser;
use cli::{Cli, Cmd};
use std::process::ExitCode;

pub mod cli;
pub mod commands;
pub mod logging;

pub fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();
    logging::setup_logger(args.verbose, args.log_file.as_deref())?;

    match args.subcommand {
        Some(Cmd::Version) => commands::version().map(|_| ExitCode::SUCCESS),
        Some(Cmd::Config) => commands::config(&args.load_config()?).map(|_| ExitCode::SUCCESS),
        Some(Cmd::Plan) => commands::plan(&args.load_config()?).map(|_| ExitCode::SUCCESS),
        Some(Cmd::Generate) | None => commands::generate(&args.load_config()?),
    }
}
