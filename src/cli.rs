use appicons_core::config::{self, Config};
use std::path::PathBuf;

/// Generates application icons for Linux, Windows and macOS from a single image.
#[derive(clap::Parser)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Reads the applications to generate icons for from a TOML file
    #[arg(short, long, env = "APPICONS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generates icons for a single application from this image
    #[arg(long, value_name = "PATH", conflicts_with = "config")]
    pub source: Option<PathBuf>,

    /// Destination directory in single-application mode
    #[arg(
        short,
        long,
        value_name = "DIR",
        default_value = config::DEFAULT_SINGLE_OUTPUT,
        requires = "source"
    )]
    pub output: PathBuf,

    /// Application name in single-application mode
    #[arg(
        long,
        default_value = config::DEFAULT_SINGLE_NAME,
        requires = "source"
    )]
    pub name: String,

    /// Bundles macOS icons with this iconutil program on any OS
    #[arg(long, env = "APPICONS_ICONUTIL", value_name = "PATH")]
    pub iconutil: Option<PathBuf>,

    /// Enables debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Appends log messages to this file
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Option<Cmd>,
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    /// Generates all icons (the default)
    Generate,

    /// Prints the files that would be generated
    Plan,

    /// Prints the active configuration
    Config,

    /// Prints version information
    Version,
}

impl Cli {
    /// Builds the configuration from the command line: a configuration file,
    /// a single source image, or the built-in client/server preset.
    pub fn load_config(&self) -> eyre::Result<Config> {
        let mut config = match (&self.config, &self.source) {
            (Some(path), _) => Config::parse_file(path)?,
            (None, Some(source)) => Config::single(&self.name, source, &self.output),
            (None, None) => Config::dual(),
        };
        if let Some(iconutil) = &self.iconutil {
            config.iconutil = Some(iconutil.clone());
        }
        Ok(config)
    }
}
