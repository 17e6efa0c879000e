use appicons_core::{config::Config, layout::IconLayout};
use owo_colors::OwoColorize;
use std::fmt::Display;

pub mod generate;
pub use generate::generate;

pub fn config(config: &Config) -> eyre::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn plan(config: &Config) -> eyre::Result<()> {
    print!("{}", DisplayAsPlan(config));
    Ok(())
}

pub fn version() -> eyre::Result<()> {
    match appicons_core::VERSION {
        Some(version) => println!("appicons: {}", version),
        None => println!("appicons: {} [untagged build]", env!("CARGO_PKG_VERSION")),
    }
    Ok(())
}

pub struct DisplayAsPlan<'a>(&'a Config);

impl<'a> Display for DisplayAsPlan<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for app in &self.0.apps {
            writeln!(
                f,
                "[{}] {} -> {}",
                app.name.blue(),
                app.source.display(),
                app.destination.display()
            )?;
            for file in IconLayout::new(&app.destination).planned() {
                writeln!(f, "  {} ({})", file.path.display(), file.description)?;
            }
        }
        Ok(())
    }
}
