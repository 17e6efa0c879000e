use appicons_core::{
    bundler,
    capabilities,
    config::{app, Config},
    generator::{Generated, IconGenerator},
};
use owo_colors::OwoColorize;
use std::{path::Path, process::ExitCode};

fn rule() {
    println!("{}", "=".repeat(60));
}

fn missing_sources(config: &Config) -> bool {
    let missing = config.missing_sources();
    if missing.is_empty() {
        return false;
    }
    println!("\n[{}] icon files not found", "fail".red());
    println!("Expected files:");
    for app in &config.apps {
        println!("  - {}", app.source.display());
    }
    if let Ok(cwd) = std::env::current_dir() {
        println!("\nCurrent directory: {}", cwd.display());
    }
    true
}

fn file_size(path: &Path) -> Option<String> {
    let metadata = std::fs::metadata(path).ok()?;
    Some(humansize::format_size(metadata.len(), humansize::BINARY))
}

fn show_artifact(path: &Path, label: &str) {
    match file_size(path) {
        Some(size) => println!("    - {} - {} ({})", path.display(), label, size),
        None => println!("    - {} - {}", path.display(), label),
    }
}

fn show_generated(app: &app::Definition, generated: &Generated) {
    let layout = &generated.layout;
    println!("\n  {}:", app.name.to_string().to_uppercase());
    show_artifact(&layout.app_icon(), "app icon (1024x1024)");
    if layout.icns().exists() {
        show_artifact(&layout.icns(), "macOS");
    } else if layout.iconset_dir().exists() {
        println!(
            "    - {} - macOS iconset, bundle with iconutil on macOS",
            layout.iconset_dir().display()
        );
    }
    show_artifact(&layout.windows_icon(), "Windows");
    show_artifact(&layout.linux_icon(), "Linux");
}

pub fn generate(config: &Config) -> eyre::Result<ExitCode> {
    if let Err(error) = capabilities::check() {
        println!("[{}] {}", "fail".red(), error);
        return Ok(ExitCode::FAILURE);
    }

    rule();
    println!("Icon Generator");
    rule();

    if missing_sources(config) {
        return Ok(ExitCode::FAILURE);
    }

    let bundler = bundler::select(config.iconutil.as_deref());
    tracing::debug!("bundler: {}", bundler.description());
    let generator = IconGenerator::new(bundler.as_ref());

    let mut results = Vec::new();
    for app in &config.apps {
        println!();
        match generator.generate(app) {
            Ok(generated) => results.push((app, generated)),
            Err(error) => {
                let error = eyre::Report::new(error);
                tracing::error!("{}: {:#}", app.name, error);
            }
        }
    }

    let total = config.apps.len();
    println!();
    rule();
    println!(
        "Icon generation complete! ({}/{} apps)",
        results.len(),
        total
    );
    rule();

    if results.len() == total {
        println!("\nGenerated icons:");
        for (app, generated) in &results {
            show_generated(app, generated);
        }
        println!("\nNext steps:");
        println!("  1. Reference the generated icons from each application's build configuration");
        println!("  2. Rebuild the applications to embed the new icons");
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n[{}] some icons failed to generate, check errors above",
            "warn".yellow()
        );
        Ok(ExitCode::FAILURE)
    }
}
