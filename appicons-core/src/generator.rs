//! The icon generation pipeline for a single application.
use crate::{
    bundler::{BundleOutcome, IconBundler},
    config::app,
    layout::{self, IconLayout},
    raster::{self, Compression, LoadError, SourceImage},
};
use image::ColorType;
use owo_colors::OwoColorize;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    Ok,
    Skipped(String),
    Warn(String),
}

#[derive(Debug, thiserror::Error)]
#[error("in [step #{}] {description}", index + 1)]
pub struct StepError {
    pub description: String,
    pub index: usize,
    #[source]
    pub error: eyre::Report,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("source image {} not found", .0.display())]
    SourceNotFound(PathBuf),
    #[error("failed to load source image {}", .0.display())]
    Load(PathBuf, #[source] LoadError),
    #[error(transparent)]
    Step(#[from] StepError),
}

/// Result of a successful generation run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Generated {
    pub layout: IconLayout,
    pub bundle: BundleOutcome,
    pub warnings: Vec<String>,
}

pub struct IconGenerator<'a> {
    bundler: &'a dyn IconBundler,
}

impl<'a> IconGenerator<'a> {
    pub fn new(bundler: &'a dyn IconBundler) -> Self {
        IconGenerator { bundler }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(app = %app.name))]
    pub fn generate(&self, app: &app::Definition) -> Result<Generated, GenerateError> {
        if !app.source.exists() {
            println!(
                "[{}] {} not found",
                "fail".red(),
                app.source.display()
            );
            return Err(GenerateError::SourceNotFound(app.source.clone()));
        }

        info(format_args!(
            "processing {}: {} -> {}",
            app.name,
            app.source.display(),
            app.destination.display()
        ));
        let source = SourceImage::load(&app.source).map_err(|error| {
            println!("[{}] load {}: {}", "fail".red(), app.source.display(), error);
            GenerateError::Load(app.source.clone(), error)
        })?;
        info(format_args!(
            "source mode: {:?}, size: {}x{}",
            source.original_color,
            source.width(),
            source.height()
        ));
        if source.was_converted() {
            info("converting to RGBA to support transparency");
        } else {
            info("source already has transparency (RGBA)");
        }

        let layout = IconLayout::new(&app.destination);
        let mut steps = Steps::default();

        steps.run(
            format_args!("create directories below {}", layout.root().display()),
            || create_directories(&layout),
        )?;
        steps.run(
            sized(layout.app_icon(), layout::APP_ICON_SIZE),
            || app_icon(&source, &layout),
        )?;
        steps.run(
            sized(layout.linux_icon(), layout::LINUX_ICON_SIZE),
            || linux_icon(&source, &layout),
        )?;
        steps.run(
            format_args!(
                "create {} ({})",
                layout.windows_icon().display(),
                size_list(&layout::ICO_SIZES)
            ),
            || windows_icon(&source, &layout),
        )?;
        steps.run(
            format_args!(
                "create {} ({} images)",
                layout.iconset_dir().display(),
                layout::ICONSET.len()
            ),
            || iconset(&source, &layout),
        )?;

        let bundle = self.bundler.bundle(&layout.iconset_dir(), &layout.icns());
        steps.run(
            format_args!(
                "bundle {} with {}",
                layout.icns().display(),
                self.bundler.description()
            ),
            || finish_bundle(&bundle, &layout),
        )?;

        Ok(Generated {
            layout,
            bundle,
            warnings: steps.warnings,
        })
    }
}

fn info(message: impl Display) {
    println!("[{}] {}", "info".blue(), message);
}

fn sized(path: PathBuf, size: u32) -> String {
    format!("create {} ({}x{})", path.display(), size, size)
}

fn size_list(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Default)]
struct Steps {
    index: usize,
    warnings: Vec<String>,
}

impl Steps {
    fn run(
        &mut self,
        description: impl Display,
        step: impl FnOnce() -> eyre::Result<Action>,
    ) -> Result<(), StepError> {
        let index = self.index;
        self.index += 1;
        match step() {
            Ok(Action::Ok) => println!("[{}] {}", " ok ".green(), description),
            Ok(Action::Skipped(reason)) => {
                println!("[{}] {}: {}", "skip".cyan(), description, reason)
            }
            Ok(Action::Warn(reason)) => {
                println!("[{}] {}: {}", "warn".yellow(), description, reason);
                self.warnings.push(reason);
            }
            Err(error) => {
                println!("[{}] {}: {}", "fail".red(), description, error);
                return Err(StepError {
                    description: description.to_string(),
                    index,
                    error,
                });
            }
        }
        Ok(())
    }
}

fn create_directories(layout: &IconLayout) -> eyre::Result<Action> {
    for dir in layout.directories() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(Action::Ok)
}

fn app_icon(source: &SourceImage, layout: &IconLayout) -> eyre::Result<Action> {
    let path = layout.app_icon();
    let icon = source.resized(layout::APP_ICON_SIZE);
    raster::write_png(&icon, &path, Compression::Best)?;

    let color = raster::color_on_disk(&path)?;
    Ok(alpha_check(&path, color))
}

fn alpha_check(path: &Path, color: ColorType) -> Action {
    if color.has_alpha() {
        tracing::debug!("transparency preserved in {}", path.display());
        Action::Ok
    } else {
        tracing::warn!("{} was written without alpha channel", path.display());
        Action::Warn(format!("image mode is {:?}, expected RGBA", color))
    }
}

fn linux_icon(source: &SourceImage, layout: &IconLayout) -> eyre::Result<Action> {
    let icon = source.resized(layout::LINUX_ICON_SIZE);
    raster::write_png(&icon, &layout.linux_icon(), Compression::Default)?;
    Ok(Action::Ok)
}

fn windows_icon(source: &SourceImage, layout: &IconLayout) -> eyre::Result<Action> {
    let base = source.resized(layout::WINDOWS_ICON_SIZE);
    raster::write_ico(&base, &layout::ICO_SIZES, &layout.windows_icon())?;
    Ok(Action::Ok)
}

fn iconset(source: &SourceImage, layout: &IconLayout) -> eyre::Result<Action> {
    let dir = layout.iconset_dir();
    for entry in layout::ICONSET {
        tracing::debug!(size = entry.size, "writing {}", entry.filename);
        let icon = source.resized(entry.size);
        raster::write_png(&icon, &dir.join(entry.filename), Compression::Default)?;
    }
    Ok(Action::Ok)
}

fn finish_bundle(outcome: &BundleOutcome, layout: &IconLayout) -> eyre::Result<Action> {
    match outcome {
        BundleOutcome::Bundled => {
            std::fs::remove_dir_all(layout.iconset_dir())?;
            tracing::info!("removed {}", layout.iconset_dir().display());
            Ok(Action::Ok)
        }
        BundleOutcome::Unavailable(reason) => Ok(Action::Skipped(reason.clone())),
        BundleOutcome::Failed(reason) => {
            tracing::warn!("{}", reason);
            Ok(Action::Warn(reason.clone()))
        }
    }
}
