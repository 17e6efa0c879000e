//! Packing a macOS iconset directory into a single `.icns` file.
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BundleOutcome {
    Bundled,
    /// The bundling tool can't be used on this system.
    Unavailable(String),
    /// The bundling tool ran but did not produce a bundle.
    Failed(String),
}

pub trait IconBundler {
    fn description(&self) -> String;

    fn bundle(&self, iconset: &Path, icns: &Path) -> BundleOutcome;
}

/// Bundles through Apple's `iconutil`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Iconutil {
    program: PathBuf,
}

impl Default for Iconutil {
    fn default() -> Self {
        Iconutil::new("iconutil")
    }
}

impl Iconutil {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Iconutil {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl IconBundler for Iconutil {
    fn description(&self) -> String {
        format!("{} -c icns", self.program.display())
    }

    fn bundle(&self, iconset: &Path, icns: &Path) -> BundleOutcome {
        let sh = match Shell::new() {
            Ok(sh) => sh,
            Err(error) => return BundleOutcome::Unavailable(error.to_string()),
        };
        let program = &self.program;
        tracing::info!(program = %program.display(), iconset = %iconset.display(), "running iconutil");
        let output = cmd!(sh, "{program} -c icns {iconset} -o {icns}")
            .quiet()
            .ignore_status()
            .output();
        match output {
            Ok(output) if output.status.success() => BundleOutcome::Bundled,
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = match (stderr.trim(), output.status.code()) {
                    ("", Some(code)) => format!("iconutil failed with exit status {}", code),
                    ("", None) => "iconutil failed".to_owned(),
                    (stderr, _) => format!("iconutil failed: {}", stderr),
                };
                BundleOutcome::Failed(message)
            }
            Err(error) => {
                tracing::debug!("could not run {}: {:?}", program.display(), error);
                BundleOutcome::Unavailable(format!(
                    "could not run {}: {}",
                    program.display(),
                    error
                ))
            }
        }
    }
}

/// Stand-in on systems without an icon bundling tool.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Unsupported;

impl IconBundler for Unsupported {
    fn description(&self) -> String {
        "none".to_owned()
    }

    fn bundle(&self, _iconset: &Path, _icns: &Path) -> BundleOutcome {
        BundleOutcome::Unavailable("requires macOS".to_owned())
    }
}

/// Picks the bundler for this system. An explicit program always selects
/// `iconutil`, regardless of the OS.
pub fn select(program: Option<&Path>) -> Box<dyn IconBundler> {
    match program {
        Some(program) => Box::new(Iconutil::new(program)),
        None => platform_default(),
    }
}

#[cfg(target_os = "macos")]
fn platform_default() -> Box<dyn IconBundler> {
    Box::new(Iconutil::default())
}

#[cfg(not(target_os = "macos"))]
fn platform_default() -> Box<dyn IconBundler> {
    Box::new(Unsupported)
}
