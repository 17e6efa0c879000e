//! Output locations and the fixed size tables for every generated icon.
use std::path::{Path, PathBuf};

/// Edge length of `appicon.png`.
pub const APP_ICON_SIZE: u32 = 1024;
/// Edge length of the Linux icon.
pub const LINUX_ICON_SIZE: u32 = 512;
/// Edge length of the intermediate image the ICO frames are resized from.
pub const WINDOWS_ICON_SIZE: u32 = 256;
/// Frames embedded into `icon.ico`, smallest first.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// A single image of a macOS iconset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IconsetEntry {
    pub size: u32,
    pub filename: &'static str,
}

const fn entry(size: u32, filename: &'static str) -> IconsetEntry {
    IconsetEntry { size, filename }
}

/// Images of a macOS iconset in the order `iconutil` documents them.
pub const ICONSET: [IconsetEntry; 10] = [
    entry(16, "icon_16x16.png"),
    entry(32, "icon_16x16@2x.png"),
    entry(32, "icon_32x32.png"),
    entry(64, "icon_32x32@2x.png"),
    entry(128, "icon_128x128.png"),
    entry(256, "icon_128x128@2x.png"),
    entry(256, "icon_256x256.png"),
    entry(512, "icon_256x256@2x.png"),
    entry(512, "icon_512x512.png"),
    entry(1024, "icon_512x512@2x.png"),
];

/// A file the generator is going to write.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub description: String,
}

fn png(path: PathBuf, size: u32) -> PlannedFile {
    PlannedFile {
        path,
        description: format!("{}x{} PNG", size, size),
    }
}

/// File layout below the destination root of one application.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct IconLayout {
    root: PathBuf,
}

impl IconLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        IconLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_icon(&self) -> PathBuf {
        self.root.join("appicon.png")
    }

    pub fn darwin_dir(&self) -> PathBuf {
        self.root.join("darwin")
    }

    pub fn windows_dir(&self) -> PathBuf {
        self.root.join("windows")
    }

    pub fn linux_dir(&self) -> PathBuf {
        self.root.join("linux")
    }

    pub fn iconset_dir(&self) -> PathBuf {
        self.darwin_dir().join("icon.iconset")
    }

    pub fn icns(&self) -> PathBuf {
        self.darwin_dir().join("icon.icns")
    }

    pub fn windows_icon(&self) -> PathBuf {
        self.windows_dir().join("icon.ico")
    }

    pub fn linux_icon(&self) -> PathBuf {
        self.linux_dir().join("icon.png")
    }

    /// Every directory the generator writes into, parents first.
    pub fn directories(&self) -> [PathBuf; 5] {
        [
            self.root.clone(),
            self.darwin_dir(),
            self.windows_dir(),
            self.linux_dir(),
            self.iconset_dir(),
        ]
    }

    /// Every file a generation run produces, in the order they are written.
    /// The iconset images are replaced by the bundle once bundling succeeds.
    pub fn planned(&self) -> Vec<PlannedFile> {
        let ico_sizes = ICO_SIZES
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut files = vec![
            png(self.app_icon(), APP_ICON_SIZE),
            png(self.linux_icon(), LINUX_ICON_SIZE),
            PlannedFile {
                path: self.windows_icon(),
                description: format!("ICO with {}", ico_sizes),
            },
        ];
        let iconset_dir = self.iconset_dir();
        files.extend(
            ICONSET
                .iter()
                .map(|entry| png(iconset_dir.join(entry.filename), entry.size)),
        );
        files.push(PlannedFile {
            path: self.icns(),
            description: "ICNS bundled from the iconset, if iconutil is available".to_owned(),
        });
        files
    }
}
