use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const OUTPUT_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Icon,
    Splash,
    AdaptiveIcon,
    Favicon,
}

impl AssetKind {
    /// Write order.
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Icon,
        AssetKind::Splash,
        AssetKind::AdaptiveIcon,
        AssetKind::Favicon,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Icon => "icon.png",
            AssetKind::Splash => "splash.png",
            AssetKind::AdaptiveIcon => "adaptive-icon.png",
            AssetKind::Favicon => "favicon.png",
        }
    }
}

/// Where the placeholder assets live, relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    output_dir: PathBuf,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::under(".")
    }
}

impl AssetLayout {
    pub fn under(base: impl AsRef<Path>) -> Self {
        Self {
            output_dir: base.as_ref().join(OUTPUT_DIR),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, kind: AssetKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    pub fn targets(&self) -> impl Iterator<Item = (AssetKind, PathBuf)> + '_ {
        AssetKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.path_for(kind)))
    }
}
