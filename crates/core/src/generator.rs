use crate::error::{GeneratorError, Result};
use crate::layout::AssetLayout;
use crate::payload::{self, Payload};
use crate::report::GenerationReport;
use std::fs;
use std::path::Path;

/// Writes the placeholder assets under the current working directory.
pub fn generate() -> Result<GenerationReport> {
    write_layout(&AssetLayout::default())
}

/// Writes `assets/{icon,splash,adaptive-icon,favicon}.png` under `base`.
///
/// Files are written one after another. A failure stops the run and leaves
/// whatever was already written in place.
pub fn generate_in(base: &Path) -> Result<GenerationReport> {
    write_layout(&AssetLayout::under(base))
}

fn write_layout(layout: &AssetLayout) -> Result<GenerationReport> {
    ensure_output_dir(layout.output_dir())?;

    let payload = payload::decode()?;
    if !payload.has_png_signature() {
        tracing::warn!(bytes = payload.size_bytes(), "embedded payload lacks PNG signature");
    }

    let mut report = GenerationReport::new(layout.output_dir().to_path_buf(), payload.sha256_hex());
    for (kind, path) in layout.targets() {
        write_asset(&path, &payload)?;
        tracing::debug!(?kind, path = %path.display(), bytes = payload.size_bytes(), "placeholder written");
        report = report.with_file(kind, path, payload.size_bytes());
    }
    Ok(report)
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(GeneratorError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    fs::create_dir_all(dir).map_err(|source| GeneratorError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!(dir = %dir.display(), "output directory ready");
    Ok(())
}

fn write_asset(path: &Path, payload: &Payload) -> Result<()> {
    fs::write(path, payload.as_bytes()).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })
}
