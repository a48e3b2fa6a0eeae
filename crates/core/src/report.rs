use crate::layout::AssetKind;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Summary of one generator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generated_at: String,
    pub output_dir: PathBuf,
    pub payload_sha256: String,
    pub files: Vec<WrittenAsset>,
}

impl GenerationReport {
    pub fn new(output_dir: PathBuf, payload_sha256: String) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            output_dir,
            payload_sha256,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, kind: AssetKind, path: PathBuf, size_bytes: u64) -> Self {
        self.files.push(WrittenAsset {
            kind,
            path,
            size_bytes,
        });
        self
    }
}
