pub mod error;
pub mod generator;
pub mod layout;
pub mod payload;
pub mod report;

pub use error::{GeneratorError, Result};
pub use generator::{generate, generate_in};
pub use layout::{AssetKind, AssetLayout, OUTPUT_DIR};
pub use payload::{Payload, PNG_B64, PNG_SIGNATURE};
pub use report::{GenerationReport, WrittenAsset};
