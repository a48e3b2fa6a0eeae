use crate::error::Result;
use base64::prelude::*;
use sha2::{Digest, Sha256};

/// 1x1 sky blue PNG (base64). The decoded bytes are what gets written, whatever
/// pixel value they carry.
pub const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChAI9hzGpUwAAAABJRU5ErkJggg==";

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Decoded placeholder image, shared read-only by every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn has_png_signature(&self) -> bool {
        self.bytes.starts_with(&PNG_SIGNATURE)
    }

    pub fn sha256_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        hex::encode(hasher.finalize())
    }
}

pub fn decode() -> Result<Payload> {
    let bytes = BASE64_STANDARD.decode(PNG_B64)?;
    Ok(Payload { bytes })
}
