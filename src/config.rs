//! Conversion settings.

use serde::{Deserialize, Serialize};

/// Settings for document conversion and batching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Line-format version written into decoded headers.
    pub adif_version: String,
    /// Producer name written into decoded headers.
    pub program_id: String,
    /// Producer version written into decoded headers.
    pub program_version: String,
    /// Records handed to each blocking worker by [`crate::batch`].
    pub batch_chunk_size: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            adif_version: "3.1.1".to_string(),
            program_id: env!("CARGO_PKG_NAME").to_string(),
            program_version: env!("CARGO_PKG_VERSION").to_string(),
            batch_chunk_size: 256,
        }
    }
}
