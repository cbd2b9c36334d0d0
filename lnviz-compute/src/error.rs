//! Errors at the JSON/wasm boundary.

use lnviz_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    Config(#[from] ConfigError),
}
