use serde::{Deserialize, Serialize};

/// Process-wide settings read by the batch engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Run the registered validation hooks on every staged record.
    pub validate_models: bool,
}
