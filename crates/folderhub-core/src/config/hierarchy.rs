//! Hierarchy seed configuration.

use serde::{Deserialize, Serialize};

/// Where the initial folder records come from, and which move the
/// demonstration binary performs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Path to a JSON file holding a flat array of folder records.
    /// When absent, the built-in sample data set is used.
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Name of the folder the demo moves.
    #[serde(default = "default_demo_source")]
    pub demo_source: String,
    /// Name of the folder the demo moves into.
    #[serde(default = "default_demo_destination")]
    pub demo_destination: String,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            demo_source: default_demo_source(),
            demo_destination: default_demo_destination(),
        }
    }
}

fn default_demo_source() -> String {
    "bravo".to_string()
}

fn default_demo_destination() -> String {
    "delta".to_string()
}
