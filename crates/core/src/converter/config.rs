//! Configuration for the converter module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the obj2gltf-based converter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Path to the obj2gltf executable.
    ///
    /// A bare name is looked up on `PATH`; anything with a directory
    /// component is used as-is and must exist.
    #[serde(default = "default_tool_path")]
    pub tool_path: PathBuf,

    /// Additional arguments appended to every invocation.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_tool_path() -> PathBuf {
    PathBuf::from("obj2gltf")
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            tool_path: default_tool_path(),
            extra_args: Vec::new(),
        }
    }
}

impl ConverterConfig {
    /// Creates a config with a custom tool path.
    pub fn with_tool_path(tool_path: PathBuf) -> Self {
        Self {
            tool_path,
            ..Default::default()
        }
    }

    /// Sets extra arguments appended to every invocation.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }
}
