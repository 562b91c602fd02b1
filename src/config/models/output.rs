//! Output location

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where generated files are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Parent of the `articles/`, `images/` and `output/` directories
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
        }
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}
