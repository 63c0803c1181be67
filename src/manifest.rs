//! Project configuration (palswap.yaml) parsing.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PalswapError, Result};

/// Default config file name, looked up in the current directory.
pub const MANIFEST_FILE: &str = "palswap.yaml";

/// Settings loaded from palswap.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Suppress status output.
    pub quiet: bool,

    /// Replace an existing destination file.
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,

    /// Create the destination's parent directory when missing.
    pub create_dirs: bool,
}

fn default_overwrite() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            quiet: false,
            overwrite: default_overwrite(),
            create_dirs: false,
        }
    }
}

impl Manifest {
    /// Load manifest from a palswap.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PalswapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PalswapError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(
                "Check palswap.yaml syntax; known keys are quiet, overwrite, create_dirs"
                    .to_string(),
            ),
        })
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `palswap.yaml` in `dir` is
    /// used when present, and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = default_path(dir);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Location of the default config file in `dir`.
pub fn default_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}
