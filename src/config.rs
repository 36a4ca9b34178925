//! Configuration for fixture regeneration
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Config file (TOML, `--config` or `fixtures.toml` in the fixture dir)
//! 3. Built-in defaults
//!
//! All keys are optional:
//!
//! ```toml
//! [tool]
//! binary = "yosys"
//! passes = ["synth"]
//!
//! [fixtures]
//! input_ext = "v"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NetlistError, NetlistResult};

/// Default config file name, looked up in the fixture directory
pub const CONFIG_FILE_NAME: &str = "fixtures.toml";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub fixtures: FixtureConfig,
}

/// External synthesis tool settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolConfig {
    /// Tool binary name or path
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Synthesis passes run between reading the input and writing JSON
    #[serde(default = "default_passes")]
    pub passes: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            passes: default_passes(),
        }
    }
}

/// Fixture enumeration settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureConfig {
    /// Extension (without dot) identifying input files
    #[serde(default = "default_input_ext")]
    pub input_ext: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            input_ext: default_input_ext(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("yosys")
}

fn default_passes() -> Vec<String> {
    vec!["synth".to_string()]
}

fn default_input_ext() -> String {
    "v".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing file is not an error: callers get the defaults. A present
    /// but malformed file is reported, not silently ignored.
    pub fn load(path: &Path) -> NetlistResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| NetlistError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
