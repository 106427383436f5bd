use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Options for one generator instance. Immutable after construction; every
/// field has a concrete default so a config file or CLI invocation only
/// needs to name what it changes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateOptions {
    /// Directory the input and output directories are resolved against
    #[serde(default = "default_root_dir")]
    pub root_dir: String,

    /// Directory scanned for stylesheet modules, relative to the root
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Directory declaration files are written to, relative to the root.
    /// Defaults to the input directory.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Glob pattern selecting stylesheet modules under the input directory
    #[serde(default = "default_glob_pattern")]
    pub glob_pattern: String,

    /// Strip the stylesheet extension before appending the declaration
    /// suffix (`button.module.css` -> `button.module.d.ts`)
    #[serde(default)]
    pub drop_extensions: bool,

    /// Additionally expose a camelCase alias for hyphenated class names
    #[serde(default)]
    pub camel_case: bool,

    /// Opaque configuration handed through to the stylesheet parser
    #[serde(default)]
    pub parser_config: Option<serde_json::Value>,
}

fn default_root_dir() -> String {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}

fn default_input_dir() -> String {
    ".".to_string()
}

fn default_glob_pattern() -> String {
    "**/*.*.css".to_string()
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            input_dir: default_input_dir(),
            output_dir: None,
            glob_pattern: default_glob_pattern(),
            drop_extensions: false,
            camel_case: false,
            parser_config: None,
        }
    }
}

impl GenerateOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the options against the filesystem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let input_root = self.input_root();
        if !input_root.exists() {
            return Err(ConfigError::InvalidConfig(format!(
                "Input directory does not exist: {}",
                input_root.display()
            )));
        }
        Ok(())
    }

    /// Merge with another set of options, with `other` taking precedence
    /// for any field that differs from its default.
    pub fn merge(&mut self, other: &GenerateOptions) {
        if other.root_dir != default_root_dir() {
            self.root_dir = other.root_dir.clone();
        }
        if other.input_dir != default_input_dir() {
            self.input_dir = other.input_dir.clone();
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir.clone();
        }
        if other.glob_pattern != default_glob_pattern() {
            self.glob_pattern = other.glob_pattern.clone();
        }
        if other.drop_extensions {
            self.drop_extensions = true;
        }
        if other.camel_case {
            self.camel_case = true;
        }
        if other.parser_config.is_some() {
            self.parser_config = other.parser_config.clone();
        }
    }

    /// Effective output directory name
    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }

    /// Input directory resolved against the root
    pub fn input_root(&self) -> PathBuf {
        Path::new(&self.root_dir).join(&self.input_dir)
    }

    /// Output directory resolved against the root
    pub fn output_root(&self) -> PathBuf {
        Path::new(&self.root_dir).join(self.output_dir())
    }
}
