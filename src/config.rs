//! TOML configuration for transcoding runs
//!
//! Every section is optional and defaults to the ChaCha20 preset:
//!
//! ```toml
//! log_level = "info"
//!
//! [suite]
//! marker = "suite"
//! include = "Cipher Test Vector"
//! exclude = "Chunked"
//!
//! [output]
//! schema = "chacha20"
//! ```
//!
//! `[output.schema]` may instead be a full inline table with `title`,
//! `guard`, `struct_name`, `array_name`, `count_name` and `fields`.

use std::path::Path;

use serde::Deserialize;

use crate::api::{Error, Result};
use crate::emit::{Schema, StaticDataEmitter};
use crate::parse::{SuiteConfig, SuiteExtractor};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Output schema, by preset name or spelled out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaChoice {
    Preset(String),
    Inline(Schema),
}

impl Default for SchemaChoice {
    fn default() -> Self {
        SchemaChoice::Preset("chacha20".into())
    }
}

impl SchemaChoice {
    pub fn resolve(&self) -> Result<Schema> {
        match self {
            SchemaChoice::Preset(name) => Schema::preset(name),
            SchemaChoice::Inline(schema) => {
                schema.validate()?;
                Ok(schema.clone())
            }
        }
    }
}

/// The `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub schema: SchemaChoice,
}

/// Top-level configuration loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranscodeConfig {
    pub suite: SuiteConfig,
    pub output: OutputSection,
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            suite: SuiteConfig::default(),
            output: OutputSection::default(),
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl TranscodeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::resource(path, e))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| Error::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_suite(mut self, suite: SuiteConfig) -> Self {
        self.suite = suite;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.output.schema = SchemaChoice::Inline(schema);
        self
    }

    pub fn with_schema_preset(mut self, name: impl Into<String>) -> Self {
        self.output.schema = SchemaChoice::Preset(name.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Check both the suite dialect and the output schema
    pub fn validate(&self) -> Result<()> {
        self.suite.validate()?;
        self.output.schema.resolve()?;
        Ok(())
    }

    pub fn schema(&self) -> Result<Schema> {
        self.output.schema.resolve()
    }

    pub fn extractor(&self) -> Result<SuiteExtractor> {
        SuiteExtractor::new(self.suite.clone())
    }

    pub fn emitter(&self) -> Result<StaticDataEmitter> {
        StaticDataEmitter::new(self.schema()?)
    }
}
