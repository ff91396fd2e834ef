use crate::{
    error::Error,
    logger::Logger,
    sink::{ConsoleSink, JsonLinesSink, Sink},
    types::Field,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Declarative description of one output target.
///
/// A sink is configured with whatever destination it needs at construction
/// time; there is no reconfiguration after that.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(tag = "sink", rename_all = "kebab-case")]
pub enum SinkConfig {
    /// Human-readable rendering to stdout.
    Console,
    /// One JSON object per record, appended to the given file.
    JsonLines { path: PathBuf },
}

impl SinkConfig {
    pub fn build(&self) -> Box<dyn Sink> {
        match self {
            SinkConfig::Console => Box::new(ConsoleSink::new()),
            SinkConfig::JsonLines { path } => Box::new(JsonLinesSink::new(path)),
        }
    }
}

/// Declarative logger configuration: the ordered sink list and the base
/// fields merged into every record.
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
    #[serde(default)]
    pub base_fields: Vec<Field>,
}

impl Config {
    pub fn from_yaml(s: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Builds a [`Logger`] over freshly-constructed sinks.
    ///
    /// Never fails: a sink whose setup failed is registered in its degraded
    /// state, matching direct construction.
    pub fn build_logger(&self) -> Logger {
        let sinks = self.sinks.iter().map(SinkConfig::build).collect();
        Logger::new(sinks, self.base_fields.iter().cloned())
    }
}
