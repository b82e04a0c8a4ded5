use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a configuration file.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid configuration.
    #[error("unable to load data from `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "config_read",
            ConfigError::Parse { .. } => "config_parse",
        }
    }
}

/// Errors raised while wiring a scenario from its description.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("unknown influencer `{0}`")]
    UnknownInfluencer(String),

    #[error("unknown subscriber `{0}`")]
    UnknownSubscriber(String),

    /// The same name was declared twice in one list.
    #[error("`{0}` is declared more than once")]
    DuplicateName(String),
}

impl ScenarioError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ScenarioError::UnknownInfluencer(_) => "scenario_unknown_influencer",
            ScenarioError::UnknownSubscriber(_) => "scenario_unknown_subscriber",
            ScenarioError::DuplicateName(_) => "scenario_duplicate_name",
        }
    }
}
