/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Request;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub elevator: ElevatorConfig,
}

#[derive(Deserialize, Clone)]
pub struct ElevatorConfig {
    pub max_floor: u8,
}

/// A simulation run: where the car starts and the request batches to serve,
/// in order.
#[derive(Deserialize, Clone)]
pub struct Scenario {
    pub initial_floor: u8,
    pub batches: Vec<Batch>,
}

#[derive(Deserialize, Clone)]
pub struct Batch {
    pub requests: Vec<Request>,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = read_file(path)?;
    toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn load_scenario(path: &str) -> Result<Scenario, ConfigError> {
    let scenario_str = read_file(path)?;
    toml::from_str(&scenario_str).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/***************************************/
/*         Private functions           */
/***************************************/
fn read_file(path: &str) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })
}
