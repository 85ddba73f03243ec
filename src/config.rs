/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_cars: u32,
    pub tick_interval_ms: u64,
    pub n_floors: i32,
    pub move_time_per_floor: u32,
    pub door_dwell_time: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_cars: 4,
            tick_interval_ms: 1000,
            n_floors: 10,
            move_time_per_floor: 10,
            door_dwell_time: 10,
        }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_cars == 0 {
            return Err(ConfigError::Invalid("n_cars must be at least 1".into()));
        }
        if self.n_floors < 2 {
            return Err(ConfigError::Invalid("n_floors must be at least 2".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if self.move_time_per_floor == 0 || self.door_dwell_time == 0 {
            return Err(ConfigError::Invalid(
                "move_time_per_floor and door_dwell_time must be positive".into(),
            ));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Reads `path`, falling back to the defaults when the file does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config = match fs::read_to_string(path.as_ref()) {
        Ok(config_str) => parse_config(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "No configuration file at {}, using defaults",
                path.as_ref().display()
            );
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };
    config.simulation.validate()?;
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
