use std::env;
use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

use blocky::{Config, ConfigError};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SEED_VAR: &str = "BLOCKY_SEED";
const MAX_DEPTH_VAR: &str = "BLOCKY_MAX_DEPTH";
const DEMO_VAR: &str = "BLOCKY_DEMO";

/// startup settings read from the environment
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    /// `None` seeds from the os
    pub seed: Option<u64>,
    /// start from the fixed demo board instead of a random one
    pub demo: bool,
}
impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let mut config = Config::default();
        if let Some(max_depth) = read_var::<u8>(MAX_DEPTH_VAR)? {
            config = config.with_max_depth(max_depth)?;
        }
        Ok(Self {
            config,
            seed: read_var(SEED_VAR)?,
            demo: read_var::<u8>(DEMO_VAR)?.is_some_and(|demo| demo != 0),
        })
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

fn read_var<T: FromStr>(var: &'static str) -> Result<Option<T>, SettingsError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::Parse { var, value }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(SettingsError::Parse {
            var,
            value: String::new(),
        }),
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Parse { var: &'static str, value: String },
    Config(ConfigError),
}
impl From<ConfigError> for SettingsError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}
impl Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { var, value } => write!(f, "invalid value {value:?} for {var}"),
            Self::Config(error) => write!(f, "invalid board: {error}"),
        }
    }
}
impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { .. } => None,
            Self::Config(error) => Some(error),
        }
    }
}
