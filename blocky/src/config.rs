use std::error::Error;
use std::fmt::Display;

use crate::{Color, Palette};

/// board settings a host picks once at startup
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    max_size: i64,
    max_depth: u8,
    palette: Palette,
}
impl Config {
    pub const DEFAULT_MAX_SIZE: i64 = 640;
    pub const DEFAULT_MAX_DEPTH: u8 = 5;
    /// a `1 << max_depth` wide board must fit in an i64
    pub const MAX_MAX_DEPTH: u8 = 62;

    pub fn new(max_size: i64, max_depth: u8, colors: Vec<Color>) -> Result<Self, ConfigError> {
        if max_size <= 0 {
            return Err(ConfigError::NonPositiveSize(max_size));
        }
        if max_depth > Self::MAX_MAX_DEPTH {
            return Err(ConfigError::DepthTooLarge(max_depth));
        }
        if max_size % (1 << max_depth) != 0 {
            return Err(ConfigError::IndivisibleSize {
                max_size,
                max_depth,
            });
        }
        let palette = Palette::new(colors).ok_or(ConfigError::EmptyPalette)?;
        Ok(Self {
            max_size,
            max_depth,
            palette,
        })
    }
    /// same size and palette, different depth
    pub fn with_max_depth(self, max_depth: u8) -> Result<Self, ConfigError> {
        Self::new(self.max_size, max_depth, self.palette.colors().to_vec())
    }

    /// side length of the root block
    pub fn max_size(&self) -> i64 {
        self.max_size
    }
    /// deepest level a block can be at, the root is at 0
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    /// side length of a block at `max_depth`
    pub fn min_size(&self) -> i64 {
        self.max_size >> self.max_depth
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: Self::DEFAULT_MAX_SIZE,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            palette: Palette::default(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    NonPositiveSize(i64),
    DepthTooLarge(u8),
    IndivisibleSize { max_size: i64, max_depth: u8 },
    EmptyPalette,
}
impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveSize(max_size) => {
                write!(f, "board size must be positive, got {max_size}")
            }
            Self::DepthTooLarge(max_depth) => write!(
                f,
                "max depth {max_depth} is larger than the supported {}",
                Config::MAX_MAX_DEPTH
            ),
            Self::IndivisibleSize {
                max_size,
                max_depth,
            } => write!(
                f,
                "board size {max_size} can not be halved {max_depth} times evenly"
            ),
            Self::EmptyPalette => write!(f, "palette needs at least one color"),
        }
    }
}
impl Error for ConfigError {}
