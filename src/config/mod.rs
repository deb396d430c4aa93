//! Configuration module for WorkSight
//!
//! This module handles:
//! - User-level configuration (config.toml)
//! - Environment overrides for data directory and output format

mod user_config;

pub use user_config::{
    OutputConfig, StorageConfig, UserConfig, CONFIG_ENV, DATA_DIR_ENV, FORMAT_ENV, SETTABLE_KEYS,
};
