//! Module implement configuration for [RbTree] instances.
//!
//! [RbTree]: crate::rbtree::RbTree

use serde::Deserialize;

use std::{ffi, fs};

use crate::Result;

/// Default value for `max_depth`, tree depth beyond which
/// `validate()` shall fail.
pub const MAX_TREE_DEPTH: usize = 100;

/// Default name for an index.
pub const DEFAULT_NAME: &str = "rbtree";

/// Configuration for [RbTree] index.
///
/// Can be composed programmatically, or loaded from TOML text, where every
/// field is optional:
///
/// ```toml
/// name = "users"
/// max_depth = 64
/// capacity = 1024
/// ```
///
/// [RbTree]: crate::rbtree::RbTree
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the index, used for logging and statistics.
    ///
    /// Default: [DEFAULT_NAME]
    pub name: String,
    /// Maximum depth of the tree tolerated by `validate()`. A balanced tree
    /// of `n` nodes never exceeds `2 * log2(n + 1)`.
    ///
    /// Default: [MAX_TREE_DEPTH]
    pub max_depth: usize,
    /// Number of nodes to pre-allocate.
    ///
    /// Default: 0
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            name: DEFAULT_NAME.to_string(),
            max_depth: MAX_TREE_DEPTH,
            capacity: 0,
        }
    }
}

impl Config {
    /// Create a new configuration for index identified by `name`.
    pub fn new(name: &str) -> Config {
        Config {
            name: name.to_string(),
            ..Config::default()
        }
    }

    /// Set maximum tree depth tolerated by validation.
    pub fn set_max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the number of nodes to pre-allocate.
    pub fn set_capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Config> {
        let config: Config = err_at!(InvalidConfig, toml::from_str(text))?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from TOML file.
    pub fn from_file(loc: &ffi::OsStr) -> Result<Config> {
        let text = err_at!(IOError, fs::read_to_string(loc), "{:?}", loc)?;
        Config::from_toml(&text)
    }

    fn check(&self) -> Result<()> {
        if self.name.is_empty() {
            err_at!(InvalidConfig, msg: "empty index name")?;
        }
        if self.max_depth == 0 {
            err_at!(InvalidConfig, msg: "max_depth must be > 0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
