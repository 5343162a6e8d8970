//! fsjson Path — classify, test, and expand filesystem paths.
//!
//! # Modules
//!
//! - [`paths`]: Relative/absolute classification, existence checks, lexical cleaning
//! - [`resolver`]: `~` and `$VAR` expansion, absolute path resolution
//! - [`env`]: Environment sources used by the resolver
//! - [`config`]: Expansion settings

#![doc = include_str!("../README.md")]

pub mod config;
pub mod env;
pub mod paths;
pub mod resolver;

pub use config::{ResolverConfig, UndefinedVarPolicy};
pub use env::{Environment, MapEnv, ProcessEnv};
pub use paths::{clean_path, is_path_exists, is_relative_path};
pub use resolver::{PathResolver, abs_path, expand};
