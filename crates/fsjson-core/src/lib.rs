//! fsjson Core — shared error types.
//!
//! This crate provides the foundational types used across all fsjson crates.
//! It has no internal fsjson dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]

pub mod error;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
