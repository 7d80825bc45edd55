//! Common types and utilities for the joc Java-to-Objective-C translator.
//!
//! This crate provides the foundational pieces shared by all joc crates:
//! - Resolved translation options (`Options`, `HeaderLayout`)
//! - The raw JSON configuration layer (`RawConfig`, `parse_config`)

pub mod config;
pub mod options;

pub use config::{RawConfig, parse_config};
pub use options::{HeaderLayout, Options};
