//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - CLI argument processing
//! - Configuration loading
//! - Relay transport
//! - Terminal foundation

pub mod cli;
pub mod config;
pub mod relay;
pub mod tui;
