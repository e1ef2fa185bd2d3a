//! Integration layer
//!
//! Wires the core update loop to the outside world:
//! - Runtime: message queues, update cycle and command execution
//! - AppRunner: terminal event loop and rendering
//! - Headless: one-shot submission without a terminal

pub mod app_runner;
pub mod headless;
pub mod runtime;
