//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering AppState
//! - Reusable widgets

pub mod components;
pub mod widgets;
