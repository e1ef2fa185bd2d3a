//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod buttons;
pub mod entry_table;
pub mod status_bar;
pub mod text_field;
