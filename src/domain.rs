//! Domain logic
//!
//! This module contains domain-specific business logic:
//! - Form entries and their wire representation
//! - Nostr event construction, signing and verification
//! - Submission phases and outcomes

pub mod entry;
pub mod nostr;
pub mod submission;
