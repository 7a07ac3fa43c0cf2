//! Shared domain types for Chatterbox.
//!
//! This crate contains the core domain types used across the Chatterbox
//! message board: Message, its request DTOs, bot kinds, configuration, and
//! the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod bot;
pub mod config;
pub mod error;
pub mod message;
