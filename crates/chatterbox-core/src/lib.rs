//! Business logic and port definitions for Chatterbox.
//!
//! This crate defines the "ports" (the repository and poster traits) that
//! the infrastructure layer implements, plus the notification bus, the bot
//! workers, and the message service. It depends only on `chatterbox-types`
//! -- never on `chatterbox-infra` or any database/IO crate.

pub mod bot;
pub mod notify;
pub mod repository;
pub mod service;
