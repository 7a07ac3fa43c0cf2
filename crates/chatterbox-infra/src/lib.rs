//! Infrastructure layer for Chatterbox.
//!
//! Contains implementations of the ports defined in `chatterbox-core`:
//! SQLite storage for messages, the loopback HTTP poster the bots use, and
//! the database config file loader.

pub mod client;
pub mod config;
pub mod sqlite;
