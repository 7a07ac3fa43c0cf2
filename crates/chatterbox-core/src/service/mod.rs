//! Service layer orchestrating repositories and the notification bus.

pub mod message;

pub use message::MessageService;
