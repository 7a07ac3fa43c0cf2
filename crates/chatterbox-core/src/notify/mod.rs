//! Fan-out notification pipeline decoupling API writes from bot workers.

pub mod bus;

pub use bus::NotificationBus;
