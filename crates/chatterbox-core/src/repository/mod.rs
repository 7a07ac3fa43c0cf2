//! Repository trait definitions implemented by `chatterbox-infra`.

pub mod message;
