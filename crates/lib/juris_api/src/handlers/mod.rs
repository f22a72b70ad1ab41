//! Request handlers.

pub mod chat;
pub mod courts;
pub mod health;
pub mod page;
