//! Browser-side state, kept free of I/O so it runs natively in tests and in
//! the wasm bindings.
//!
//! - [`chat::ChatSession`] — conversation and the idle / awaiting-reply machine
//! - [`courts::CourtSelection`] — which courts a search covers
//! - [`results::ResultsPanel`] — what the results area should show

pub mod chat;
pub mod courts;
pub mod results;

pub use chat::{ChatSession, ChatState, SubmitRejected};
pub use courts::CourtSelection;
pub use results::{ResultCard, ResultsPanel};
