//! # juris_core
//!
//! Core domain logic for Juris, the Brazilian case-law research assistant.
//!
//! The `runtime` feature (on by default) adds the pieces that only run on the
//! server: the randomized [`search`] generator, [`prompt`] assembly and the
//! [`llm`] completion client. The catalog, models and [`ui`] state machines
//! are always available so the wasm bindings can share them.

pub mod courts;
pub mod models;
pub mod ui;

#[cfg(feature = "runtime")]
pub mod llm;
#[cfg(feature = "runtime")]
pub mod prompt;
#[cfg(feature = "runtime")]
pub mod search;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns a greeting string with the crate version.
pub fn hello_world() -> String {
    format!("Hello from juris_core v{}", version())
}
