//! Route paths.

pub const GET_INDEX: &str = "/";
pub const GET_API_HEALTH: &str = "/api/health";
pub const GET_API_COURTS: &str = "/api/courts";
pub const POST_API_CHAT: &str = "/api/chat";
/// Static wasm bundle produced by `wasm-pack build --target web`.
pub const PKG_PREFIX: &str = "/pkg";
