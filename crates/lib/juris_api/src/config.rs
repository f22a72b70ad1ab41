//! API server configuration.

use std::path::PathBuf;

use juris_core::llm::LlmConfig;
use juris_core::search::GeneratorConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// Completion provider settings.
    pub llm: LlmConfig,
    /// Year range for generated results.
    pub generator: GeneratorConfig,
    /// Directory holding the `wasm-pack` output served under `/pkg`.
    pub wasm_pkg_dir: PathBuf,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default                      |
    /// |----------------|------------------------------|
    /// | `BIND_ADDR`    | `127.0.0.1:3000`             |
    /// | `WASM_PKG_DIR` | `crates/wasm/juris_wasm/pkg` |
    ///
    /// Provider and generator settings come from [`LlmConfig::from_env`] and
    /// [`GeneratorConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            llm: LlmConfig::from_env(),
            generator: GeneratorConfig::from_env(),
            wasm_pkg_dir: std::env::var("WASM_PKG_DIR")
                .unwrap_or_else(|_| "crates/wasm/juris_wasm/pkg".into())
                .into(),
        }
    }
}
