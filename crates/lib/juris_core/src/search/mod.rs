//! Search module — produces the rulings shown next to each answer.
//!
//! There is no court database behind this: [`mock::MockResultSource`] fills
//! in placeholder records keyed by court code and query. Callers depend on
//! the [`ResultSource`] trait only, so a real retrieval backend can replace
//! the generator without touching the chat endpoint.
//!
//! # Public API
//!
//! - [`ResultSource`] — query + court set → ordered result list
//! - [`mock::generate`] — generate with the default config and thread RNG
//! - [`mock::generate_with_rng`] — generate with an explicit config and RNG
//! - [`GeneratorConfig`] — configurable date range for generated records

pub mod mock;

use std::env;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::courts::CourtCode;
use crate::models::SearchResult;

pub use mock::{MockResultSource, generate, generate_with_rng};

/// Errors a result source can report.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend error: {0}")]
    Backend(String),
}

/// Source of search results for a chat turn.
///
/// An empty `courts` slice means every court in the catalog.
#[async_trait]
pub trait ResultSource: Send + Sync {
    async fn search(
        &self,
        query: &str,
        courts: &[CourtCode],
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// Default lower bound (inclusive) for generated years.
pub const DEFAULT_YEAR_FROM: i32 = 2020;
/// Default upper bound (exclusive) for generated years.
pub const DEFAULT_YEAR_UNTIL: i32 = 2025;

/// Invalid generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid year range: {from}..{until} is empty")]
pub struct InvalidYearRange {
    pub from: i32,
    pub until: i32,
}

/// Settings for generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    year_from: i32,
    year_until: i32,
}

impl GeneratorConfig {
    /// Year range `[year_from, year_until)`. The range must be non-empty.
    pub fn new(year_from: i32, year_until: i32) -> Result<Self, InvalidYearRange> {
        if year_from >= year_until {
            return Err(InvalidYearRange {
                from: year_from,
                until: year_until,
            });
        }
        Ok(Self {
            year_from,
            year_until,
        })
    }

    pub fn year_from(&self) -> i32 {
        self.year_from
    }

    pub fn year_until(&self) -> i32 {
        self.year_until
    }

    /// Reads the year range from the environment.
    ///
    /// | Variable          | Default |
    /// |-------------------|---------|
    /// | `MOCK_YEAR_FROM`  | `2020`  |
    /// | `MOCK_YEAR_UNTIL` | `2025`  |
    ///
    /// Unparseable values or an empty range fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let from = read_year(&lookup, "MOCK_YEAR_FROM", DEFAULT_YEAR_FROM);
        let until = read_year(&lookup, "MOCK_YEAR_UNTIL", DEFAULT_YEAR_UNTIL);
        Self::new(from, until).unwrap_or_else(|e| {
            warn!("{e}; using default year range");
            Self::default()
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            year_from: DEFAULT_YEAR_FROM,
            year_until: DEFAULT_YEAR_UNTIL,
        }
    }
}

fn read_year(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: i32) -> i32 {
    match lookup(var) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var, value = %raw, "ignoring non-numeric year");
            default
        }),
        None => default,
    }
}
