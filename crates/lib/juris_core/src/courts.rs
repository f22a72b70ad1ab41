//! Court catalog.
//!
//! The six Brazilian court tiers the assistant knows about, in display order.
//! The table is immutable; everything else refers to courts by [`CourtCode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Short identifier for a court tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourtCode {
    #[serde(rename = "STF")]
    Stf,
    #[serde(rename = "STJ")]
    Stj,
    #[serde(rename = "TST")]
    Tst,
    #[serde(rename = "TRF")]
    Trf,
    #[serde(rename = "TRT")]
    Trt,
    #[serde(rename = "TJ")]
    Tj,
}

/// Returned when a string is not one of the catalog codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown court code: {0}")]
pub struct UnknownCourt(pub String);

impl CourtCode {
    /// All codes in catalog order.
    pub const ALL: [CourtCode; 6] = [
        CourtCode::Stf,
        CourtCode::Stj,
        CourtCode::Tst,
        CourtCode::Trf,
        CourtCode::Trt,
        CourtCode::Tj,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourtCode::Stf => "STF",
            CourtCode::Stj => "STJ",
            CourtCode::Tst => "TST",
            CourtCode::Trf => "TRF",
            CourtCode::Trt => "TRT",
            CourtCode::Tj => "TJ",
        }
    }

    /// Catalog entry for this code.
    pub fn court(&self) -> &'static Court {
        // CATALOG is laid out in the same order as ALL.
        &CATALOG[*self as usize]
    }

    /// STF and STJ issue binding theses (repercussão geral / recursos repetitivos).
    pub fn is_high_tier(&self) -> bool {
        matches!(self, CourtCode::Stf | CourtCode::Stj)
    }
}

impl fmt::Display for CourtCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourtCode {
    type Err = UnknownCourt;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourtCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCourt(s.to_string()))
    }
}

/// Badge colour used when rendering results for a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
    Pink,
}

impl BadgeColor {
    /// Tailwind classes for the court badge (light and dark themes).
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeColor::Purple => {
                "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200"
            }
            BadgeColor::Blue => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
            BadgeColor::Green => {
                "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
            }
            BadgeColor::Yellow => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200"
            }
            BadgeColor::Orange => {
                "bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-200"
            }
            BadgeColor::Pink => "bg-pink-100 text-pink-800 dark:bg-pink-900 dark:text-pink-200",
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Court {
    pub code: CourtCode,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    #[serde(skip)]
    pub badge: BadgeColor,
}

/// The fixed catalog, in display order.
pub static CATALOG: [Court; 6] = [
    Court {
        code: CourtCode::Stf,
        name: "Supremo Tribunal Federal (STF)",
        description: "Guarda da Constituição",
        url: "https://portal.stf.jus.br",
        badge: BadgeColor::Purple,
    },
    Court {
        code: CourtCode::Stj,
        name: "Superior Tribunal de Justiça (STJ)",
        description: "Uniformização da lei federal",
        url: "https://www.stj.jus.br",
        badge: BadgeColor::Blue,
    },
    Court {
        code: CourtCode::Tst,
        name: "Tribunal Superior do Trabalho (TST)",
        description: "Matéria trabalhista",
        url: "https://www.tst.jus.br",
        badge: BadgeColor::Green,
    },
    Court {
        code: CourtCode::Trf,
        name: "Tribunais Regionais Federais (TRF)",
        description: "Justiça Federal",
        url: "https://www.trf1.jus.br",
        badge: BadgeColor::Yellow,
    },
    Court {
        code: CourtCode::Trt,
        name: "Tribunais Regionais do Trabalho (TRT)",
        description: "Justiça do Trabalho",
        url: "https://www.trt1.jus.br",
        badge: BadgeColor::Orange,
    },
    Court {
        code: CourtCode::Tj,
        name: "Tribunais de Justiça Estaduais (TJ)",
        description: "Justiça Estadual",
        url: "https://www.tjsp.jus.br",
        badge: BadgeColor::Pink,
    },
];

/// Full catalog in display order.
pub fn catalog() -> &'static [Court] {
    &CATALOG
}

/// Parse a list of raw codes, stopping at the first unknown one.
pub fn parse_codes<S: AsRef<str>>(raw: &[S]) -> Result<Vec<CourtCode>, UnknownCourt> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}
