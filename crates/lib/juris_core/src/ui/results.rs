//! Results panel view model.

use serde::Serialize;

use super::chat::ChatState;
use crate::courts::CourtCode;
use crate::models::{ResultKind, SearchResult};

pub const SEARCHING_LABEL: &str = "Pesquisando nos tribunais...";

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    pub court: CourtCode,
    pub badge_classes: &'static str,
    pub icon: &'static str,
    pub label: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ResultCard {
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            court: result.court,
            badge_classes: result.court.court().badge.classes(),
            icon: kind_icon(result.kind),
            label: result.label.clone(),
            title: result.title.clone(),
            summary: result.summary.clone(),
            number: result.number.clone(),
            date: result.date.clone(),
            url: result.url.clone(),
        }
    }
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ResultsPanel {
    /// Nothing searched yet.
    Hidden,
    /// A chat request is in flight.
    Searching { label: &'static str },
    Results {
        heading: String,
        cards: Vec<ResultCard>,
    },
}

impl ResultsPanel {
    pub fn view(state: ChatState, results: &[SearchResult]) -> Self {
        if state == ChatState::AwaitingReply {
            return ResultsPanel::Searching {
                label: SEARCHING_LABEL,
            };
        }
        if results.is_empty() {
            return ResultsPanel::Hidden;
        }
        ResultsPanel::Results {
            heading: format!("Resultados da Pesquisa ({})", results.len()),
            cards: results.iter().map(ResultCard::from_result).collect(),
        }
    }
}

fn kind_icon(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::RulingSummary => "📋",
        ResultKind::BindingThesis => "📖",
        ResultKind::CaseLaw => "⚖️",
    }
}
