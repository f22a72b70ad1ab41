//! Wire and domain models shared by the API, the UI state and the wasm bindings.

use serde::{Deserialize, Serialize};

use crate::courts::CourtCode;

/// Conversation role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// Kind of a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    /// Súmula: condensed statement of settled case law.
    RulingSummary,
    /// Tese de repercussão geral (STF) or de recurso repetitivo (STJ).
    BindingThesis,
    /// Jurisprudência: a single collegiate decision.
    CaseLaw,
}

impl ResultKind {
    /// Portuguese display label. Binding theses are named after the court
    /// that issues them.
    pub fn label(&self, court: CourtCode) -> &'static str {
        match self {
            ResultKind::RulingSummary => "Súmula",
            ResultKind::BindingThesis if court == CourtCode::Stf => "Tese de Repercussão Geral",
            ResultKind::BindingThesis => "Tese de Recurso Repetitivo",
            ResultKind::CaseLaw => "Jurisprudência",
        }
    }
}

/// A synthetic ruling record shown next to the assistant's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub court: CourtCode,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub label: String,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courts: Option<Vec<CourtCode>>,
}

/// Successful response of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResult>>,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
