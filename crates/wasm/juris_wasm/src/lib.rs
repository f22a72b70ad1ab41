//! WebAssembly bindings for the chat page.
//!
//! [`ChatWidget`] owns the chat session and the court selection. The page's
//! JavaScript renders whatever the widget reports and performs the `fetch`;
//! every state transition goes through here. Structured data crosses the
//! boundary as JSON strings.

use juris_core::courts::{CourtCode, catalog};
use juris_core::models::ChatResponse;
use juris_core::ui::{ChatSession, CourtSelection, ResultsPanel};
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;

/// Returns the version of the juris_wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    juris_core::version().to_string()
}

/// Chat widget state exposed to the page.
#[wasm_bindgen]
#[derive(Default)]
pub struct ChatWidget {
    session: ChatSession,
    selection: CourtSelection,
}

#[wasm_bindgen]
impl ChatWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChatWidget {
        ChatWidget::default()
    }

    /// `"idle"` or `"awaiting-reply"`.
    pub fn state(&self) -> String {
        self.session.state().as_str().to_string()
    }

    pub fn input(&self) -> String {
        self.session.input().to_string()
    }

    #[wasm_bindgen(js_name = setInput)]
    pub fn set_input(&mut self, input: String) {
        self.session.set_input(input);
    }

    #[wasm_bindgen(js_name = canSend)]
    pub fn can_send(&self) -> bool {
        self.session.can_send()
    }

    #[wasm_bindgen(js_name = inputDisabled)]
    pub fn input_disabled(&self) -> bool {
        self.session.input_disabled()
    }

    #[wasm_bindgen(js_name = showGreeting)]
    pub fn show_greeting(&self) -> bool {
        self.session.show_greeting()
    }

    /// Submit the current input. Returns the JSON request body to POST, or
    /// `undefined` when the input was rejected.
    pub fn submit(&mut self) -> Option<String> {
        let request = self.session.submit(&self.selection).ok()?;
        serde_json::to_string(&request).ok()
    }

    /// Feed a 2xx response body. A body that does not parse counts as a failure.
    #[wasm_bindgen(js_name = receiveReply)]
    pub fn receive_reply(&mut self, body: &str) -> bool {
        match serde_json::from_str::<ChatResponse>(body) {
            Ok(response) => self.session.receive_reply(response),
            Err(_) => self.session.receive_failure(),
        }
    }

    /// Network error or non-2xx status.
    #[wasm_bindgen(js_name = receiveFailure)]
    pub fn receive_failure(&mut self) -> bool {
        self.session.receive_failure()
    }

    #[wasm_bindgen(js_name = takeScrollRequest)]
    pub fn take_scroll_request(&mut self) -> bool {
        self.session.take_scroll_request()
    }

    /// Conversation as `[{role, content}]`.
    #[wasm_bindgen(js_name = messagesJson)]
    pub fn messages_json(&self) -> String {
        to_json(self.session.messages())
    }

    /// Results panel view (`hidden`, `searching` or `results`).
    #[wasm_bindgen(js_name = resultsPanelJson)]
    pub fn results_panel_json(&self) -> String {
        to_json(&ResultsPanel::view(
            self.session.state(),
            self.session.results(),
        ))
    }

    /// Toggle a court. Unknown codes are ignored and reported as not selected.
    #[wasm_bindgen(js_name = toggleCourt)]
    pub fn toggle_court(&mut self, code: &str) -> bool {
        match code.parse::<CourtCode>() {
            Ok(code) => self.selection.toggle(code),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(js_name = selectAllCourts)]
    pub fn select_all_courts(&mut self) {
        self.selection.select_all();
    }

    #[wasm_bindgen(js_name = clearCourts)]
    pub fn clear_courts(&mut self) {
        self.selection.clear();
    }

    #[wasm_bindgen(js_name = courtLabel)]
    pub fn court_label(&self) -> String {
        self.selection.label()
    }

    /// Catalog with a `selected` flag per court.
    #[wasm_bindgen(js_name = courtsJson)]
    pub fn courts_json(&self) -> String {
        let courts: Vec<Value> = catalog()
            .iter()
            .map(|court| {
                json!({
                    "code": court.code,
                    "name": court.name,
                    "description": court.description,
                    "url": court.url,
                    "selected": self.selection.is_selected(court.code),
                })
            })
            .collect();
        to_json(&courts)
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // Only plain data structs reach here; serialization cannot fail for them.
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn submit_then_reply_round_trip() {
        let mut widget = ChatWidget::new();
        widget.toggle_court("STF");
        widget.set_input("prazo recursal".into());

        let body = widget.submit().expect("accepted");
        let request: Value = serde_json::from_str(&body).expect("json");
        assert_eq!(request["courts"], json!(["STF"]));
        assert_eq!(widget.state(), "awaiting-reply");
        assert!(widget.results_panel_json().contains("\"searching\""));

        assert!(widget.receive_reply(r#"{"message":"ok","results":[]}"#));
        assert_eq!(widget.state(), "idle");
        let messages: Value = serde_json::from_str(&widget.messages_json()).expect("json");
        assert_eq!(messages[1]["content"], "ok");
    }

    #[test]
    fn unparseable_reply_counts_as_failure() {
        let mut widget = ChatWidget::new();
        widget.set_input("x".into());
        widget.submit().expect("accepted");
        assert!(widget.receive_reply("<html>"));
        let messages: Value = serde_json::from_str(&widget.messages_json()).expect("json");
        assert!(
            messages[1]["content"]
                .as_str()
                .expect("string")
                .starts_with("Desculpe")
        );
    }

    #[test]
    fn unknown_court_is_ignored() {
        let mut widget = ChatWidget::new();
        assert!(!widget.toggle_court("XYZ"));
        assert_eq!(widget.court_label(), "Pesquisará em todos os tribunais");
    }

    #[test]
    fn courts_json_marks_selection() {
        let mut widget = ChatWidget::new();
        widget.toggle_court("TJ");
        let courts: Value = serde_json::from_str(&widget.courts_json()).expect("json");
        assert_eq!(courts.as_array().expect("array").len(), 6);
        assert_eq!(courts[5]["code"], "TJ");
        assert_eq!(courts[5]["selected"], true);
        assert_eq!(courts[0]["selected"], false);
    }

    #[test]
    fn blank_submit_returns_none() {
        let mut widget = ChatWidget::new();
        widget.set_input("   ".into());
        assert!(widget.submit().is_none());
        assert!(widget.show_greeting());
    }
}
