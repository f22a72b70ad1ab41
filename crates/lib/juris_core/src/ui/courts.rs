//! Court selector state.

use crate::courts::CourtCode;

/// Label shown when no court is selected.
pub const ALL_COURTS_LABEL: &str = "Pesquisará em todos os tribunais";

/// Toggle-set over the catalog codes. Empty means "all courts".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtSelection {
    selected: Vec<CourtCode>,
}

impl CourtSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `code` if absent, remove it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, code: CourtCode) -> bool {
        if let Some(pos) = self.selected.iter().position(|c| *c == code) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(code);
            true
        }
    }

    pub fn select_all(&mut self) {
        self.selected = CourtCode::ALL.to_vec();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, code: CourtCode) -> bool {
        self.selected.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Summary line under the selector heading.
    pub fn label(&self) -> String {
        match self.selected.len() {
            0 => ALL_COURTS_LABEL.to_string(),
            n => format!("{n} tribunal(is) selecionado(s)"),
        }
    }

    /// Courts to send with a chat request; `None` lets the server search all.
    pub fn request_courts(&self) -> Option<Vec<CourtCode>> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = CourtSelection::new();
        assert!(selection.toggle(CourtCode::Stj));
        assert!(selection.is_selected(CourtCode::Stj));
        assert!(!selection.toggle(CourtCode::Stj));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_and_clear() {
        let mut selection = CourtSelection::new();
        selection.toggle(CourtCode::Tj);
        selection.select_all();
        assert_eq!(selection.request_courts(), Some(CourtCode::ALL.to_vec()));
        assert_eq!(selection.label(), "6 tribunal(is) selecionado(s)");

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.label(), ALL_COURTS_LABEL);
    }

    #[test]
    fn empty_selection_means_all_courts() {
        let selection = CourtSelection::new();
        assert_eq!(selection.request_courts(), None);
        assert_eq!(selection.label(), "Pesquisará em todos os tribunais");
    }

    #[test]
    fn request_courts_keeps_pick_order() {
        let mut selection = CourtSelection::new();
        selection.toggle(CourtCode::Trt);
        selection.toggle(CourtCode::Stf);
        assert_eq!(
            selection.request_courts(),
            Some(vec![CourtCode::Trt, CourtCode::Stf])
        );
        assert_eq!(selection.label(), "2 tribunal(is) selecionado(s)");
    }
}
