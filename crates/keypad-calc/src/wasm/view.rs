//! Renders calculator snapshots into the DOM
//!
//! The view only ever sees [`Snapshot`]s; the state machine holds no element
//! references.

use super::dom::{MockDom, ACTIVE_CLASS, DISPLAY_ID, ERROR_CLASS};
use crate::core::{Operator, Snapshot};
use crate::keypad::Keypad;

/// Thin view layer between a snapshot and the page
#[derive(Debug, Clone)]
pub struct DomView {
    display_id: String,
    keypad: Keypad,
}

impl Default for DomView {
    fn default() -> Self {
        Self::new()
    }
}

impl DomView {
    /// Creates a view over the standard calculator page
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_id: DISPLAY_ID.to_string(),
            keypad: Keypad::new(),
        }
    }

    /// Returns the keypad whose buttons this view updates
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Writes the display and moves the `active` class to the active operator
    pub fn render(&self, dom: &mut MockDom, snapshot: &Snapshot) {
        if let Some(display) = dom.get_element_mut(&self.display_id) {
            display.set_attr("value", &snapshot.display);
            display.set_text(&snapshot.display);
            display.toggle_class(ERROR_CLASS, snapshot.error);
        }

        for op in Operator::ALL {
            let Some(button) = self.keypad.operator_button(op) else {
                continue;
            };
            if let Some(element) = dom.get_element_mut(&button.id) {
                element.toggle_class(ACTIVE_CLASS, snapshot.active_operator == Some(op));
            }
        }
    }

    /// Reads the display text back from the page
    #[must_use]
    pub fn read_display<'a>(&self, dom: &'a MockDom) -> Option<&'a str> {
        dom.get_element(&self.display_id)
            .and_then(|e| e.get_attr("value"))
    }

    /// Reads the highlighted operator back from the page
    #[must_use]
    pub fn read_active_operator(&self, dom: &MockDom) -> Option<Operator> {
        Operator::ALL.into_iter().find(|&op| {
            self.keypad
                .operator_button(op)
                .and_then(|b| dom.get_element(&b.id))
                .is_some_and(|e| e.has_class(ACTIVE_CLASS))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(display: &str, active: Option<Operator>, error: bool) -> Snapshot {
        Snapshot {
            display: display.to_string(),
            active_operator: active,
            error,
        }
    }

    #[test]
    fn test_render_writes_display() {
        let view = DomView::new();
        let mut dom = MockDom::calculator(view.keypad());
        view.render(&mut dom, &snapshot("12.5", None, false));
        let display = dom.get_element(DISPLAY_ID).unwrap();
        assert_eq!(display.get_attr("value"), Some("12.5"));
        assert_eq!(display.text_content, "12.5");
        assert_eq!(view.read_display(&dom), Some("12.5"));
    }

    #[test]
    fn test_render_marks_exactly_one_operator() {
        let view = DomView::new();
        let mut dom = MockDom::calculator(view.keypad());
        view.render(&mut dom, &snapshot("5", Some(Operator::Add), false));
        assert_eq!(dom.ids_with_class(ACTIVE_CLASS), vec!["btn-plus"]);

        view.render(&mut dom, &snapshot("5", Some(Operator::Divide), false));
        assert_eq!(dom.ids_with_class(ACTIVE_CLASS), vec!["btn-divide"]);
        assert_eq!(view.read_active_operator(&dom), Some(Operator::Divide));
    }

    #[test]
    fn test_render_clears_highlight() {
        let view = DomView::default();
        let mut dom = MockDom::calculator(view.keypad());
        view.render(&mut dom, &snapshot("5", Some(Operator::Multiply), false));
        view.render(&mut dom, &snapshot("53", None, false));
        assert!(dom.ids_with_class(ACTIVE_CLASS).is_empty());
        assert_eq!(view.read_active_operator(&dom), None);
    }

    #[test]
    fn test_render_error_class() {
        let view = DomView::new();
        let mut dom = MockDom::calculator(view.keypad());
        view.render(&mut dom, &snapshot("Error", None, true));
        assert!(dom.get_element(DISPLAY_ID).unwrap().has_class(ERROR_CLASS));
        view.render(&mut dom, &snapshot("7", None, false));
        assert!(!dom.get_element(DISPLAY_ID).unwrap().has_class(ERROR_CLASS));
    }

    #[test]
    fn test_render_on_empty_dom_is_noop() {
        let view = DomView::new();
        let mut dom = MockDom::new();
        view.render(&mut dom, &snapshot("1", Some(Operator::Add), false));
        assert_eq!(view.read_display(&dom), None);
        assert_eq!(view.read_active_operator(&dom), None);
    }
}
