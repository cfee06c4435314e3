//! Window visibility, geometry and the caret indicator

use std::time::Duration;

use tracing::debug;

use super::*;
use crate::layout;

impl CandidateWindow {
    /// Redisplay the window if the session is active
    pub fn show(&mut self) {
        if self.is_active {
            self.show_window();
        }
    }

    pub fn hide(&mut self) {
        self.push(WindowAction::Hide);
    }

    /// Hide the window and end the session. The candidates are kept.
    pub fn deactivate(&mut self) {
        self.push(WindowAction::Hide);
        self.is_active = false;
    }

    /// Move the anchor (the caret position) and reposition the popup
    pub fn move_anchor(&mut self, x: i32, y: i32) {
        self.anchor = Point::new(x, y);
        self.relayout();
    }

    /// Record the size the renderer gave the popup and reposition it
    pub fn configure(&mut self, size: Size) {
        self.size = size;
        self.relayout();
    }

    /// Update the screen bounds used for placement
    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// Where the popup's top-left corner goes for the current geometry
    pub fn position(&self) -> Point {
        layout::place(self.anchor, self.size, self.screen)
    }

    /// Text of the index label, e.g. `3 / 25` or `- / 25`
    pub fn index_label(&self) -> String {
        match self.candidate_index {
            Some(i) => format!("{} / {}", i + 1, self.nr_candidates),
            None => format!("- / {}", self.nr_candidates),
        }
    }

    /// Show the caret indicator at the anchor with `text`
    pub fn show_caret_state(&mut self, timeout_secs: u64, text: &str) {
        self.push(WindowAction::Caret(CaretAction::Update {
            position: self.anchor,
            text: Some(text.to_string()),
        }));
        if timeout_secs != 0 {
            self.push(WindowAction::Caret(CaretAction::SetTimeout(
                Duration::from_secs(timeout_secs),
            )));
        }
        self.push(WindowAction::Caret(CaretAction::Show));
    }

    /// Move the caret indicator to the current anchor
    pub fn update_caret_state(&mut self) {
        self.push(WindowAction::Caret(CaretAction::Update {
            position: self.anchor,
            text: None,
        }));
    }

    pub fn hide_caret_state(&mut self) {
        self.push(WindowAction::Caret(CaretAction::Hide));
    }

    pub(super) fn show_window(&mut self) {
        self.push(WindowAction::SetVisibleRegion(self.grid.visible_region()));
        self.push(WindowAction::Show);
    }

    pub(super) fn emit_label(&mut self) {
        let label = self.index_label();
        self.push(WindowAction::SetLabel(label));
    }

    fn relayout(&mut self) {
        let position = self.position();
        debug!(
            "Placing popup at ({}, {}) for anchor ({}, {})",
            position.x, position.y, self.anchor.x, self.anchor.y
        );
        self.push(WindowAction::MoveTo(position));
    }
}
