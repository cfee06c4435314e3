//! Command dispatch

use tracing::debug;

use super::*;
use crate::protocol::{Command, FIELD_SEPARATOR};

impl CandidateWindow {
    /// Apply one command and return the actions it produced
    pub fn dispatch(&mut self, command: Command) -> Vec<WindowAction> {
        debug!("Dispatching {}", command.name());
        match command {
            Command::Activate {
                charset,
                display_limit,
                entries,
            } => self.activate(charset, display_limit, &entries),
            Command::Select { index, need_hilite } => {
                self.need_hilite = need_hilite;
                self.set_index(index);
            }
            Command::Show => self.show(),
            Command::Hide => self.hide(),
            Command::Move { x, y } => self.move_anchor(x, y),
            Command::Deactivate => self.deactivate(),
            Command::ShowCaretState { timeout_secs, text } => {
                self.show_caret_state(timeout_secs, &text)
            }
            Command::UpdateCaretState => self.update_caret_state(),
            Command::HideCaretState => self.hide_caret_state(),
            Command::SetNrCandidates { nr, display_limit } => self.reserve(nr, display_limit),
            Command::SetPageCandidates {
                charset,
                page,
                entries,
            } => {
                self.fill_page(page, charset, &entries);
            }
            Command::ShowPage { page } => {
                self.set_page(page);
                self.show_window();
            }
        }
        self.take_actions()
    }

    /// Parse and apply one frame. Unknown commands are ignored.
    pub fn handle_frame(&mut self, frame: &[u8]) -> Vec<WindowAction> {
        match Command::parse(frame) {
            Some(command) => self.dispatch(command),
            None => {
                let name = frame.split(|&b| b == FIELD_SEPARATOR).next().unwrap_or_default();
                debug!(
                    "Ignoring unknown command {:?}",
                    String::from_utf8_lossy(name)
                );
                Vec::new()
            }
        }
    }
}
