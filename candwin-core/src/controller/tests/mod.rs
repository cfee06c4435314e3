//! Tests for the candidate window controller

use super::*;
use crate::candidate::Charset;
use crate::label::CellPos;

mod dispatch;

/// Raw entries labelled with successive keys of the default number and
/// letter rows
fn entries(n: usize) -> Vec<Vec<u8>> {
    const KEYS: &str = "1234567890qwertyuiopasdfghjkl;zxcvbnm,./";
    KEYS.chars()
        .cycle()
        .take(n)
        .enumerate()
        .map(|(i, key)| format!("{key}\x07cand{i}\x07note{i}").into_bytes())
        .collect()
}

fn activated(n: usize, display_limit: usize) -> CandidateWindow {
    let mut window = CandidateWindow::default();
    window.activate(Charset::UTF_8, display_limit, &entries(n));
    window.take_actions();
    window
}

fn labels_of(actions: &[WindowAction]) -> Vec<&str> {
    actions
        .iter()
        .filter_map(|a| match a {
            WindowAction::SetLabel(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn shown_pages(actions: &[WindowAction]) -> Vec<usize> {
    actions
        .iter()
        .filter_map(|a| match a {
            WindowAction::ShowPage { page, .. } => Some(*page),
            _ => None,
        })
        .collect()
}
