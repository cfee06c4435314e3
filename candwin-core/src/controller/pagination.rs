//! Selection and page navigation
//!
//! Candidates are addressed by a flat index but displayed page by page.
//! `set_index` and `set_page` keep the two consistent; both wrap around at
//! either end so browsing is cyclic.

use tracing::trace;

use super::*;
use crate::label::CellPos;

impl CandidateWindow {
    /// Select candidate `index`; negative clears the selection.
    ///
    /// An index past the last candidate wraps to the first one. The page
    /// holding the selection is loaded first.
    pub fn set_index(&mut self, index: i64) {
        let nr = i64::try_from(self.nr_candidates).unwrap_or(i64::MAX);
        let resolved = if index >= nr {
            Some(0)
        } else {
            usize::try_from(index).ok()
        };
        self.candidate_index = resolved;

        let target_page = match resolved {
            Some(i) if self.display_limit > 0 => i / self.display_limit,
            _ => self.page_index,
        };
        if target_page != self.page_index {
            self.set_page(target_page as i64);
        }

        trace!(
            "Selected {:?} on page {}",
            self.candidate_index, self.page_index
        );
        self.emit_label();
    }

    /// Display page `page`, wrapping below the first and past the last page.
    ///
    /// The selection moves to the same slot on the new page, clamped to the
    /// last candidate.
    pub fn set_page(&mut self, page: i64) {
        let count = self.page_count;
        let page = if page < 0 {
            count - 1
        } else {
            usize::try_from(page)
                .ok()
                .filter(|&p| p < count)
                .unwrap_or(0)
        };

        self.load_page(page);
        self.page_index = page;

        let implied = match self.candidate_index {
            Some(i) if self.display_limit > 0 => {
                Some(page * self.display_limit + i % self.display_limit)
            }
            other => other,
        };
        let clamped = match implied {
            Some(i) if i >= self.nr_candidates => self.nr_candidates.checked_sub(1),
            other => other,
        };

        self.push(WindowAction::Shrink);
        self.candidate_index = clamped;
        self.emit_label();
    }

    /// Select the candidate bound to key `label` on the displayed page.
    ///
    /// Returns the selected index, or `None` when the key is not in the
    /// label table or its cell is empty.
    pub fn pick_label(&mut self, label: char) -> Option<usize> {
        let pos = self.labels.position(label)?;
        self.pick_cell(pos)
    }

    /// Select the candidate in cell `pos` of the displayed page and report it
    pub fn pick_cell(&mut self, pos: CellPos) -> Option<usize> {
        let index = self.grid.candidate_at(pos)?;
        self.set_index(index as i64);
        let selected = self.candidate_index?;
        self.push(WindowAction::ReportIndex(selected));
        Some(selected)
    }

    /// Rebuild the grid from page `page` and hand it to the renderer
    pub(super) fn load_page(&mut self, page: usize) {
        self.grid = match self.pages.get(&page) {
            Some(p) => PageGrid::from_page(&self.labels, p),
            None => PageGrid::empty(&self.labels),
        };
        self.push(WindowAction::ShowPage {
            page,
            grid: self.grid.clone(),
        });
        self.push(WindowAction::SetVisibleRegion(self.grid.visible_region()));
    }
}
