//! Candidate storage: eager activation, lazy reservation and page filling

use tracing::{debug, warn};

use super::*;
use crate::candidate::{Charset, page_count, paginate};

impl CandidateWindow {
    /// Replace the session with `raw_entries`, split into pages of
    /// `display_limit`, and show the first page.
    pub fn activate<B: AsRef<[u8]>>(
        &mut self,
        charset: Charset,
        display_limit: usize,
        raw_entries: &[B],
    ) {
        let candidates = charset.decode_entries(raw_entries);
        self.nr_candidates = candidates.len();
        self.display_limit = display_limit;
        self.candidate_index = None;
        self.need_hilite = false;
        self.pages = paginate(candidates, display_limit)
            .into_iter()
            .enumerate()
            .collect();
        self.page_count = self.pages.len();
        debug!(
            "Activated {} candidates on {} pages (display_limit={})",
            self.nr_candidates,
            self.pages.len(),
            display_limit
        );

        self.set_page(0);
        self.emit_label();
        self.show_window();
        self.is_active = true;
    }

    /// Reserve empty pages for `nr_candidates` streamed later with
    /// [`CandidateWindow::fill_page`]. Only filled pages take memory.
    pub fn reserve(&mut self, nr_candidates: usize, display_limit: usize) {
        self.nr_candidates = nr_candidates;
        self.display_limit = display_limit;
        self.candidate_index = None;
        self.need_hilite = false;
        self.is_active = true;
        self.pages.clear();
        self.page_count = page_count(nr_candidates, display_limit);
        self.page_index = 0;
        self.grid = PageGrid::empty(&self.labels);
        debug!(
            "Reserved {} pages for {} candidates (display_limit={})",
            self.page_count,
            nr_candidates,
            display_limit
        );
    }

    /// Install the candidates of one reserved page.
    ///
    /// Out-of-range pages and empty batches are ignored. Entries beyond the
    /// page capacity or beyond `nr_candidates` are dropped. Returns whether
    /// the page was installed.
    pub fn fill_page<B: AsRef<[u8]>>(
        &mut self,
        page: i64,
        charset: Charset,
        raw_entries: &[B],
    ) -> bool {
        let Some(page) = usize::try_from(page).ok().filter(|&p| p < self.page_count) else {
            warn!(
                "Ignoring candidates for page {} of {}",
                page, self.page_count
            );
            return false;
        };
        if raw_entries.is_empty() {
            return false;
        }

        let first_index = page.saturating_mul(self.display_limit);
        let mut capacity = self.nr_candidates.saturating_sub(first_index);
        if self.display_limit > 0 {
            capacity = capacity.min(self.display_limit);
        }
        if raw_entries.len() > capacity {
            warn!(
                "Dropping {} candidates past the capacity of page {}",
                raw_entries.len() - capacity,
                page
            );
        }
        let raw_entries = &raw_entries[..raw_entries.len().min(capacity)];

        let candidates = charset.decode_entries(raw_entries);
        debug!("Filled page {} with {} candidates", page, candidates.len());
        self.pages.insert(page, Page::new(first_index, candidates));

        if page == self.page_index {
            self.load_page(page);
        }
        true
    }
}
