//! Candidate entries and pages
//!
//! Entries arrive as raw bytes in the charset named by the command and are
//! decoded into [`Candidate`]s. A decoded entry looks like
//! `label<BEL>text<BEL>annotation`, the annotation being optional.

use encoding_rs::{Encoding, UTF_8};
use tracing::warn;

use crate::error::{CandwinError, Result};

/// Separator between the label, text and annotation of an entry
pub const ENTRY_SEPARATOR: char = '\x07';

/// A single candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// Key that selects this candidate on the grid
    pub label: Option<char>,
    /// The candidate text
    pub text: String,
    /// Annotation, passed through to the renderer
    pub annotation: String,
}

impl Candidate {
    pub fn new(
        label: Option<char>,
        text: impl Into<String>,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            label,
            text: text.into(),
            annotation: annotation.into(),
        }
    }

    /// Split an already decoded entry into its parts
    pub fn parse(entry: &str) -> Self {
        let mut parts = entry.splitn(3, ENTRY_SEPARATOR);
        let label = parts.next().and_then(|s| s.chars().next());
        let text = parts.next().unwrap_or_default();
        let annotation = parts.next().unwrap_or_default();
        Self::new(label, text, annotation)
    }
}

/// Character set of the raw entries of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    /// `None` when the name given by the engine was not recognised
    encoding: Option<&'static Encoding>,
}

impl Charset {
    pub const UTF_8: Self = Self {
        encoding: Some(UTF_8),
    };

    /// Resolve a charset name such as `UTF-8` or `EUC-JP`
    pub fn for_label(name: &str) -> Result<Self> {
        Encoding::for_label(name.trim().as_bytes())
            .map(|encoding| Self {
                encoding: Some(encoding),
            })
            .ok_or_else(|| CandwinError::UnknownCharset(name.to_string()))
    }

    /// Like [`Charset::for_label`], but an unknown name yields a charset
    /// that fails every decode.
    pub fn for_label_lenient(name: &str) -> Self {
        Self::for_label(name).unwrap_or_else(|e| {
            warn!("{}, entries will be left empty", e);
            Self { encoding: None }
        })
    }

    pub fn name(&self) -> &'static str {
        self.encoding.map_or("(unknown)", |e| e.name())
    }

    /// Decode `raw`, or `None` on a malformed byte sequence
    pub fn decode(&self, raw: &[u8]) -> Option<String> {
        self.encoding?
            .decode_without_bom_handling_and_without_replacement(raw)
            .map(|text| text.into_owned())
    }

    /// Decode a batch of raw entries. An entry that fails to decode becomes
    /// an empty candidate; the rest of the batch is unaffected.
    pub fn decode_entries<B: AsRef<[u8]>>(&self, raw_entries: &[B]) -> Vec<Candidate> {
        raw_entries
            .iter()
            .map(|raw| match self.decode(raw.as_ref()) {
                Some(entry) => Candidate::parse(&entry),
                None => {
                    warn!(
                        "Failed to decode candidate entry ({} bytes) as {}",
                        raw.as_ref().len(),
                        self.name()
                    );
                    Candidate::default()
                }
            })
            .collect()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::UTF_8
    }
}

/// Candidates of one page together with the global index of the first one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    first_index: usize,
    candidates: Vec<Candidate>,
}

impl Page {
    pub fn new(first_index: usize, candidates: Vec<Candidate>) -> Self {
        Self {
            first_index,
            candidates,
        }
    }

    pub fn first_index(&self) -> usize {
        self.first_index
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates paired with their global index
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Candidate)> + '_ {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (self.first_index + i, c))
    }
}

/// Number of pages needed for `nr_candidates`. Always at least one.
pub fn page_count(nr_candidates: usize, display_limit: usize) -> usize {
    if display_limit == 0 {
        1
    } else {
        nr_candidates.div_ceil(display_limit).max(1)
    }
}

/// Split candidates into consecutive pages of `display_limit` (all on one
/// page when the limit is zero).
pub fn paginate(candidates: Vec<Candidate>, display_limit: usize) -> Vec<Page> {
    if display_limit == 0 || candidates.is_empty() {
        return vec![Page::new(0, candidates)];
    }

    let mut pages = Vec::with_capacity(page_count(candidates.len(), display_limit));
    let mut rest = candidates.into_iter().peekable();
    let mut first_index = 0;
    while rest.peek().is_some() {
        let chunk: Vec<Candidate> = rest.by_ref().take(display_limit).collect();
        let len = chunk.len();
        pages.push(Page::new(first_index, chunk));
        first_index += len;
    }
    pages
}
