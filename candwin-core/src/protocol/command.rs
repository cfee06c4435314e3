//! Command parsing
//!
//! Arguments are parsed leniently: a missing or malformed number reads as
//! zero and a missing text field as empty, so every recognised command can
//! still be applied.

use super::FIELD_SEPARATOR;
use crate::candidate::Charset;

const CHARSET_PREFIX: &[u8] = b"charset=";
const DISPLAY_LIMIT_PREFIX: &[u8] = b"display_limit=";
const PAGE_PREFIX: &[u8] = b"page=";

/// A command sent by the input method engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the candidate set with the inline entries
    Activate {
        charset: Charset,
        display_limit: usize,
        entries: Vec<Vec<u8>>,
    },
    /// Select a candidate by global index (-1 clears the selection)
    Select { index: i64, need_hilite: bool },
    /// Redisplay the window if it is active
    Show,
    /// Hide the window without deactivating
    Hide,
    /// Move the anchor point
    Move { x: i32, y: i32 },
    /// Hide the window and mark the session inactive
    Deactivate,
    /// Show the caret indicator with `text` at the anchor
    ShowCaretState { timeout_secs: u64, text: String },
    /// Move the caret indicator to the current anchor
    UpdateCaretState,
    HideCaretState,
    /// Reserve empty pages for a lazily streamed candidate set
    SetNrCandidates { nr: usize, display_limit: usize },
    /// Fill one reserved page
    SetPageCandidates {
        charset: Charset,
        page: i64,
        entries: Vec<Vec<u8>>,
    },
    /// Switch to a page and show the window
    ShowPage { page: i64 },
}

impl Command {
    /// Parse one frame. Returns `None` for an unknown command name.
    pub fn parse(frame: &[u8]) -> Option<Self> {
        let fields: Vec<&[u8]> = frame.split(|&b| b == FIELD_SEPARATOR).collect();
        let args = Args::new(&fields[1..]);

        let command = match fields[0] {
            b"activate" => {
                let mut args = args;
                let charset = args.charset();
                let display_limit = args
                    .prefixed(DISPLAY_LIMIT_PREFIX)
                    .map_or(0, |v| to_count(parse_int(v)));
                Self::Activate {
                    charset,
                    display_limit,
                    entries: args.entries(),
                }
            }
            b"select" => Self::Select {
                index: parse_int(args.get(0)),
                need_hilite: parse_int(args.get(1)) == 1,
            },
            b"show" => Self::Show,
            b"hide" => Self::Hide,
            b"move" => Self::Move {
                x: to_coord(parse_int(args.get(0))),
                y: to_coord(parse_int(args.get(1))),
            },
            b"deactivate" => Self::Deactivate,
            b"show_caret_state" => Self::ShowCaretState {
                timeout_secs: parse_int(args.get(0)).max(0) as u64,
                text: String::from_utf8_lossy(args.get(1)).into_owned(),
            },
            b"update_caret_state" => Self::UpdateCaretState,
            b"hide_caret_state" => Self::HideCaretState,
            b"set_nr_candidates" => Self::SetNrCandidates {
                nr: to_count(parse_int(args.get(0))),
                display_limit: to_count(parse_int(args.get(1))),
            },
            b"set_page_candidates" => {
                let mut args = args;
                let charset = args.charset();
                let page = args.prefixed(PAGE_PREFIX).map_or(0, parse_int);
                Self::SetPageCandidates {
                    charset,
                    page,
                    entries: args.entries(),
                }
            }
            b"show_page" => Self::ShowPage {
                page: parse_int(args.get(0)),
            },
            _ => return None,
        };
        Some(command)
    }

    /// Protocol name of the command
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activate { .. } => "activate",
            Self::Select { .. } => "select",
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Move { .. } => "move",
            Self::Deactivate => "deactivate",
            Self::ShowCaretState { .. } => "show_caret_state",
            Self::UpdateCaretState => "update_caret_state",
            Self::HideCaretState => "hide_caret_state",
            Self::SetNrCandidates { .. } => "set_nr_candidates",
            Self::SetPageCandidates { .. } => "set_page_candidates",
            Self::ShowPage { .. } => "show_page",
        }
    }
}

/// Positional arguments after the command name
#[derive(Clone, Copy)]
struct Args<'a> {
    fields: &'a [&'a [u8]],
    pos: usize,
}

impl<'a> Args<'a> {
    fn new(fields: &'a [&'a [u8]]) -> Self {
        Self { fields, pos: 0 }
    }

    /// Field `i`, empty when missing
    fn get(&self, i: usize) -> &'a [u8] {
        self.fields.get(self.pos + i).copied().unwrap_or_default()
    }

    /// Consume the next field if it starts with `prefix`, returning the rest
    fn prefixed(&mut self, prefix: &[u8]) -> Option<&'a [u8]> {
        let value = self.get(0).strip_prefix(prefix)?;
        self.pos += 1;
        Some(value)
    }

    fn charset(&mut self) -> Charset {
        self.prefixed(CHARSET_PREFIX)
            .map_or(Charset::UTF_8, |name| {
                Charset::for_label_lenient(&String::from_utf8_lossy(name))
            })
    }

    /// Remaining fields up to the first empty one
    fn entries(&self) -> Vec<Vec<u8>> {
        self.fields[self.pos.min(self.fields.len())..]
            .iter()
            .take_while(|f| !f.is_empty())
            .map(|f| f.to_vec())
            .collect()
    }
}

/// Parse a decimal integer the way C `atoi` does: leading whitespace and an
/// optional sign, then as many digits as there are. No digits reads as 0.
fn parse_int(field: &[u8]) -> i64 {
    let field = field.trim_ascii_start();
    let (negative, digits) = match field.first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };
    let value = digits
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
    if negative { -value } else { value }
}

fn to_coord(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn to_count(value: i64) -> usize {
    value.clamp(0, i64::from(u32::MAX)) as usize
}
