//! Marker-call extraction.
//!
//! Locates calls to a marker function (e.g. `translate("Hello")`) in raw
//! source text and recovers their first argument. Works on text, not on an
//! AST: a call inside a comment or a string is still reported.

mod state;


use std::str::CharIndices;

pub use state::{Action, ScanState, Transitions, is_ident_char};

/// Default marker function name.
pub const DEFAULT_MARKER: &str = "translate";

/// First argument of a marker call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Finding {
    /// A string literal, with escapes resolved (`'it\'s'` → `it's`).
    Literal(String),
    /// Anything that is not a string literal; holds the raw argument text.
    NonLiteral(String),
}

/// A marker call found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCall {
    /// Byte offset of the marker name's first character.
    pub offset: usize,
    pub finding: Finding,
}

/// Lazily extract marker calls from `text`.
///
/// # Example
///
/// ```
/// use xlocalize::core::extract::{Finding, extract};
///
/// let found: Vec<_> = extract("translate('Hi') + translate(name)", "translate")
///     .map(|call| call.finding)
///     .collect();
/// assert_eq!(
///     found,
///     vec![
///         Finding::Literal("Hi".to_string()),
///         Finding::NonLiteral("name".to_string()),
///     ]
/// );
/// ```
pub fn extract<'a>(text: &'a str, marker: &str) -> Findings<'a> {
    Findings {
        chars: text.char_indices(),
        transitions: Transitions::new(marker),
        state: ScanState::START,
        prev: None,
        start: 0,
        buffer: String::new(),
        finished: false,
    }
}

/// Iterator returned by [`extract`].
pub struct Findings<'a> {
    chars: CharIndices<'a>,
    transitions: Transitions,
    state: ScanState,
    prev: Option<char>,
    start: usize,
    buffer: String,
    finished: bool,
}

fn take_call(buffer: &mut String, offset: usize, finding: fn(String) -> Finding) -> MarkerCall {
    MarkerCall {
        offset,
        finding: finding(std::mem::take(buffer)),
    }
}

fn non_literal(raw: String) -> Finding {
    Finding::NonLiteral(raw.trim().to_string())
}

impl Iterator for Findings<'_> {
    type Item = MarkerCall;

    fn next(&mut self) -> Option<MarkerCall> {
        if self.finished {
            return None;
        }

        for (idx, c) in self.chars.by_ref() {
            let (next, action) = self.transitions.step(self.state, c, self.prev);
            self.state = next;
            self.prev = Some(c);

            match action {
                Action::Skip => {}
                Action::MarkStart => {
                    self.start = idx;
                    self.buffer.clear();
                }
                Action::Capture => self.buffer.push(c),
                Action::EmitLiteral => {
                    return Some(take_call(&mut self.buffer, self.start, Finding::Literal));
                }
                Action::EmitNonLiteral => {
                    return Some(take_call(&mut self.buffer, self.start, non_literal));
                }
            }
        }

        self.finished = true;
        // A non-literal argument running to end of input is still reported.
        if let ScanState::ArgScan { capture: true, .. } = self.state {
            return Some(take_call(&mut self.buffer, self.start, non_literal));
        }
        None
    }
}

impl std::iter::FusedIterator for Findings<'_> {}
