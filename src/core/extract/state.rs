//! Transition table of the marker-call tokenizer.
//!
//! The tokenizer is a pure function of `(state, char, previous char)`. The
//! driver in [`super::Findings`] owns the text buffer and applies the
//! returned [`Action`]; no transition looks further ahead than one character.
//!
//! ```text
//! Init ──marker──▶ MarkerMatching ──'('──▶ CallOpened ──quote──▶ InString
//!  ▲                     │                     │                    │
//!  └───────other─────────┘                     └──other──▶ ArgScan ◀┘
//!  ▲                                                          │
//!  └────────────────────────────')'───────────────────────────┘
//! ```

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Searching for the marker name; `matched` marker chars seen so far.
    Init { matched: usize },
    /// Marker name matched, waiting for `(`.
    MarkerMatching,
    /// Inside `(`, before the first argument.
    CallOpened,
    /// Inside a string literal closed by `quote`.
    InString { quote: char, escaped: bool },
    /// Skipping to the call's closing `)`.
    ///
    /// `capture` is set when the first argument was not a literal, in which
    /// case the skipped text is the raw argument. Parens inside a quoted
    /// string (`quote`) do not count towards `depth`.
    ArgScan {
        depth: usize,
        capture: bool,
        quote: Option<char>,
        escaped: bool,
    },
}

impl ScanState {
    pub const START: ScanState = ScanState::Init { matched: 0 };

    /// Argument scan outside of any string, `depth` parens deep.
    pub const fn arg_scan(depth: usize, capture: bool) -> ScanState {
        ScanState::ArgScan {
            depth,
            capture,
            quote: None,
            escaped: false,
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to record.
    Skip,
    /// The current char is the first char of a marker occurrence.
    MarkStart,
    /// Append the current char to the buffer.
    Capture,
    /// Buffer holds a complete literal argument.
    EmitLiteral,
    /// Buffer holds the raw text of a non-literal argument.
    EmitNonLiteral,
}

/// Characters that continue an identifier in the languages we scan.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Quotes that open a string anywhere in an argument list, template
/// literals included.
fn is_arg_quote(c: char) -> bool {
    is_quote(c) || c == '`'
}

/// Transition inside an argument list: count parens outside of strings
/// until the call's closing `)`.
fn arg_scan(
    depth: usize,
    capture: bool,
    quote: Option<char>,
    escaped: bool,
    c: char,
) -> (ScanState, Action) {
    let keep = if capture {
        Action::Capture
    } else {
        Action::Skip
    };

    if let Some(q) = quote {
        let (quote, escaped) = if escaped {
            (Some(q), false)
        } else if c == '\\' {
            (Some(q), true)
        } else if c == q {
            (None, false)
        } else {
            (Some(q), false)
        };
        let state = ScanState::ArgScan {
            depth,
            capture,
            quote,
            escaped,
        };
        return (state, keep);
    }

    match c {
        ')' if depth == 0 => {
            let action = if capture {
                Action::EmitNonLiteral
            } else {
                Action::Skip
            };
            (ScanState::START, action)
        }
        ')' => (ScanState::arg_scan(depth - 1, capture), keep),
        '(' => (ScanState::arg_scan(depth + 1, capture), keep),
        c if is_arg_quote(c) => {
            let state = ScanState::ArgScan {
                depth,
                capture,
                quote: Some(c),
                escaped: false,
            };
            (state, keep)
        }
        _ => (ScanState::arg_scan(depth, capture), keep),
    }
}

/// Transition table for a single marker name.
#[derive(Debug, Clone)]
pub struct Transitions {
    marker: Vec<char>,
}

impl Transitions {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.chars().collect(),
        }
    }

    pub fn step(&self, state: ScanState, c: char, prev: Option<char>) -> (ScanState, Action) {
        match state {
            ScanState::Init { matched } => self.init(matched, c, prev),
            ScanState::MarkerMatching => {
                if c == '(' {
                    (ScanState::CallOpened, Action::Skip)
                } else if c.is_whitespace() {
                    (ScanState::MarkerMatching, Action::Skip)
                } else {
                    self.init(0, c, prev)
                }
            }
            ScanState::CallOpened => {
                if c.is_whitespace() {
                    (ScanState::CallOpened, Action::Skip)
                } else if is_quote(c) {
                    let state = ScanState::InString {
                        quote: c,
                        escaped: false,
                    };
                    (state, Action::Skip)
                } else if c == ')' {
                    (ScanState::START, Action::EmitNonLiteral)
                } else {
                    arg_scan(0, true, None, false, c)
                }
            }
            ScanState::InString { quote, escaped } => {
                if escaped {
                    let state = ScanState::InString {
                        quote,
                        escaped: false,
                    };
                    (state, Action::Capture)
                } else if c == '\\' {
                    let state = ScanState::InString {
                        quote,
                        escaped: true,
                    };
                    (state, Action::Skip)
                } else if c == quote {
                    (ScanState::arg_scan(0, false), Action::EmitLiteral)
                } else {
                    (state, Action::Capture)
                }
            }
            ScanState::ArgScan {
                depth,
                capture,
                quote,
                escaped,
            } => arg_scan(depth, capture, quote, escaped, c),
        }
    }

    fn init(&self, matched: usize, c: char, prev: Option<char>) -> (ScanState, Action) {
        let at_boundary = prev.is_none_or(|p| !is_ident_char(p));
        let extends = self.marker.get(matched) == Some(&c) && (matched > 0 || at_boundary);

        if !extends {
            // A broken partial match may still leave `c` as a fresh start.
            if matched > 0 {
                return self.init(0, c, prev);
            }
            return (ScanState::START, Action::Skip);
        }

        let action = if matched == 0 {
            Action::MarkStart
        } else {
            Action::Skip
        };
        if matched + 1 == self.marker.len() {
            (ScanState::MarkerMatching, action)
        } else {
            (
                ScanState::Init {
                    matched: matched + 1,
                },
                action,
            )
        }
    }
}
