// ============================================================
// QUOTE CHECK
// ============================================================
// Strict quoting rules applied before the csv reader sees the text.
// The csv crate accepts malformed quoting silently; a load must fail instead.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFaultKind {
    /// `"` inside a field that did not start with a quote
    BareQuote,

    /// Something other than a delimiter or line break after a closing quote
    ExtraneousQuote,

    /// Quoted field still open at end of input
    Unterminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteFault {
    pub kind: QuoteFaultKind,

    /// 1-based line of the offending character
    pub line: u64,

    /// 0-based record number, blank lines excluded (0 is the header)
    pub record: usize,
}

impl fmt::Display for QuoteFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            QuoteFaultKind::BareQuote => write!(f, "bare \" in non-quoted field"),
            QuoteFaultKind::ExtraneousQuote => write!(f, "extraneous or missing \" in quoted field"),
            QuoteFaultKind::Unterminated => write!(f, "quoted field is never closed"),
        }
    }
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Scan `text` for quoting faults
pub fn check_quoting(text: &str, delimiter: u8) -> Result<(), QuoteFault> {
    let delimiter = delimiter as char;
    let mut state = State::FieldStart;
    let mut line: u64 = 1;
    let mut quote_line: u64 = 1;
    let mut record: usize = 0;
    let mut in_record = false;

    let fault = |kind, line, record| QuoteFault { kind, line, record };

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        // A lone '\r' ends a line like '\n' does, except inside quotes.
        let c = match c {
            '\r' if chars.peek() == Some(&'\n') => continue,
            '\r' if matches!(state, State::Quoted) => continue,
            '\r' => '\n',
            other => other,
        };

        state = match (state, c) {
            (State::FieldStart, '"') => {
                in_record = true;
                quote_line = line;
                State::Quoted
            }
            (State::FieldStart, '\n') => {
                line += 1;
                if in_record {
                    record += 1;
                    in_record = false;
                }
                State::FieldStart
            }
            (State::FieldStart, _) => {
                in_record = true;
                if c == delimiter {
                    State::FieldStart
                } else {
                    State::Unquoted
                }
            }

            (State::Unquoted, '"') => return Err(fault(QuoteFaultKind::BareQuote, line, record)),
            (State::Unquoted, '\n') => {
                line += 1;
                record += 1;
                in_record = false;
                State::FieldStart
            }
            (State::Unquoted, _) if c == delimiter => State::FieldStart,
            (State::Unquoted, _) => State::Unquoted,

            (State::Quoted, '"') => State::QuoteInQuoted,
            (State::Quoted, '\n') => {
                line += 1;
                State::Quoted
            }
            (State::Quoted, _) => State::Quoted,

            (State::QuoteInQuoted, '"') => State::Quoted,
            (State::QuoteInQuoted, '\n') => {
                line += 1;
                record += 1;
                in_record = false;
                State::FieldStart
            }
            (State::QuoteInQuoted, _) if c == delimiter => State::FieldStart,
            (State::QuoteInQuoted, _) => {
                return Err(fault(QuoteFaultKind::ExtraneousQuote, line, record));
            }
        };
    }

    if let State::Quoted = state {
        return Err(fault(QuoteFaultKind::Unterminated, quote_line, record));
    }
    Ok(())
}
