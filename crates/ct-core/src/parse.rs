//! Talk description parsing.
//!
//! Each input line describes one talk: every token up to the last forms
//! the title, and the last token is the duration indicator — `<N>min`,
//! or a lightning-talk marker mapping to a fixed 5 minutes. Malformed
//! lines never abort a batch; they are collected into the report and
//! logged.

use thiserror::Error;

use crate::talk::{LIGHTNING_MINUTES, Talk};

/// Duration tokens that denote a lightning talk.
const LIGHTNING_MARKERS: &[&str] = &["relâmpago", "lightning"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty line")]
    Empty,
    #[error("duration token `{0}` is missing the `min` suffix")]
    MissingUnit(String),
    #[error("duration token `{0}` is not a whole number of minutes")]
    InvalidMinutes(String),
    #[error("talk duration must be positive")]
    ZeroDuration,
    #[error("line has a duration but no title")]
    MissingTitle,
}

/// A line that failed to parse, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position of the line in the input.
    pub line_number: usize,
    pub text: String,
    pub reason: ParseError,
}

/// Outcome of parsing a batch of lines: best-effort over all lines,
/// diagnostics collected per line.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub talks: Vec<Talk>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a single talk description line.
pub fn parse_talk(line: &str) -> Result<Talk, ParseError> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    let indicator = tokens.pop().ok_or(ParseError::Empty)?;

    let minutes = if LIGHTNING_MARKERS.contains(&indicator) {
        LIGHTNING_MINUTES
    } else {
        let digits = indicator
            .strip_suffix("min")
            .ok_or_else(|| ParseError::MissingUnit(indicator.to_string()))?;
        let minutes: u32 = digits
            .parse()
            .map_err(|_| ParseError::InvalidMinutes(indicator.to_string()))?;
        if minutes == 0 {
            return Err(ParseError::ZeroDuration);
        }
        minutes
    };

    if tokens.is_empty() {
        return Err(ParseError::MissingTitle);
    }

    Ok(Talk::new(tokens.join(" "), minutes))
}

/// Parses a batch of lines, skipping and recording the ones that fail.
pub fn parse_lines<I, S>(lines: I) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ParseReport::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;
        match parse_talk(line) {
            Ok(talk) => report.talks.push(talk),
            Err(reason) => {
                tracing::warn!(line = line_number, text = line, error = %reason, "skipping talk line");
                report.skipped.push(SkippedLine {
                    line_number,
                    text: line.to_string(),
                    reason,
                });
            }
        }
    }

    report
}
