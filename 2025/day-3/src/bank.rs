use chumsky::prelude::*;
use std::str::FromStr;

use crate::error::ParseError;

/// One line of the puzzle input: the joltage rating (0-9) of every battery,
/// in the order they sit in the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    digits: Vec<u8>,
}

impl Bank {
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl FromStr for Bank {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let lead = line.len() - line.trim_start().len();
        parse_line(line, lead, 1, trimmed)
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<u8>, extra::Err<Rich<'a, char>>> {
    any()
        .filter(|c: &char| c.is_ascii_digit())
        .map(|c: char| c as u8 - b'0')
        .repeated()
        .at_least(1)
        .collect()
}

/// Parses `line`, which starts at byte `offset` of `src`, reporting errors
/// against the whole of `src`.
fn parse_line(src: &str, offset: usize, line_no: usize, line: &str) -> Result<Bank, ParseError> {
    if line.is_empty() {
        return Err(ParseError::new(src, (offset, 0), line_no, "empty bank"));
    }

    parser()
        .parse(line)
        .into_result()
        .map(|digits| Bank { digits })
        .map_err(|errors| {
            // A failed parse always carries at least one error, and it stops at
            // the first bad character, so the first error is the one to report
            let e = &errors[0];
            let span = e.span();
            let reason = match e.found() {
                Some(c) => format!("unexpected character {c:?}"),
                None => "unexpected end of bank".to_string(),
            };
            ParseError::new(
                src,
                (offset + span.start, span.end - span.start),
                line_no,
                reason,
            )
        })
}

/// Parses every bank of the puzzle input.
///
/// Whitespace around the whole input and around each line is ignored, so
/// trailing newlines and CRLF endings are fine. A blank line between banks
/// is rejected, as is input with no banks at all.
pub fn parse_banks(input: &str) -> Result<Vec<Bank>, ParseError> {
    let body = input.trim();
    let base = input.len() - input.trim_start().len();
    let skipped_lines = input[..base].matches('\n').count();

    if body.is_empty() {
        return Err(ParseError::new(
            input,
            (0, input.len()),
            skipped_lines + 1,
            "no battery banks",
        ));
    }

    let mut banks = Vec::new();
    let mut offset = base;
    for (index, raw) in body.split('\n').enumerate() {
        let lead = raw.len() - raw.trim_start().len();
        let bank = parse_line(input, offset + lead, skipped_lines + index + 1, raw.trim())?;
        banks.push(bank);
        offset += raw.len() + 1;
    }

    tracing::debug!(banks = banks.len(), "parsed battery banks");
    Ok(banks)
}
