pub mod bank;
pub mod error;
pub mod part1;
pub mod part2;
pub mod selector;

pub use bank::{parse_banks, Bank};
pub use error::{JoltageError, ParseError};
pub use selector::{select_max, Selection};

/// Totals for both parts of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub part1: u64,
    pub part2: u64,
}

/// Sums the best joltage of every bank when `k` batteries are turned on in each.
pub fn total_joltage(banks: &[Bank], k: usize) -> Result<u64, JoltageError> {
    banks.iter().try_fold(0u64, |total, bank| {
        let selection = select_max(bank, k)?;
        let joltage = selection.joltage()?;
        tracing::trace!(?selection, joltage, "selected batteries");
        total
            .checked_add(joltage)
            .ok_or(JoltageError::TotalOverflow { banks: banks.len() })
    })
}

/// Parses the input once and computes both parts.
#[tracing::instrument(skip(input))]
pub fn solve(input: &str) -> Result<Answers, JoltageError> {
    let banks = parse_banks(input)?;
    let answers = Answers {
        part1: total_joltage(&banks, part1::DEFAULT_BATTERIES)?,
        part2: total_joltage(&banks, part2::BATTERIES)?,
    };
    tracing::debug!(?answers, "solved");
    Ok(answers)
}
