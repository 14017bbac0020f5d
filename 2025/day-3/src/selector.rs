use itertools::Itertools;
use std::cmp::Reverse;

use crate::bank::Bank;
use crate::error::JoltageError;

/// The batteries turned on in a bank, in bank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    positions: Vec<usize>,
    digits: Vec<u8>,
}

impl Selection {
    /// Indices into the bank, strictly increasing.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The selected digits read as one decimal number.
    pub fn joltage(&self) -> Result<u64, JoltageError> {
        self.digits
            .iter()
            .try_fold(0u64, |acc, &digit| {
                acc.checked_mul(10)?.checked_add(u64::from(digit))
            })
            .ok_or(JoltageError::JoltageOverflow {
                digits: self.digits.len(),
            })
    }
}

/// Turns on exactly `k` batteries of `bank` so that the resulting joltage is
/// as large as possible.
///
/// Each pick takes the largest digit that still leaves enough batteries to
/// its right for the picks that follow. On ties the leftmost digit wins, which
/// keeps the widest window open for the next pick.
pub fn select_max(bank: &Bank, k: usize) -> Result<Selection, JoltageError> {
    let digits = bank.digits();
    let n = bank.len();

    if k == 0 || k > n {
        return Err(JoltageError::InvalidSelection {
            requested: k,
            available: n,
        });
    }

    let mut positions = Vec::with_capacity(k);
    let mut start = 0;

    for remaining in (1..=k).rev() {
        // start <= n - remaining always holds, so the window is never empty
        let window = &digits[start..=n - remaining];
        // position_min_by_key returns the first of several equal minima
        let best = start
            + window
                .iter()
                .position_min_by_key(|&&digit| Reverse(digit))
                .expect("window is never empty");

        positions.push(best);
        start = best + 1;
    }

    let digits = positions.iter().map(|&i| digits[i]).collect();
    Ok(Selection { positions, digits })
}
