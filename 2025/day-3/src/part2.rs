use miette::*;

use crate::part1;

/// Batteries turned on per bank once the safety override is engaged.
pub const BATTERIES: usize = 12;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    part1::process_batteries(input, BATTERIES)
}
