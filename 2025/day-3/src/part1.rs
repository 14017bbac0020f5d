use miette::*;

use crate::{parse_banks, total_joltage};

/// Batteries turned on per bank when the caller does not ask for a count.
pub const DEFAULT_BATTERIES: usize = 2;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_batteries(input, DEFAULT_BATTERIES)
}

/// Total joltage with `batteries` turned on in every bank. A count of zero
/// falls back to [`DEFAULT_BATTERIES`].
#[tracing::instrument(skip(input))]
pub fn process_batteries(input: &str, batteries: usize) -> Result<String> {
    let batteries = if batteries < 1 {
        tracing::debug!(default = DEFAULT_BATTERIES, "no battery count given, using default");
        DEFAULT_BATTERIES
    } else {
        batteries
    };

    let banks = parse_banks(input)?;
    let total = total_joltage(&banks, batteries)?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("357", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case::explicit(2)]
    #[case::clamped(0)]
    fn zero_batteries_means_two(#[case] batteries: usize) -> Result<()> {
        assert_eq!("127", process_batteries("9213\n1234", batteries)?);
        Ok(())
    }

    #[test]
    fn rejects_malformed_bank() {
        assert!(process("9213\n12x4").is_err());
    }
}
