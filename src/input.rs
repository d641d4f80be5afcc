//! Command-line argument list → validated integer list.
//!
//! Each argument may hold several space-separated integers. A word must be an
//! optional sign followed by ASCII digits and fit in an `i32`; values must be
//! pairwise distinct.

use hashbrown::HashSet;

use crate::push_swap_error::PushSwapError;

/// Parse every argument into one list of distinct integers, in order.
pub fn parse_args<I, S>(args: I) -> Result<Vec<i32>, PushSwapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    for arg in args {
        let before = values.len();
        for word in arg.as_ref().split(' ').filter(|w| !w.is_empty()) {
            values.push(parse_word(word)?);
        }
        if values.len() == before {
            return Err(PushSwapError::EmptyArgument);
        }
    }
    ensure_distinct(&values)?;
    Ok(values)
}

fn parse_word(word: &str) -> Result<i32, PushSwapError> {
    let digits = word.strip_prefix(['+', '-']).unwrap_or(word);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PushSwapError::InvalidNumber(word.to_string()));
    }
    word.parse::<i32>()
        .map_err(|_| PushSwapError::InvalidNumber(word.to_string()))
}

/// Reject the first value that appears twice.
pub fn ensure_distinct(values: &[i32]) -> Result<(), PushSwapError> {
    let mut seen = HashSet::with_capacity(values.len());
    match values.iter().find(|v| !seen.insert(**v)) {
        Some(&dup) => Err(PushSwapError::DuplicateValue(dup)),
        None => Ok(()),
    }
}
