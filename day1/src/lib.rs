use std::fmt;

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;
use util::{parse_complete, parse_number};

/// The calories carried by one elf, in the order they were listed.
pub type Group = Vec<i64>;

#[derive(Error, Debug, miette::Diagnostic)]
pub enum CalorieError {
    #[error("line {line} is not an integer")]
    #[diagnostic(code(day1::bad_input))]
    Parse {
        #[source_code]
        src: String,

        #[label("{kind}")]
        bad_bit: miette::SourceSpan,

        line: usize,
        kind: String,
    },

    #[error("no groups in input")]
    #[diagnostic(
        code(day1::empty),
        help("groups are runs of integer lines separated by a blank line")
    )]
    Empty,

    #[error("calorie total does not fit in 64 bits")]
    #[diagnostic(code(day1::overflow))]
    Overflow,
}

/// Splits `input` into groups on blank lines, one integer per non-blank line.
///
/// A blank line is an empty one (a lone `\r` counts as empty). Several blank
/// lines in a row separate just two groups rather than producing an empty
/// group or a conversion failure. Whitespace around a number is ignored, but
/// a line holding nothing except whitespace is malformed.
pub fn parse(input: &str) -> Result<Vec<Group>, CalorieError> {
    let mut groups = Vec::new();
    let mut current = Group::new();
    let mut line_start = 0;

    for (i, raw) in input.split_inclusive('\n').enumerate() {
        let offset = line_start;
        line_start += raw.len();

        let content = raw.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if content.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            continue;
        }

        let line = content.trim();
        let indent = content.len() - content.trim_start().len();
        let calories = parse_complete(line, parse_number).map_err(|bad| {
            // whitespace-only lines get the whole line labelled
            let bad_bit = if line.is_empty() {
                (offset, content.len())
            } else {
                (offset + indent + bad.offset, line.len().saturating_sub(bad.offset))
            };
            CalorieError::Parse {
                src: input.to_string(),
                bad_bit: bad_bit.into(),
                line: i + 1,
                kind: bad.kind,
            }
        })?;
        current.push(calories);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    debug!(?groups, "parsed groups");

    Ok(groups)
}

fn checked_sum(values: impl IntoIterator<Item = i64>) -> Result<i64, CalorieError> {
    values
        .into_iter()
        .try_fold(0i64, |total, n| total.checked_add(n))
        .ok_or(CalorieError::Overflow)
}

pub fn group_sums(groups: &[Group]) -> Result<Vec<i64>, CalorieError> {
    groups
        .iter()
        .map(|group| checked_sum(group.iter().copied()))
        .collect()
}

pub fn max_total(groups: &[Group]) -> Result<i64, CalorieError> {
    group_sums(groups)?
        .into_iter()
        .max()
        .ok_or(CalorieError::Empty)
}

/// Sum of the `n` largest group sums. With fewer than `n` groups every
/// group counts; with none at all there is nothing to rank.
pub fn top_n_total(groups: &[Group], n: usize) -> Result<i64, CalorieError> {
    let sums = group_sums(groups)?;
    if sums.is_empty() {
        return Err(CalorieError::Empty);
    }

    let top = sums.into_iter().sorted_by(|a, b| b.cmp(a)).take(n).collect_vec();
    debug!(?top, n, "largest group sums");

    checked_sum(top)
}

pub fn top3_total(groups: &[Group]) -> Result<i64, CalorieError> {
    top_n_total(groups, 3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub max: i64,
    pub top3: i64,
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.max, self.top3)
    }
}

pub fn totals(groups: &[Group]) -> Result<Totals, CalorieError> {
    Ok(Totals {
        max: max_total(groups)?,
        top3: top3_total(groups)?,
    })
}
