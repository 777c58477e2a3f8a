//! The `MM-DD-YYYY` layout accepted for `fromDate` / `toDate`.
//!
//! Components are range-checked individually (month 1-12, day 1-31) but the
//! day is not checked against the length of the month, so `02-30-2019` passes.

use std::str::FromStr;
use thiserror::Error;

const LAYOUT_LEN: usize = 10;
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateLayoutError {
    #[error("{0:?} does not match MM-DD-YYYY")]
    Layout(String),

    #[error("month {0} out of range")]
    MonthOutOfRange(u32),

    #[error("day {0} out of range")]
    DayOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDate {
    pub month: u32,
    pub day: u32,
    pub year: u32,
}

impl FromStr for RequestDate {
    type Err = DateLayoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !matches_layout(value) {
            return Err(DateLayoutError::Layout(value.to_string()));
        }

        // Safe to slice: matches_layout guarantees ten ASCII bytes.
        let month = decimal(&value[0..2]);
        let day = decimal(&value[3..5]);
        let year = decimal(&value[6..10]);

        if !(1..=12).contains(&month) {
            return Err(DateLayoutError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateLayoutError::DayOutOfRange(day));
        }

        Ok(Self { month, day, year })
    }
}

fn matches_layout(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == LAYOUT_LEN
        && bytes.iter().enumerate().all(|(i, b)| {
            if SEPARATOR_POSITIONS.contains(&i) {
                *b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

fn decimal(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
