//! Parsing of interactive input lines.
//!
//! Seats are typed either as a label (`3C`, `12a`) or as one-based row and
//! column numbers (`3 3`, `3,3`). Parsing only checks the shape of the
//! input; whether the seat exists is decided by the core.

use std::io::BufRead;

use anyhow::{Context, Result};
use seatbook_core::{models::SeatPosition, SeatError};

/// Reads one line, trimmed. Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parses a seat typed as `3C` or `3 3` / `3,3`.
pub fn parse_seat(input: &str) -> seatbook_core::Result<SeatPosition> {
    let input = input.trim();
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    let position = match tokens.as_slice() {
        [label] => parse_label(label),
        [row, column] => parse_pair(row, column),
        _ => None,
    };

    position.ok_or_else(|| {
        SeatError::invalid_input("seat")
            .with_reason(format!("'{input}' is not a seat; use a form like 3C or 3 3"))
    })
}

fn parse_label(label: &str) -> Option<SeatPosition> {
    let split = label.find(|c: char| !c.is_ascii_digit())?;
    let (row, rest) = label.split_at(split);
    let mut letters = rest.chars();
    let letter = letters.next()?;
    if letters.next().is_some() {
        return None;
    }
    SeatPosition::from_label(row.parse().ok()?, letter)
}

fn parse_pair(row: &str, column: &str) -> Option<SeatPosition> {
    let row_number = row.parse().ok()?;
    match column.parse() {
        Ok(column_number) => SeatPosition::from_numbers(row_number, column_number),
        Err(_) => {
            let mut letters = column.chars();
            let letter = letters.next()?;
            if letters.next().is_some() {
                return None;
            }
            SeatPosition::from_label(row_number, letter)
        }
    }
}

/// Interprets a yes/no answer. Anything unrecognised is `None`.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
