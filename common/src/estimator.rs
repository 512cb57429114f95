//! # Carpet Cleaning Estimator
//!
//! Prompts for the number of small and large rooms, prices them and prints a
//! receipt. Counts are read as whitespace separated tokens, so both may be
//! given on one line or on separate lines.
//!
//! Input that is not a non-negative whole number stops the run with an
//! [`EstimatorError`] before any receipt is printed.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::config::{Config, Pricing};
use crate::estimate::{Estimate, RoomCounts};
use crate::format::general;

const SEPARATOR: &str = "===============================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Small,
    Large,
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomKind::Small => write!(f, "small room"),
            RoomKind::Large => write!(f, "large room"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("invalid {field} count {token:?}: expected a whole number of rooms")]
    InvalidCount { field: RoomKind, token: String },
    #[error("no {field} count given before end of input")]
    MissingCount { field: RoomKind },
    #[error("console i/o failed")]
    Io(#[from] io::Error),
}

/// Splits buffered input into whitespace separated tokens, one line at a time.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Undecodable bytes stay in the token so parsing rejects it.
            let mut line: Vec<u8> = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}

fn read_count<R: BufRead>(tokens: &mut Tokens<R>, field: RoomKind) -> Result<u32, EstimatorError> {
    let token: String = tokens
        .next_token()?
        .ok_or(EstimatorError::MissingCount { field })?;

    let count: u32 = token
        .parse()
        .map_err(|_| EstimatorError::InvalidCount { field, token })?;

    debug!(%field, count, "read room count");
    Ok(count)
}

fn prompt<W: Write>(output: &mut W, question: &str) -> io::Result<()> {
    write!(output, "{question}")?;
    output.flush()
}

/// Runs the whole interactive session and returns the computed estimate.
pub fn run<R, W>(input: R, mut output: W, config: &Config) -> Result<Estimate, EstimatorError>
where
    R: BufRead,
    W: Write,
{
    let mut tokens: Tokens<R> = Tokens::new(input);

    writeln!(output, "Hello, welcome to {}", config.business_name)?;

    prompt(&mut output, "\nHow many small rooms would you like cleaned? ")?;
    let small: u32 = read_count(&mut tokens, RoomKind::Small)?;

    prompt(&mut output, "How many large rooms would you like cleaned? ")?;
    let large: u32 = read_count(&mut tokens, RoomKind::Large)?;

    let rooms: RoomCounts = RoomCounts::new(small, large);
    let estimate: Estimate = Estimate::compute(&rooms, &config.pricing);

    write_receipt(&mut output, &rooms, &estimate, &config.pricing)?;
    output.flush()?;

    Ok(estimate)
}

pub fn write_receipt<W: Write>(
    output: &mut W,
    rooms: &RoomCounts,
    estimate: &Estimate,
    pricing: &Pricing,
) -> io::Result<()> {
    write!(output, "\nEstimate for carpet cleaning service")?;
    write!(output, "\nNumber of small rooms: {}", rooms.small)?;
    write!(output, "\nNumber of large rooms: {}", rooms.large)?;
    write!(
        output,
        "\nPrice per small room: ${}",
        general(pricing.small_room_price)
    )?;
    write!(output, "\nCost: ${}", general(estimate.subtotal))?;
    write!(output, "\nTax: ${}", general(estimate.tax))?;
    write!(output, "\n{SEPARATOR}")?;
    write!(output, "\nTotal cost: {}", general(estimate.total))?;
    writeln!(
        output,
        "\nThis cost is valid for {} days",
        pricing.quote_validity_days
    )
}
