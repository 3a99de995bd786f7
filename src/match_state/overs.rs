//! Overs bowled, and the adapters from the two ways people write them.
//!
//! "14.3" means 14 complete overs plus 3 balls (14*6 + 3 = 87 deliveries).
//! The fractional digit is a ball count in base 6, never a tenth of an over.
//! Both encodings decompose into the same `Overs` value and there is exactly
//! one rule for turning that into a ball count: `whole * 6 + balls`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ChaseError, InputFault};

pub const BALLS_PER_OVER: u32 = 6;
pub const INNINGS_OVERS: u32 = 20;
pub const INNINGS_BALLS: u32 = INNINGS_OVERS * BALLS_PER_OVER;

/// Whole overs completed plus legal balls bowled in the current over.
///
/// Construction does not range-check; an `Overs` of `14.7` can exist so the
/// validator can reject it with a proper reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overs {
    pub whole: u32,
    pub balls: u32,
}

impl Overs {
    pub fn new(whole: u32, balls: u32) -> Self {
        Overs { whole, balls }
    }

    /// Parse the single fractional encoding, e.g. `"14.3"`.
    ///
    /// The one digit after the point is a ball count, so `"14.3"` is 14 overs
    /// and 3 balls. Trailing zeros carry no information (`"14.30"` is
    /// `"14.3"`); any other second digit, as in `"14.03"` or `"14.35"`, is
    /// malformed. An empty or missing fraction means zero balls.
    pub fn from_decimal_str(raw: &str) -> Result<Self, ChaseError> {
        let s = raw.trim();
        let malformed = || ChaseError::from(InputFault::MalformedOvers(s.to_string()));

        let (whole_part, frac_part) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole_part.is_empty() || !whole_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let whole: u32 = whole_part.parse().map_err(|_| malformed())?;
        let balls = match frac_part.trim_end_matches('0').as_bytes() {
            [] => 0,
            [digit] => u32::from(digit - b'0'),
            _ => return Err(malformed()),
        };
        Ok(Overs { whole, balls })
    }

    /// Decompose a float such as `14.3` into whole overs and a ball digit.
    ///
    /// Goes through the shortest decimal rendering of `value` and the same
    /// rule as [`Overs::from_decimal_str`], so `14.3` and `"14.3"` always agree.
    pub fn from_decimal(value: f64) -> Result<Self, ChaseError> {
        // -0.0 renders as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        Self::from_decimal_str(&value.to_string())
    }

    /// Legal deliveries bowled so far.
    pub fn total_balls(&self) -> u32 {
        self.whole
            .saturating_mul(BALLS_PER_OVER)
            .saturating_add(self.balls)
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole, self.balls)
    }
}
