//! Placeholder engagement metrics for the new releases table.
//!
//! Every row gets four numbers that look like audience reactions but are
//! synthesized on the fly from the movie id and its release date, so the
//! same movie always shows the same numbers without anything being stored.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::prng::{RightShift, Xorshift32};

pub const ROW_LEN: usize = 4;

/// Column headers, in draw order.
pub const COLUMNS: [&str; ROW_LEN] = ["Yup", "Lit", "Nope", "Sh!t"];

/// Millisecond timestamp of `date`, wrapped into 32 bits.
pub fn derive_seed(date: DateTime<Utc>) -> u32 {
    date.timestamp_millis() as u32
}

pub fn generate_row(magnitude: i64, date: DateTime<Utc>) -> [i64; ROW_LEN] {
    generate_row_with(RightShift::Logical, magnitude, date)
}

/// Element `i` consumes the `i`-th draw and is `floor(magnitude * draw * 0.5)`.
pub fn generate_row_with(
    shift: RightShift,
    magnitude: i64,
    date: DateTime<Utc>,
) -> [i64; ROW_LEN] {
    let mut prng = Xorshift32::with_shift(derive_seed(date), shift);
    let scale = magnitude as f64;
    let mut row = [0; ROW_LEN];
    for cell in row.iter_mut() {
        *cell = (scale * prng.next() * 0.5).floor() as i64;
    }
    row
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementMetrics {
    pub yup: i64,
    pub lit: i64,
    pub nope: i64,
    #[serde(rename = "sh!t")]
    pub sht: i64,
}

impl EngagementMetrics {
    pub fn generate(shift: RightShift, magnitude: i64, date: DateTime<Utc>) -> Self {
        Self::from(generate_row_with(shift, magnitude, date))
    }

    pub const fn as_row(&self) -> [i64; ROW_LEN] {
        [self.yup, self.lit, self.nope, self.sht]
    }
}

impl From<[i64; ROW_LEN]> for EngagementMetrics {
    fn from([yup, lit, nope, sht]: [i64; ROW_LEN]) -> Self {
        Self { yup, lit, nope, sht }
    }
}
