//! Summary statistics derived from a completed sweep
//!
//! Breakeven is found by bracketing a sign change in the balance between
//! neighbouring prices and interpolating linearly inside the bracket.

use super::results::{ResultRow, ResultTable};
use serde::{Deserialize, Serialize};

/// A value together with the oil price at which it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub oil_price: f64,
    pub value: f64,
}

/// Scalar facts about one sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Price at which the balance crosses zero, if the sweep brackets one
    pub breakeven_price: Option<f64>,
    pub min_balance: PricePoint,
    pub max_balance: PricePoint,
    pub min_reserves_after: PricePoint,
    /// Some price point leaves reserves below zero
    pub reserve_exhaustion: bool,
    pub deficit_count: usize,
    pub price_count: usize,
}

impl Summary {
    /// Summarise a table. Returns None for an empty table.
    pub fn from_table(table: &ResultTable) -> Option<Self> {
        let rows = table.rows();
        let first = rows.first()?;

        let mut min_balance = point(first, first.balance);
        let mut max_balance = min_balance;
        let mut min_reserves_after = point(first, first.reserves_after);

        // Strict comparisons keep the first row on ties
        for row in &rows[1..] {
            if row.balance < min_balance.value {
                min_balance = point(row, row.balance);
            }
            if row.balance > max_balance.value {
                max_balance = point(row, row.balance);
            }
            if row.reserves_after < min_reserves_after.value {
                min_reserves_after = point(row, row.reserves_after);
            }
        }

        Some(Self {
            breakeven_price: breakeven_price(rows),
            min_balance,
            max_balance,
            min_reserves_after,
            reserve_exhaustion: min_reserves_after.value < 0.0,
            deficit_count: rows.iter().filter(|r| r.balance < 0.0).count(),
            price_count: rows.len(),
        })
    }
}

fn point(row: &ResultRow, value: f64) -> PricePoint {
    PricePoint {
        oil_price: row.oil_price,
        value,
    }
}

/// Lowest price at which the balance reaches zero
///
/// Rows are scanned in ascending price order regardless of table order.
/// A row with a balance of exactly zero is its own breakeven. Without a
/// zero or a sign change the breakeven is absent.
pub fn breakeven_price(rows: &[ResultRow]) -> Option<f64> {
    let mut sorted: Vec<(f64, f64)> = rows.iter().map(|r| (r.oil_price, r.balance)).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (i, &(price, balance)) in sorted.iter().enumerate() {
        if balance == 0.0 {
            return Some(price);
        }

        if let Some(&(next_price, next_balance)) = sorted.get(i + 1) {
            if next_balance != 0.0 && balance.signum() != next_balance.signum() {
                return Some(interpolate_zero(price, balance, next_price, next_balance));
            }
        }
    }

    None
}

/// Root of the line through (p0, b0) and (p1, b1); b0 and b1 have opposite signs
fn interpolate_zero(p0: f64, b0: f64, p1: f64, b1: f64) -> f64 {
    p0 + (p1 - p0) * (-b0) / (b1 - b0)
}
