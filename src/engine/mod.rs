//! Scenario engine: per-price evaluation and sweep summaries

mod evaluate;
mod results;
mod summary;

pub use evaluate::evaluate;
pub use results::{ResultRow, ResultTable, Column, to_trillions};
pub use summary::{Summary, PricePoint, breakeven_price};
