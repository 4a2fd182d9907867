//! Output structures for a price sweep

use serde::{Deserialize, Serialize};

/// One price point's fiscal outcome (billions of local currency)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Oil price (USD/barrel)
    pub oil_price: f64,

    // Revenue
    pub oil_revenue: f64,
    pub total_revenue: f64,

    /// Expenditure the balance is measured against
    pub expenditure: f64,

    /// Surplus positive, deficit negative
    pub balance: f64,

    // Financing
    pub net_reserve_change: f64,
    /// Part of a deficit covered by central bank money creation
    pub monetary_financing: f64,

    // Stocks after the year
    pub reserves_after: f64,
    pub monetary_base: f64,
    /// Reserves after minus monetary base; positive means full cover
    pub gap: f64,
}

/// Columns of the result table, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    OilPrice,
    OilRevenue,
    TotalRevenue,
    Expenditure,
    Balance,
    NetReserveChange,
    MonetaryFinancing,
    ReservesAfter,
    MonetaryBase,
    Gap,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::OilPrice,
        Column::OilRevenue,
        Column::TotalRevenue,
        Column::Expenditure,
        Column::Balance,
        Column::NetReserveChange,
        Column::MonetaryFinancing,
        Column::ReservesAfter,
        Column::MonetaryBase,
        Column::Gap,
    ];

    /// Column header with units
    pub fn header(&self) -> &'static str {
        match self {
            Column::OilPrice => "Oil price (USD/bbl)",
            Column::OilRevenue => "Oil revenue (bn)",
            Column::TotalRevenue => "Total revenue (bn)",
            Column::Expenditure => "Expenditure (bn)",
            Column::Balance => "Balance (bn)",
            Column::NetReserveChange => "Net reserve change (bn)",
            Column::MonetaryFinancing => "Monetary financing (bn)",
            Column::ReservesAfter => "Reserves after (bn)",
            Column::MonetaryBase => "Monetary base (bn)",
            Column::Gap => "Gap (bn)",
        }
    }

    /// Read this column's value from a row
    pub fn value(&self, row: &ResultRow) -> f64 {
        match self {
            Column::OilPrice => row.oil_price,
            Column::OilRevenue => row.oil_revenue,
            Column::TotalRevenue => row.total_revenue,
            Column::Expenditure => row.expenditure,
            Column::Balance => row.balance,
            Column::NetReserveChange => row.net_reserve_change,
            Column::MonetaryFinancing => row.monetary_financing,
            Column::ReservesAfter => row.reserves_after,
            Column::MonetaryBase => row.monetary_base,
            Column::Gap => row.gap,
        }
    }
}

/// Rows of a sweep, one per input price, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row
    pub fn add_row(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Price axis in row order
    pub fn prices(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.oil_price).collect()
    }

    /// (price, value) pairs for charting a column against price
    pub fn series(&self, column: Column) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.oil_price, column.value(r)))
            .collect()
    }
}

impl FromIterator<ResultRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Convert billions to trillions for chart axes
pub fn to_trillions(billions: f64) -> f64 {
    billions / 1000.0
}
