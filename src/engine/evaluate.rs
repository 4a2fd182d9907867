//! Per-price evaluation of the budget balance and its financing

use crate::params::ScenarioParameters;
use super::results::ResultRow;

/// Volumes are in millions of barrels, amounts in billions
const MILLIONS_TO_BILLIONS: f64 = 1_000.0;

/// How a year's balance is financed or allocated
#[derive(Debug, Clone, Copy, PartialEq)]
struct Financing {
    net_reserve_change: f64,
    monetary_financing: f64,
}

/// Evaluate one price point from the opening stocks in `params`
///
/// Rows are independent snapshots: every price starts from the same
/// reserves and monetary base, nothing carries over between prices.
pub fn evaluate(params: &ScenarioParameters, price: f64) -> ResultRow {
    let oil_revenue = oil_revenue(params, price);
    let total_revenue = oil_revenue + params.non_oil_revenue;

    let expenditure = params.expenditure_base();
    let balance = total_revenue - expenditure;

    let financing = finance_balance(params, balance);

    let reserves_after = params.foreign_reserves + financing.net_reserve_change;
    let monetary_base = params.monetary_base + financing.monetary_financing;

    ResultRow {
        oil_price: price,
        oil_revenue,
        total_revenue,
        expenditure,
        balance,
        net_reserve_change: financing.net_reserve_change,
        monetary_financing: financing.monetary_financing,
        reserves_after,
        monetary_base,
        gap: reserves_after - monetary_base,
    }
}

/// Annual government oil revenue in billions of local currency
///
/// Export-only: domestic consumption does not enter the formula.
fn oil_revenue(params: &ScenarioParameters, price: f64) -> f64 {
    // USD millions per year, converted once at the configured rate
    let usd_millions = price * params.government_export_volume() * params.days_per_year as f64;
    usd_millions * params.exchange_rate / MILLIONS_TO_BILLIONS
}

/// Surplus and deficit follow separate rules with independent fractions
fn finance_balance(params: &ScenarioParameters, balance: f64) -> Financing {
    if balance >= 0.0 {
        // Unallocated part of the surplus is not modelled
        Financing {
            net_reserve_change: balance * params.surplus_to_reserves_share,
            monetary_financing: 0.0,
        }
    } else {
        let deficit = balance.abs();
        let cb_share = params.central_bank_deficit_financing_share;
        Financing {
            net_reserve_change: -deficit * (1.0 - cb_share),
            monetary_financing: deficit * cb_share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params() -> ScenarioParameters {
        ScenarioParameters {
            oil_prices: vec![60.0, 70.0],
            export_volume_mbpd: 4.1,
            domestic_consumption_mbpd: 0.8,
            government_export_share: 1.0,
            days_per_year: 365,
            exchange_rate: 1300.0,
            non_oil_revenue: 12_000.0,
            total_expenditure: 147_000.0,
            current_expenditure: 120_000.0,
            use_total_expenditure: true,
            foreign_reserves: 132_000.0,
            monetary_base: 104_000.0,
            central_bank_deficit_financing_share: 0.3,
            surplus_to_reserves_share: 0.5,
        }
    }

    #[test]
    fn test_reference_deficit_row() {
        let row = evaluate(&reference_params(), 60.0);

        assert_relative_eq!(row.oil_revenue, 116_727.0, epsilon = 1e-6);
        assert_relative_eq!(row.total_revenue, 128_727.0, epsilon = 1e-6);
        assert_relative_eq!(row.expenditure, 147_000.0);
        assert_relative_eq!(row.balance, -18_273.0, epsilon = 1e-6);
        assert_relative_eq!(row.net_reserve_change, -12_791.1, epsilon = 1e-6);
        assert_relative_eq!(row.monetary_financing, 5_481.9, epsilon = 1e-6);
        assert_relative_eq!(row.reserves_after, 119_208.9, epsilon = 1e-6);
        assert_relative_eq!(row.monetary_base, 109_481.9, epsilon = 1e-6);
        assert_relative_eq!(row.gap, 9_727.0, epsilon = 1e-6);
    }

    #[test]
    fn test_surplus_goes_partly_to_reserves() {
        let params = ScenarioParameters {
            use_total_expenditure: false,
            ..reference_params()
        };
        let row = evaluate(&params, 70.0);

        // 70 * 4.1 * 365 * 1300 / 1000 = 136181.5
        assert_relative_eq!(row.oil_revenue, 136_181.5, epsilon = 1e-6);
        assert_relative_eq!(row.balance, 28_181.5, epsilon = 1e-6);
        assert_relative_eq!(row.net_reserve_change, 14_090.75, epsilon = 1e-6);
        assert_eq!(row.monetary_financing, 0.0);
        assert_eq!(row.monetary_base, 104_000.0);
        assert_relative_eq!(row.reserves_after, 146_090.75, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_balance_has_no_financing() {
        let params = ScenarioParameters {
            export_volume_mbpd: 0.0,
            non_oil_revenue: 147_000.0,
            ..reference_params()
        };
        let row = evaluate(&params, 60.0);

        assert_eq!(row.balance, 0.0);
        assert_eq!(row.net_reserve_change, 0.0);
        assert_eq!(row.monetary_financing, 0.0);
        assert_eq!(row.reserves_after, params.foreign_reserves);
        assert_eq!(row.monetary_base, params.monetary_base);
    }

    #[test]
    fn test_revenue_strictly_increasing_in_price() {
        let params = reference_params();
        let rows: Vec<_> = [40.0, 55.0, 58.5, 80.0, 120.0]
            .iter()
            .map(|&p| evaluate(&params, p))
            .collect();

        for pair in rows.windows(2) {
            assert!(pair[1].oil_revenue > pair[0].oil_revenue);
            assert!(pair[1].total_revenue > pair[0].total_revenue);
        }
    }

    #[test]
    fn test_domestic_consumption_not_in_revenue() {
        let base = evaluate(&reference_params(), 60.0);
        let params = ScenarioParameters {
            domestic_consumption_mbpd: 3.0,
            ..reference_params()
        };
        assert_eq!(evaluate(&params, 60.0), base);
    }

    #[test]
    fn test_evaluate_deterministic() {
        let params = reference_params();
        assert_eq!(evaluate(&params, 72.0), evaluate(&params, 72.0));
    }

    #[test]
    fn test_reserves_can_go_negative() {
        let params = ScenarioParameters {
            foreign_reserves: 1_000.0,
            central_bank_deficit_financing_share: 0.0,
            ..reference_params()
        };
        let row = evaluate(&params, 20.0);

        assert!(row.reserves_after < 0.0);
        assert!(row.gap < 0.0);
    }

    #[test]
    fn test_full_monetization_leaves_reserves_untouched() {
        let params = ScenarioParameters {
            central_bank_deficit_financing_share: 1.0,
            ..reference_params()
        };
        let row = evaluate(&params, 60.0);

        assert_eq!(row.net_reserve_change, 0.0);
        assert_relative_eq!(row.monetary_financing, -row.balance);
    }
}
