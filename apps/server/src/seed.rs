//! Demo catalog and accounts for a fresh database.

use chrono::NaiveDate;
use fundfolio_core::{
    funds::{MutualFund, MutualFundInput, NewFundOverlap, SectorWeight},
    investments::NewInvestment,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::main_lib::AppState;

const DEMO_USERS: [(&str, &str); 2] = [("john_doe", "password123"), ("jane_smith", "securepass")];

const DEMO_FUNDS: [(&str, &str); 5] = [
    ("ICICI Prudential Bluechip Fund", "INF109K016L0"),
    ("HDFC Top 100 Fund", "INF179K01YV8"),
    ("SBI Bluechip Fund", "INF200K01QX4"),
    ("Axis Bluechip Fund", "INF846K01DP8"),
    ("Mirae Asset Large Cap Fund", "INF769K01AX2"),
];

/// (owner, fund index, date, amount, returns %)
const DEMO_INVESTMENTS: [(&str, usize, (i32, u32, u32), Decimal, Decimal); 5] = [
    ("john_doe", 0, (2023, 1, 10), dec!(1000000), dec!(12.5)),
    ("john_doe", 1, (2022, 12, 5), dec!(800000), dec!(10.2)),
    ("jane_smith", 2, (2023, 2, 15), dec!(1200000), dec!(11)),
    ("jane_smith", 3, (2022, 11, 20), dec!(950000), dec!(9.8)),
    ("john_doe", 4, (2023, 3, 1), dec!(1100000), dec!(13)),
];

const DEMO_ALLOCATIONS: [(usize, &[(&str, Decimal)]); 2] = [
    (0, &[("IT", dec!(38)), ("Financials", dec!(37)), ("Energy", dec!(25))]),
    (1, &[("Financials", dec!(80)), ("Energy", dec!(20))]),
];

/// (fund index, overlapping fund index, overlap %)
const DEMO_OVERLAPS: [(usize, usize, Decimal); 4] =
    [(0, 1, dec!(67)), (0, 2, dec!(87)), (0, 3, dec!(88)), (0, 4, dec!(100))];

const DEMO_NAV: Decimal = dec!(100);

/// Seeds the demo data set through the services. Returns `false` without
/// touching anything when the database already has users.
pub async fn seed_demo_data(state: &AppState) -> anyhow::Result<bool> {
    if state.user_service.has_users()? {
        return Ok(false);
    }

    for (username, password) in DEMO_USERS {
        state.user_service.register(username, password).await?;
    }

    let mut funds: Vec<MutualFund> = Vec::with_capacity(DEMO_FUNDS.len());
    for (name, isin) in DEMO_FUNDS {
        let fund = state
            .fund_service
            .create_fund(MutualFundInput {
                name: name.to_string(),
                isin: isin.to_string(),
            })
            .await?;
        funds.push(fund);
    }

    for (fund_idx, weights) in DEMO_ALLOCATIONS {
        let weights = weights
            .iter()
            .map(|(sector, percentage)| SectorWeight {
                sector: sector.to_string(),
                percentage: *percentage,
            })
            .collect();
        state
            .fund_service
            .replace_allocations(funds[fund_idx].id, weights)
            .await?;
    }

    for (fund_idx, other_idx, overlap_percentage) in DEMO_OVERLAPS {
        state
            .fund_service
            .create_overlap(NewFundOverlap {
                fund_id: funds[fund_idx].id,
                overlapping_fund_id: funds[other_idx].id,
                overlap_percentage,
            })
            .await?;
    }

    for (username, fund_idx, (y, m, d), amount, returns) in DEMO_INVESTMENTS {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid demo date {y}-{m}-{d}"))?;
        state
            .investment_service
            .record_investment(
                username,
                NewInvestment {
                    fund_id: funds[fund_idx].id,
                    date,
                    amount_invested: amount,
                    nav_at_investment: DEMO_NAV,
                    returns_since_investment: returns,
                },
            )
            .await?
            .ok_or_else(|| anyhow::anyhow!("demo user {username} missing after signup"))?;
    }

    Ok(true)
}
