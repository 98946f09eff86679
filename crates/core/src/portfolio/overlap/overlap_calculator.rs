use std::collections::{BTreeSet, HashMap};

use log::warn;

use crate::funds::{FundAllocation, FundOverlap, MutualFund};

use super::{FundOverlapAnalysis, FundOverlapDetail};

/// Resolves every overlap row against the fund catalog and intersects the
/// two funds' sector sets.
///
/// Rows naming a fund that is not in `funds` are skipped and logged.
pub fn calculate_fund_overlaps(
    overlaps: &[FundOverlap],
    funds: &HashMap<i32, MutualFund>,
    allocations_by_fund: &HashMap<i32, Vec<FundAllocation>>,
) -> FundOverlapAnalysis {
    let sectors_of = |fund_id: i32| {
        allocations_by_fund
            .get(&fund_id)
            .map(|rows| {
                rows.iter()
                    .map(|a| a.sector.as_str())
                    .collect::<BTreeSet<&str>>()
            })
            .unwrap_or_default()
    };

    let details = overlaps
        .iter()
        .filter_map(|overlap| {
            let (Some(fund), Some(other)) = (
                funds.get(&overlap.fund_id),
                funds.get(&overlap.overlapping_fund_id),
            ) else {
                warn!(
                    "Skipping overlap {}: fund {} or {} is missing from the catalog",
                    overlap.id, overlap.fund_id, overlap.overlapping_fund_id
                );
                return None;
            };

            let common_stocks = sectors_of(fund.id)
                .intersection(&sectors_of(other.id))
                .map(|s| s.to_string())
                .collect();

            Some(FundOverlapDetail {
                fund_id: fund.id,
                fund_name: fund.name.clone(),
                overlapping_fund_id: other.id,
                overlapping_fund_name: other.name.clone(),
                overlap_percentage: overlap.overlap_percentage,
                common_stocks,
            })
        })
        .collect();

    FundOverlapAnalysis { overlaps: details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn fund(id: i32, name: &str) -> MutualFund {
        MutualFund {
            id,
            name: name.to_string(),
            isin: format!("ISIN{}", id),
        }
    }

    fn alloc(fund_id: i32, sector: &str) -> FundAllocation {
        FundAllocation {
            id: 0,
            fund_id,
            sector: sector.to_string(),
            percentage: dec!(50),
        }
    }

    fn overlap(id: i32, fund_id: i32, overlapping_fund_id: i32, pct: Decimal) -> FundOverlap {
        FundOverlap {
            id,
            fund_id,
            overlapping_fund_id,
            overlap_percentage: pct,
        }
    }

    #[test]
    fn test_common_sectors_are_the_intersection() {
        let funds = HashMap::from([(1, fund(1, "Alpha")), (2, fund(2, "Beta"))]);
        let allocations = HashMap::from([
            (1, vec![alloc(1, "IT"), alloc(1, "Financials")]),
            (2, vec![alloc(2, "IT"), alloc(2, "Energy")]),
        ]);
        let result = calculate_fund_overlaps(&[overlap(1, 1, 2, dec!(67))], &funds, &allocations);

        assert_eq!(result.overlaps.len(), 1);
        let detail = &result.overlaps[0];
        assert_eq!(detail.fund_name, "Alpha");
        assert_eq!(detail.overlapping_fund_name, "Beta");
        assert_eq!(detail.overlap_percentage, dec!(67));
        assert_eq!(detail.common_stocks, BTreeSet::from(["IT".to_string()]));
    }

    #[test]
    fn test_fund_without_allocations_has_no_common_sectors() {
        let funds = HashMap::from([(1, fund(1, "Alpha")), (3, fund(3, "Gamma"))]);
        let allocations = HashMap::from([(1, vec![alloc(1, "IT")])]);
        let result = calculate_fund_overlaps(&[overlap(1, 1, 3, dec!(88))], &funds, &allocations);
        assert!(result.overlaps[0].common_stocks.is_empty());
    }

    #[test]
    fn test_unresolvable_rows_are_skipped() {
        let funds = HashMap::from([(1, fund(1, "Alpha")), (2, fund(2, "Beta"))]);
        let rows = [
            overlap(1, 1, 2, dec!(10)),
            overlap(2, 1, 42, dec!(20)),
            overlap(3, 42, 2, dec!(30)),
        ];
        let result = calculate_fund_overlaps(&rows, &funds, &HashMap::new());
        assert_eq!(result.overlaps.len(), 1);
        assert_eq!(result.overlaps[0].overlap_percentage, dec!(10));
    }

    #[test]
    fn test_direction_is_preserved() {
        let funds = HashMap::from([(1, fund(1, "Alpha")), (2, fund(2, "Beta"))]);
        let rows = [overlap(1, 2, 1, dec!(50))];
        let result = calculate_fund_overlaps(&rows, &funds, &HashMap::new());
        assert_eq!(result.overlaps[0].fund_name, "Beta");
        assert_eq!(result.overlaps[0].overlapping_fund_name, "Alpha");
    }
}
