//! Helpers for SQLite's bound-parameter limit and decimal text columns.

use std::str::FromStr;

use fundfolio_core::Result;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Largest id list bound into a single `IN (...)` clause.
///
/// SQLite caps bound parameters per statement (999 on older builds), so
/// batch lookups are split into chunks of this size.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Chunk a slice into smaller slices for batch SQLite queries.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}

/// Runs `load` once per chunk of `ids` and concatenates the rows.
///
/// An empty id list issues no query at all.
pub fn load_in_chunks<I, T, F>(ids: &[I], mut load: F) -> Result<Vec<T>>
where
    F: FnMut(&[I]) -> Result<Vec<T>>,
{
    let mut rows = Vec::new();
    for chunk in chunk_for_sqlite(ids) {
        rows.extend(load(chunk)?);
    }
    Ok(rows)
}

/// Parses a decimal stored as TEXT.
///
/// Scientific notation is accepted through an `f64` fallback. Unreadable
/// values are logged and read as zero.
pub fn parse_decimal(value: &str, field: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(decimal_err) => match f64::from_str(value).ok().and_then(Decimal::from_f64) {
            Some(d) => d,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as a decimal ({}); falling back to zero",
                    field,
                    value,
                    decimal_err
                );
                Decimal::ZERO
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1125000.50", "amount"), dec!(1125000.50));
        assert_eq!(parse_decimal("-9.8", "returns"), dec!(-9.8));
        assert_eq!(parse_decimal("1.5e3", "amount"), dec!(1500));
        assert_eq!(parse_decimal("not a number", "amount"), Decimal::ZERO);
    }

    #[test]
    fn test_chunk_for_sqlite_over_limit() {
        let items: Vec<i32> = (0..1_001).collect();
        let sizes: Vec<usize> = chunk_for_sqlite(&items).map(|c| c.len()).collect();
        assert_eq!(sizes, vec![500, 500, 1]);
    }

    #[test]
    fn test_load_in_chunks_skips_empty_input() {
        let mut calls = 0;
        let rows: Vec<i32> = load_in_chunks(&[] as &[i32], |_| {
            calls += 1;
            Ok(vec![])
        })
        .unwrap();
        assert!(rows.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_load_in_chunks_concatenates_in_order() {
        let ids: Vec<i32> = (0..1_200).collect();
        let rows = load_in_chunks(&ids, |chunk| Ok(vec![chunk[0]])).unwrap();
        assert_eq!(rows, vec![0, 500, 1_000]);
    }
}
