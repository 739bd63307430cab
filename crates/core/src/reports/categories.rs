//! Expense totals per category label.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::classifier::ExpenseLine;
use super::types::CategoryBreakdown;
use crate::ledger::LedgerRecord;

/// Groups expenses by label with whole-number percentages.
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// Groups the expense records; non-expense records are skipped.
    #[must_use]
    pub fn group_by_category(records: &[LedgerRecord]) -> Vec<CategoryBreakdown> {
        let lines: Vec<ExpenseLine> = records.iter().filter_map(ExpenseLine::from_record).collect();
        Self::group(&lines)
    }

    /// Groups lines, ordered by amount descending then name.
    #[must_use]
    pub fn group(lines: &[ExpenseLine]) -> Vec<CategoryBreakdown> {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        for line in lines {
            *totals.entry(line.category.label()).or_default() += line.amount;
        }
        let grand_total: Decimal = totals.values().copied().sum();

        let mut rows: Vec<CategoryBreakdown> = totals
            .into_iter()
            .map(|(name, amount)| CategoryBreakdown {
                name: name.to_string(),
                amount,
                percentage: Self::percentage(amount, grand_total),
            })
            .collect();
        rows.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
        rows
    }

    /// `round(amount / total × 100)`, midpoint away from zero; zero when
    /// the total is zero or the share overflows.
    #[must_use]
    pub fn percentage(amount: Decimal, total: Decimal) -> Decimal {
        amount
            .checked_div(total)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ZERO, |pct| {
                pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseCategory;
    use crate::reports::classifier::ExpenseSource;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1), dec!(3), dec!(33))]
    #[case(dec!(2), dec!(3), dec!(67))]
    #[case(dec!(1), dec!(8), dec!(13))]
    #[case(dec!(1), dec!(200), dec!(1))]
    #[case(dec!(5), dec!(0), dec!(0))]
    #[case(dec!(0), dec!(0), dec!(0))]
    fn test_percentage(#[case] amount: Decimal, #[case] total: Decimal, #[case] expected: Decimal) {
        assert_eq!(CategoryAggregator::percentage(amount, total), expected);
    }

    #[test]
    fn test_percentage_overflow_is_zero() {
        assert_eq!(
            CategoryAggregator::percentage(Decimal::MAX, dec!(1)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_refunds_leaving_tiny_total_do_not_panic() {
        let big = Decimal::from_i128_with_scale(10i128.pow(28), 0);
        let lines: Vec<ExpenseLine> = [("Rent", big), ("Refund", Decimal::ONE - big)]
            .into_iter()
            .map(|(label, amount)| ExpenseLine {
                source: ExpenseSource::Expense,
                category: ExpenseCategory::parse(label),
                amount,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                is_manufacturing_cost: false,
            })
            .collect();

        let rows = CategoryAggregator::group(&lines);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.percentage.is_zero()));
    }
}
