//! Record aggregation for summary and trend views.
//!
//! Provides functions to total expenses by category, bucket income and
//! expenses by calendar month, and compute the overall balance. All
//! functions operate on the full, unfiltered snapshot; display filtering
//! (see [crate::analytics::filter]) never changes these results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{Category, Record, RecordKind};

use super::month::month_key;

/// Income and expense totals for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The bucket key, `YYYY-MM`.
    pub month: String,
    /// Sum of income amounts in minor units.
    pub income: i64,
    /// Sum of expense amounts in minor units.
    pub expense: i64,
}

/// Full-collection income and expense sums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all income amounts in minor units.
    pub income: i64,
    /// Sum of all expense amounts in minor units.
    pub expense: i64,
}

impl Totals {
    /// Net balance, income minus expenses.
    ///
    /// May be negative; that is a valid state, not an error.
    pub fn balance(&self) -> i64 {
        self.income - self.expense
    }
}

/// Totals expense amounts by category label.
///
/// Income records are ignored. Categories with no expense records do not
/// appear in the output; there is no zero-filling. Amounts are integer
/// minor units, so the totals partition the overall expense total exactly.
///
/// # Returns
/// Ordered map from category to the sum of its expense amounts.
pub fn category_totals(records: &[Record]) -> BTreeMap<Category, i64> {
    let mut totals = BTreeMap::new();

    for record in records
        .iter()
        .filter(|record| record.kind == RecordKind::Expense)
    {
        *totals.entry(record.category.clone()).or_insert(0) += record.amount;
    }

    totals
}

/// Buckets records by calendar month and totals income and expenses per
/// bucket.
///
/// Grouping uses the `YYYY-MM` key of `occurred_on`; calendar months, not
/// rolling windows. The series is sparse: months with no records are
/// omitted rather than emitted with zero totals.
///
/// # Returns
/// Vector of monthly summaries sorted ascending by month key.
pub fn monthly_series(records: &[Record]) -> Vec<MonthlySummary> {
    let mut buckets: BTreeMap<String, Totals> = BTreeMap::new();

    for record in records {
        let bucket = buckets.entry(month_key(record.occurred_on)).or_default();

        match record.kind {
            RecordKind::Income => bucket.income += record.amount,
            RecordKind::Expense => bucket.expense += record.amount,
        }
    }

    buckets
        .into_iter()
        .map(|(month, totals)| MonthlySummary {
            month,
            income: totals.income,
            expense: totals.expense,
        })
        .collect()
}

/// Sums all amounts split by record kind.
///
/// # Returns
/// The full-collection [Totals]; call [Totals::balance] for the net.
pub fn totals(records: &[Record]) -> Totals {
    let mut totals = Totals::default();

    for record in records {
        match record.kind {
            RecordKind::Income => totals.income += record.amount,
            RecordKind::Expense => totals.expense += record.amount,
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use crate::record::{Category, OwnerId, Record, RecordId, RecordKind};

    use super::{MonthlySummary, category_totals, monthly_series, totals};

    fn create_test_record(
        id: &str,
        amount: i64,
        kind: RecordKind,
        category: &str,
        occurred_on: time::Date,
    ) -> Record {
        Record {
            id: RecordId::new(id),
            owner_id: OwnerId::new("user-1"),
            amount,
            category: Category::new_unchecked(category),
            kind,
            occurred_on,
            description: "Test".to_owned(),
            created_at: datetime!(2024-03-01 09:00 UTC),
        }
    }

    fn scenario_records() -> Vec<Record> {
        vec![
            create_test_record(
                "r1",
                10_000,
                RecordKind::Income,
                "Salary",
                date!(2024 - 01 - 05),
            ),
            create_test_record(
                "r2",
                4_000,
                RecordKind::Expense,
                "Grocery",
                date!(2024 - 01 - 10),
            ),
            create_test_record(
                "r3",
                1_500,
                RecordKind::Expense,
                "Grocery",
                date!(2024 - 02 - 01),
            ),
        ]
    }

    #[test]
    fn category_totals_sums_expenses_only() {
        let result = category_totals(&scenario_records());

        assert_eq!(result.len(), 1);
        assert_eq!(result[&Category::new_unchecked("Grocery")], 5_500);
    }

    #[test]
    fn category_totals_handles_empty_input() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn category_totals_partition_the_expense_total() {
        let records = vec![
            create_test_record(
                "r1",
                4_000,
                RecordKind::Expense,
                "Grocery",
                date!(2024 - 01 - 10),
            ),
            create_test_record(
                "r2",
                2_500,
                RecordKind::Expense,
                "Travel",
                date!(2024 - 01 - 12),
            ),
            create_test_record(
                "r3",
                9_000,
                RecordKind::Income,
                "Salary",
                date!(2024 - 01 - 15),
            ),
            create_test_record(
                "r4",
                750,
                RecordKind::Expense,
                "Grocery",
                date!(2024 - 02 - 02),
            ),
        ];

        let category_sum: i64 = category_totals(&records).values().sum();

        assert_eq!(category_sum, totals(&records).expense);
    }

    #[test]
    fn category_totals_aggregates_unknown_labels_normally() {
        let records = vec![
            create_test_record(
                "r1",
                2_000,
                RecordKind::Expense,
                "Pet Supplies",
                date!(2024 - 01 - 10),
            ),
            create_test_record(
                "r2",
                1_000,
                RecordKind::Expense,
                "Pet Supplies",
                date!(2024 - 01 - 20),
            ),
        ];

        let result = category_totals(&records);

        assert_eq!(result[&Category::new_unchecked("Pet Supplies")], 3_000);
    }

    #[test]
    fn monthly_series_buckets_by_calendar_month() {
        let result = monthly_series(&scenario_records());

        assert_eq!(
            result,
            vec![
                MonthlySummary {
                    month: "2024-01".to_owned(),
                    income: 10_000,
                    expense: 4_000,
                },
                MonthlySummary {
                    month: "2024-02".to_owned(),
                    income: 0,
                    expense: 1_500,
                },
            ]
        );
    }

    #[test]
    fn monthly_series_is_sparse_and_sorted() {
        let records = vec![
            create_test_record(
                "r1",
                100,
                RecordKind::Expense,
                "Grocery",
                date!(2024 - 06 - 15),
            ),
            create_test_record(
                "r2",
                200,
                RecordKind::Expense,
                "Grocery",
                date!(2023 - 11 - 03),
            ),
        ];

        let result = monthly_series(&records);

        let months: Vec<&str> = result.iter().map(|summary| summary.month.as_str()).collect();
        assert_eq!(months, vec!["2023-11", "2024-06"]);
        // No bucket exists for the empty months in between.
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn monthly_series_handles_empty_input() {
        assert!(monthly_series(&[]).is_empty());
    }

    #[test]
    fn balance_is_income_minus_expense() {
        assert_eq!(totals(&scenario_records()).balance(), 4_500);
    }

    #[test]
    fn balance_may_be_negative() {
        let records = vec![
            create_test_record(
                "r1",
                1_000,
                RecordKind::Income,
                "Salary",
                date!(2024 - 01 - 05),
            ),
            create_test_record(
                "r2",
                2_500,
                RecordKind::Expense,
                "Rent & EMI",
                date!(2024 - 01 - 06),
            ),
        ];

        assert_eq!(totals(&records).balance(), -1_500);
    }

    #[test]
    fn totals_of_empty_input_are_zero() {
        assert_eq!(totals(&[]).balance(), 0);
    }
}
