//! Finance service
//!
//! Period reports and the running balance over all finance records.

use chrono::NaiveDate;

use crate::error::AssistantResult;
use crate::models::FinanceRecord;
use crate::storage::Storage;

/// Income and expense totals for a date range
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceReport {
    /// First day of the report, inclusive
    pub start_date: NaiveDate,
    /// Last day of the report, inclusive
    pub end_date: NaiveDate,
    /// Sum of positive amounts
    pub income: f64,
    /// Sum of negative amounts (zero or negative)
    pub expense: f64,
    /// `income + expense`
    pub balance: f64,
    /// Records dated within the range
    pub record_count: usize,
}

impl FinanceReport {
    /// Summarize the records that fall within `[start_date, end_date]`
    pub fn from_records(
        records: &[FinanceRecord],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let in_range: Vec<&FinanceRecord> = records
            .iter()
            .filter(|r| r.in_range(start_date, end_date))
            .collect();

        let income: f64 = in_range.iter().filter(|r| r.is_income()).map(|r| r.amount).sum();
        let expense: f64 = in_range.iter().filter(|r| r.is_expense()).map(|r| r.amount).sum();

        Self {
            start_date,
            end_date,
            income,
            expense,
            balance: income + expense,
            record_count: in_range.len(),
        }
    }

    /// No record fell within the period
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Service for finance reporting
pub struct FinanceService<'a> {
    storage: &'a Storage,
}

impl<'a> FinanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Report over an inclusive date range
    ///
    /// A start after the end yields an empty report.
    pub fn report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AssistantResult<FinanceReport> {
        let records = self.storage.finance.load()?;
        Ok(FinanceReport::from_records(&records, start_date, end_date))
    }

    /// Sum of every amount in the store
    pub fn balance(&self) -> AssistantResult<f64> {
        Ok(self.storage.finance.load()?.iter().map(|r| r.amount).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssistantPaths, Settings};
    use crate::models::FinanceDraft;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, amount: &str, date: &str) {
        storage
            .finance
            .create(FinanceDraft {
                amount: amount.into(),
                category: "General".into(),
                date: date.into(),
                description: String::new(),
            })
            .unwrap();
    }

    fn date(d: u32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_january_report_excludes_february() {
        let (_temp, storage) = create_test_storage();
        add(&storage, "100", "05-01-2024");
        add(&storage, "-40", "10-01-2024");
        add(&storage, "20", "01-02-2024");

        let report = FinanceService::new(&storage)
            .report(date(1, 1), date(31, 1))
            .unwrap();

        assert_eq!(report.income, 100.0);
        assert_eq!(report.expense, -40.0);
        assert_eq!(report.balance, 60.0);
        assert_eq!(report.record_count, 2);
    }

    #[test]
    fn test_january_report_with_three_in_range() {
        let (_temp, storage) = create_test_storage();
        add(&storage, "100", "05-01-2024");
        add(&storage, "-40", "10-01-2024");
        add(&storage, "20", "31-01-2024");
        add(&storage, "500", "01-02-2024");

        let report = FinanceService::new(&storage)
            .report(date(1, 1), date(31, 1))
            .unwrap();

        assert_eq!(report.income, 120.0);
        assert_eq!(report.expense, -40.0);
        assert_eq!(report.balance, 80.0);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let (_temp, storage) = create_test_storage();
        add(&storage, "1", "01-03-2024");
        add(&storage, "2", "02-03-2024");
        add(&storage, "4", "03-03-2024");

        let service = FinanceService::new(&storage);
        let report = service.report(date(1, 3), date(2, 3)).unwrap();
        assert_eq!(report.income, 3.0);

        let single = service.report(date(3, 3), date(3, 3)).unwrap();
        assert_eq!(single.record_count, 1);
    }

    #[test]
    fn test_empty_period() {
        let (_temp, storage) = create_test_storage();
        add(&storage, "100", "05-01-2024");

        let service = FinanceService::new(&storage);
        assert!(service.report(date(1, 6), date(30, 6)).unwrap().is_empty());
        assert!(service.report(date(31, 1), date(1, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_balance_covers_every_record() {
        let (_temp, storage) = create_test_storage();
        let service = FinanceService::new(&storage);
        assert_eq!(service.balance().unwrap(), 0.0);

        add(&storage, "100", "05-01-2024");
        add(&storage, "-40", "10-01-2024");
        add(&storage, "20", "01-02-2024");
        assert_eq!(service.balance().unwrap(), 80.0);
    }
}
