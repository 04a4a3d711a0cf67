//! Finance record model
//!
//! A single income or expense entry. The sign of `amount` is the only thing
//! that distinguishes the two: positive is income, negative is expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{self, date_serde};
use super::{apply_field, CreateOutcome, FieldRejection, Record, RecordId};
use crate::audit::EntityType;
use crate::error::AssistantResult;
use crate::interchange::CsvRow;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub id: RecordId,
    pub amount: f64,
    pub category: String,
    #[serde(with = "date_serde")]
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct FinanceDraft {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct FinancePatch {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl FinanceRecord {
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Whether the record falls within the inclusive range `[start, end]`
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

impl Record for FinanceRecord {
    type Draft = FinanceDraft;
    type Patch = FinancePatch;

    const KIND: EntityType = EntityType::FinanceRecord;
    const CSV_HEADERS: &'static [&'static str] =
        &["id", "amount", "category", "date", "description"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        if self.description.is_empty() {
            self.category.clone()
        } else {
            self.description.clone()
        }
    }

    fn from_draft(id: RecordId, draft: FinanceDraft) -> AssistantResult<CreateOutcome<Self>> {
        let amount = validation::parse_amount(&draft.amount)?;
        let date = validation::parse_date(&draft.date)?;

        Ok(CreateOutcome::clean(Self {
            id,
            amount,
            category: draft.category,
            date,
            description: draft.description,
        }))
    }

    fn apply_patch(&mut self, patch: FinancePatch) -> Vec<FieldRejection> {
        let mut rejected = Vec::new();

        apply_field(
            &mut rejected,
            "amount",
            patch.amount,
            &mut self.amount,
            validation::parse_amount,
        );
        if let Some(category) = patch.category {
            self.category = category;
        }
        apply_field(
            &mut rejected,
            "date",
            patch.date,
            &mut self.date,
            validation::parse_date,
        );
        if let Some(description) = patch.description {
            self.description = description;
        }

        rejected
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.amount.to_string(),
            self.category.clone(),
            dates::format_date(self.date),
            self.description.clone(),
        ]
    }

    fn from_csv_row(row: &CsvRow<'_>) -> AssistantResult<Self> {
        Ok(Self {
            id: row.id()?,
            amount: row.decode("amount", |s| {
                validation::parse_amount(s).map_err(|e| e.detail())
            })?,
            category: row.text("category")?,
            date: row.decode("date", |s| validation::parse_date(s).map_err(|e| e.detail()))?,
            description: row.text("description")?,
        })
    }
}
