//! Finance record display formatting

use super::{column_width, format_amount, truncate};
use crate::models::dates::format_date;
use crate::models::FinanceRecord;
use crate::services::FinanceReport;

const DESCRIPTION_MAX: usize = 30;

/// Format finance records as a ledger with a running total
pub fn format_finance_list(records: &[FinanceRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No finance records found.".to_string();
    }

    let amounts: Vec<String> = records
        .iter()
        .map(|r| format_amount(r.amount, currency_symbol))
        .collect();
    let total = format_amount(records.iter().map(|r| r.amount).sum(), currency_symbol);
    let amount_width = column_width(
        "Amount",
        amounts.iter().map(String::as_str).chain(std::iter::once(total.as_str())),
    );
    let category_width = column_width("Category", records.iter().map(|r| r.category.as_str()));

    let mut output = format!(
        "{:>4}  {:<10}  {:>amount_width$}  {:<category_width$}  {}\n",
        "ID",
        "Date",
        "Amount",
        "Category",
        "Description",
        amount_width = amount_width,
        category_width = category_width
    );
    let separator = format!(
        "{:->4}  {:-<10}  {:->amount_width$}  {:-<category_width$}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        amount_width = amount_width,
        category_width = category_width
    );
    output.push_str(&separator);

    for (record, amount) in records.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:>4}  {:<10}  {:>amount_width$}  {:<category_width$}  {}\n",
            record.id,
            format_date(record.date),
            amount,
            record.category,
            truncate(&record.description, DESCRIPTION_MAX),
            amount_width = amount_width,
            category_width = category_width
        ));
    }

    output.push_str(&separator);
    output.push_str(&format!(
        "{:>4}  {:<10}  {:>amount_width$}\n",
        "",
        "TOTAL",
        total,
        amount_width = amount_width
    ));

    output
}

pub fn format_finance_details(record: &FinanceRecord, currency_symbol: &str) -> String {
    let kind = if record.is_income() {
        "Income"
    } else if record.is_expense() {
        "Expense"
    } else {
        "Zero"
    };

    let mut output = format!("Finance record #{}\n", record.id);
    output.push_str(&format!(
        "  Amount:      {} ({})\n",
        format_amount(record.amount, currency_symbol),
        kind
    ));
    output.push_str(&format!("  Category:    {}\n", record.category));
    output.push_str(&format!("  Date:        {}\n", format_date(record.date)));
    output.push_str(&format!("  Description: {}\n", record.description));
    output
}

/// Format a period report, or say that the period is empty
pub fn format_finance_report(report: &FinanceReport, currency_symbol: &str) -> String {
    let period = format!(
        "{} to {}",
        format_date(report.start_date),
        format_date(report.end_date)
    );

    if report.is_empty() {
        return format!("No finance records from {}.", period);
    }

    let mut output = format!("Finance report: {}\n", period);
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Records: {:>30}\n", report.record_count));
    output.push_str(&format!(
        "Income:  {:>30}\n",
        format_amount(report.income, currency_symbol)
    ));
    output.push_str(&format!(
        "Expense: {:>30}\n",
        format_amount(report.expense, currency_symbol)
    ));
    output.push_str(&format!("{:-<40}\n", ""));
    output.push_str(&format!(
        "Balance: {:>30}\n",
        format_amount(report.balance, currency_symbol)
    ));
    output
}
