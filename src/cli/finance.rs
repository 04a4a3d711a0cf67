//! Finance CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use super::common;
use crate::config::Settings;
use crate::display::{
    format_amount, format_finance_details, format_finance_list, format_finance_report,
};
use crate::error::AssistantResult;
use crate::models::{FinanceDraft, FinancePatch, RecordId};
use crate::services::FinanceService;
use crate::storage::Storage;
use crate::validation::parse_date;

/// Finance subcommands
#[derive(Subcommand)]
pub enum FinanceCommands {
    /// Record income (positive) or an expense (negative)
    Create {
        /// Signed amount, e.g. 100 or -40.5
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
        /// Date (DD-MM-YYYY)
        #[arg(long)]
        date: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List all finance records
    List {
        /// Maximum number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a finance record
    Show { id: RecordId },
    /// Edit a finance record; omitted fields keep their value
    Edit {
        id: RecordId,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Date (DD-MM-YYYY)
        #[arg(long)]
        date: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a finance record
    Delete { id: RecordId },
    /// Income, expense and balance between two dates (inclusive)
    Report {
        /// First day (DD-MM-YYYY)
        start: String,
        /// Last day (DD-MM-YYYY)
        end: String,
    },
    /// Sum of all records
    Balance,
    /// Append finance records from a CSV file
    Import { file: PathBuf },
    /// Write all finance records to a CSV file
    Export { file: PathBuf },
}

/// Handle a finance command
pub fn handle_finance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: FinanceCommands,
) -> AssistantResult<()> {
    let store = &storage.finance;
    let service = FinanceService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        FinanceCommands::Create {
            amount,
            category,
            date,
            description,
        } => {
            let outcome = store.create(FinanceDraft {
                amount,
                category,
                date,
                description,
            })?;
            let record = &outcome.record;
            println!(
                "Created finance record #{}: {} ({})",
                record.id,
                format_amount(record.amount, symbol),
                record.category
            );
        }

        FinanceCommands::List { limit } => {
            let records = common::apply_limit(store.load()?, limit, settings);
            println!("{}", format_finance_list(&records, symbol));
        }

        FinanceCommands::Show { id } => {
            print!("{}", format_finance_details(&store.get(id)?, symbol));
        }

        FinanceCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let outcome = store.update(
                id,
                FinancePatch {
                    amount,
                    category,
                    date,
                    description,
                },
            )?;
            println!(
                "Updated finance record #{}: {}",
                id,
                format_amount(outcome.record.amount, symbol)
            );
            common::print_rejections(&outcome.rejected);
        }

        FinanceCommands::Delete { id } => common::delete(store, id)?,

        FinanceCommands::Report { start, end } => {
            let report = service.report(parse_date(&start)?, parse_date(&end)?)?;
            println!("{}", format_finance_report(&report, symbol));
        }

        FinanceCommands::Balance => {
            println!("Balance: {}", format_amount(service.balance()?, symbol));
        }

        FinanceCommands::Import { file } => common::import(store, &file)?,
        FinanceCommands::Export { file } => common::export(store, &file)?,
    }

    Ok(())
}
