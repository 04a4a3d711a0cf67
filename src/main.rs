use anyhow::Result;
use clap::{Parser, Subcommand};

use assistant::cli::{
    handle_audit_command, handle_calc_command, handle_contact_command, handle_finance_command,
    handle_note_command, handle_task_command,
};
use assistant::config::{AssistantPaths, Settings};
use assistant::storage::{FileStatus, Storage};

#[derive(Parser)]
#[command(
    name = "assistant",
    version,
    about = "Personal data manager for notes, tasks, contacts and finances",
    long_about = "Keeps notes, tasks, contacts and finance records in local JSON files, \
                  with CSV import/export, finance reports and a safe calculator."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Note management commands
    #[command(subcommand)]
    Note(assistant::cli::NoteCommands),

    /// Task management commands
    #[command(subcommand)]
    Task(assistant::cli::TaskCommands),

    /// Contact management commands
    #[command(subcommand)]
    Contact(assistant::cli::ContactCommands),

    /// Finance record commands
    #[command(subcommand)]
    Finance(assistant::cli::FinanceCommands),

    /// Evaluate an arithmetic expression
    Calc {
        /// Expression using numbers, + - * / and parentheses
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AssistantPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Note(cmd)) => handle_note_command(&storage, &settings, cmd)?,
        Some(Commands::Task(cmd)) => handle_task_command(&storage, &settings, cmd)?,
        Some(Commands::Contact(cmd)) => handle_contact_command(&storage, &settings, cmd)?,
        Some(Commands::Finance(cmd)) => handle_finance_command(&storage, &settings, cmd)?,
        Some(Commands::Calc { expression }) => handle_calc_command(&expression)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Config { write }) => {
            if write {
                settings.save(&paths)?;
            }

            println!("Personal Assistant Configuration");
            println!("================================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.settings_file().exists() { "" } else { " (defaults, not written)" }
            );
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Currency symbol: {:?}", settings.currency_symbol);
            match settings.list_limit {
                Some(limit) => println!("  List limit:      {}", limit),
                None => println!("  List limit:      (none)"),
            }
            println!();
            println!("Data files:");
            for (name, path, status) in storage.file_status() {
                let status = match status {
                    FileStatus::Missing => "not created yet",
                    FileStatus::Valid => "ok",
                    FileStatus::Corrupt => "CORRUPT",
                };
                println!("  {:<9} {} ({})", name, path.display(), status);
            }
        }
        None => {
            println!("Personal Assistant - notes, tasks, contacts and finances");
            println!();
            println!("Run 'assistant --help' for usage information.");
        }
    }

    Ok(())
}
