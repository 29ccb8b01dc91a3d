use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_history_command,
    BudgetCommands, ExpenseCommands, ExportArgs, Menu,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses against monthly budgets",
    long_about = "Records expenses in a local JSON ledger, sets monthly spending \
                  limits and warns when a month goes over budget. Run without a \
                  command for the interactive menu."
)]
struct Cli {
    /// Directory holding config.json, audit.log and data/
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export the ledger (CSV) or a full snapshot (JSON, YAML)
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let mut storage = Storage::new(paths.clone(), &settings)?;
    for issue in storage.load_all() {
        eprintln!("Warning: {}", issue);
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Month matching:  {}", settings.month_matching);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            let stdin = std::io::stdin();
            Menu::new(&mut storage, &settings, stdin.lock(), std::io::stdout()).run()?;
        }
    }

    Ok(())
}
