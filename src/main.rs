use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_logging;
use expense_tracker::store::TransactionStore;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Record expenses, filter them by amount or category, undo mistakes",
    long_about = "Expense Tracker is a terminal form for recording expense \
                  transactions. Matching rows are highlighted when a filter \
                  is applied, and any row can be undone."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    #[command(alias = "ui")]
    Tui,

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_logging(&paths, &settings)?;
            let mut store = TransactionStore::new();
            expense_tracker::tui::run_tui(&mut store, &settings)?;
        }
        Commands::Init => {
            println!("Initializing Expense Tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Categories: {}", settings.categories.join(", "));
            println!("Set \"restrict_categories\": true to only accept these.");
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Categories:          {}", settings.categories.join(", "));
            println!("  Restrict categories: {}", settings.restrict_categories);
            println!("  Log filter:          {}", settings.log_filter);
            println!("  Tick rate (ms):      {}", settings.tick_rate_ms);
        }
    }

    Ok(())
}
