use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_buddy::cli::Shell;
use budget_buddy::config::paths::CONFIG_DIR_ENV;
use budget_buddy::config::{BuddyPaths, Settings};
use budget_buddy::logging;

#[derive(Parser)]
#[command(
    name = "buddy",
    version,
    about = "Command-line personal finance tracker",
    long_about = "Budget Buddy keeps an Overall budget plus optional category \
                  budgets. Every expense is recorded in Overall, and in its \
                  category when that budget exists."
)]
struct Cli {
    /// Configuration directory (defaults to the platform config location)
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Write default settings to the configuration directory
    Init,

    /// Show configuration paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => BuddyPaths::with_base_dir(dir),
        None => BuddyPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)
        .with_context(|| format!("Failed to load {}", paths.settings_file().display()))?;

    logging::init(&settings.log_filter);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut shell = Shell::new(settings)?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(stdin.lock(), io::stdout().lock(), interactive)?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!(
                "Settings written to {}",
                paths.settings_file().display()
            );
        }
        Commands::Config => {
            println!("Budget Buddy Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            let symbol = settings.currency_symbol.as_str();
            println!(
                "  Maximum amount:  {}",
                settings.max_amount.format_with_symbol(symbol)
            );
            if settings.default_alert.is_zero() {
                println!("  Default alert:   none");
            } else {
                println!(
                    "  Default alert:   {}",
                    settings.default_alert.format_with_symbol(symbol)
                );
            }
            println!("  Log filter:      {}", settings.log_filter);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
