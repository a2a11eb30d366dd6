//! Weight Log CLI
//!
//! One-shot commands against the same storage the interactive screen uses:
//! - Log a weight
//! - List the history
//! - Delete an entry
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weight_log::{Config, WeightHistory, WeightRepository, WeightScreen};

#[derive(Parser)]
#[command(name = "weight-log-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record and review body-weight entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a weight for today
    Log {
        /// Weight as typed, e.g. 70.4
        weight: String,
    },

    /// List logged weights, oldest first
    List {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Delete an entry by its number in `list`
    Delete {
        /// Entry number (1-based)
        number: usize,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    weight_log::init_logging(&config.logging);

    match cli.command {
        Commands::Log { weight } => {
            let repo = WeightRepository::open(&config.storage);
            let mut screen = WeightScreen::mount(repo, config.display.clone()).await;

            screen.set_input(weight);
            match screen.submit() {
                Some(entry) => {
                    screen.flush().await;
                    println!(
                        "Logged {} {} on {}",
                        entry.weight, config.display.unit_label, entry.date
                    );
                }
                None => {
                    println!("Nothing to log");
                }
            }
        }

        Commands::List { format } => {
            let history = WeightRepository::open(&config.storage).load().await;

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&history)?);
                }
                _ => {
                    print_table(&history, &config.display.unit_label);
                }
            }
        }

        Commands::Delete { number } => {
            if number == 0 {
                anyhow::bail!("Entry numbers start at 1");
            }

            let repo = WeightRepository::open(&config.storage);
            let mut screen = WeightScreen::mount(repo, config.display.clone()).await;

            match screen.delete_entry(number - 1) {
                Some(entry) => {
                    screen.flush().await;
                    println!("Deleted {}: {}", number, entry);
                }
                None => {
                    eprintln!(
                        "No entry number {} ({} entries logged)",
                        number,
                        screen.history().len()
                    );
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = weight_log::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn print_table(history: &WeightHistory, unit: &str) {
    if history.is_empty() {
        println!("No entries yet");
        println!();
        println!("Log your first weight with:");
        println!("  weight-log-cli log 70.5");
        return;
    }

    println!("{:>4}  {:<12} {}", "#", "Date", "Weight");
    println!("{}", "-".repeat(30));

    for (i, entry) in history.iter().enumerate() {
        println!("{:>4}  {:<12} {} {}", i + 1, entry.date, entry.weight, unit);
    }
}
