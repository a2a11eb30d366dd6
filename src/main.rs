//! Weight Log
//!
//! Interactive terminal rendition of the weight screen. Reads one command
//! per line from stdin and redraws the screen after each one.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use weight_log::{Config, MemoryStore, WeightRepository, WeightScreen};

#[derive(Parser)]
#[command(name = "weight-log")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Log your weight and review the history")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long)]
    data_dir: Option<String>,

    /// Keep entries in memory only
    #[arg(long)]
    ephemeral: bool,
}

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Redraw without changing anything
    Show,
    /// Replace the input field text
    Type(String),
    /// Submit, optionally typing first
    Log(Option<String>),
    /// Toggle the history section
    History,
    /// Delete the row with this display number (1-based)
    Delete(usize),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Ok(Command::Show),
            "type" | "t" => Ok(Command::Type(rest.to_string())),
            "log" | "l" => Ok(Command::Log((!rest.is_empty()).then(|| rest.to_string()))),
            "history" | "h" => Ok(Command::History),
            "delete" | "d" => {
                let number: usize = rest
                    .parse()
                    .map_err(|_| format!("Invalid entry number: {:?}", rest))?;
                if number == 0 {
                    return Err("Entry numbers start at 1".to_string());
                }
                Ok(Command::Delete(number))
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {}. Type 'help' for commands.", other)),
        }
    }
}

const HELP: &str = "\
Commands:
  type <text>   fill the weight field
  log [text]    log the weight field (or <text>)
  history       show/hide the weight history
  delete <n>    delete entry number <n>
  help          show this help
  quit          save and exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }

    weight_log::init_logging(&config.logging);
    tracing::info!("Weight Log v{}", env!("CARGO_PKG_VERSION"));

    let repo = if args.ephemeral {
        WeightRepository::with_key(Arc::new(MemoryStore::new()), config.storage.key.clone())
    } else {
        tracing::info!("Data directory: {:?}", config.storage.data_dir);
        WeightRepository::open(&config.storage)
    };

    let mut screen = WeightScreen::mount(repo, config.display.clone()).await;

    println!("{}", screen.view());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Show => {}
            Command::Type(text) => screen.set_input(text),
            Command::Log(text) => {
                if let Some(text) = text {
                    screen.set_input(text);
                }
                if screen.submit().is_none() {
                    continue;
                }
            }
            Command::History => {
                screen.toggle_history();
            }
            Command::Delete(number) => {
                if screen.delete_entry(number - 1).is_none() {
                    println!("No entry number {}", number);
                    continue;
                }
            }
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
        }

        println!();
        println!("{}", screen.view());
    }

    screen.flush().await;
    tracing::info!("Weight Log shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("").unwrap(), Command::Show);
        assert_eq!(Command::parse("type 70.5").unwrap(), Command::Type("70.5".into()));
        assert_eq!(Command::parse("log").unwrap(), Command::Log(None));
        assert_eq!(Command::parse("LOG  71 ").unwrap(), Command::Log(Some("71".into())));
        assert_eq!(Command::parse("h").unwrap(), Command::History);
        assert_eq!(Command::parse("delete 2").unwrap(), Command::Delete(2));
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("delete").is_err());
        assert!(Command::parse("delete 0").is_err());
        assert!(Command::parse("delete two").is_err());
        assert!(Command::parse("jump").is_err());
    }

    #[test]
    fn test_type_keeps_free_text() {
        assert_eq!(
            Command::parse("type about 70 kg").unwrap(),
            Command::Type("about 70 kg".into())
        );
    }
}
