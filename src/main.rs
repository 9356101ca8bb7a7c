//! Interactive front end for chatlog-dl.
//!
//! Reads input line by line: a username starts a download run, `help` prints
//! usage, `test` probes the archive host, and `exit`/`quit` terminate. An
//! optional first argument names a JSON config file; omitted fields fall
//! back to their defaults.

use chatlog_dl::{ChatlogClient, Config, Error};
use std::io::Write as _;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatlog_dl=info")),
        )
        .init();

    let config = load_config()?;
    let client = ChatlogClient::new(config)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    prompt("Enter username (case sensitive)... ");
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "help" => {
                println!("Enter a username to download its chat logs.");
                println!("Type test to probe the archive host.");
                println!("Type exit or quit to exit program");
            }
            "test" => match client.check_archive_reachable().await {
                Ok(()) => println!("Archive host is reachable"),
                Err(e) => println!("Archive host is not reachable: {e}"),
            },
            "exit" | "quit" => return Ok(()),
            username => run(&client, username).await,
        }
        prompt("Or enter another name... ");
    }

    Ok(())
}

/// One download run; user-facing outcomes are printed, the loop continues
async fn run(client: &ChatlogClient, username: &str) {
    match client.download_user_logs(username).await {
        Ok(summary) => {
            println!("Writing to {}", summary.path.display());
            println!(
                "Got {} out of {} months",
                summary.months_retrieved, summary.months_attempted
            );
            println!("Got {} lines", summary.lines_written);
        }
        Err(Error::UserNotFound(_)) => println!("User not found"),
        Err(Error::InvalidUsername(name)) => println!("Invalid username: {name:?}"),
        Err(e) => eprintln!("Download failed: {e}"),
    }
}

fn prompt(message: &str) {
    print!("{message}");
    std::io::stdout().flush().ok();
}

/// Load configuration from the optional first CLI argument
fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config '{path}': {e}"))?;
            let config: Config = serde_json::from_str(&raw)
                .map_err(|e| format!("failed to parse config '{path}': {e}"))?;
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}
