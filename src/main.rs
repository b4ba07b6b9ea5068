//! Odds Compare
//!
//! Reads match odds off two bookmakers' homepage screenshots with a vision
//! model, pairs the same matches across both bookmakers and asks the model
//! which matches differ most in odds.

mod capture;
mod config;
mod extraction;
mod llm;
mod matching;
mod odds;
mod opener;
mod paths;
mod pipeline;
mod report;
mod tables;

use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

use llm::{OpenAiClient, RetryOnEmpty};

const LOG_FILE_NAME: &str = "odds_compare.log";

/// Logs a message to both console and log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    append_to_log_file(&line);
}

fn append_to_log_file(line: &str) {
    let log_path = paths::get_logs_dir().join(LOG_FILE_NAME);
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(line.as_bytes());
    }
}

fn main() -> Result<()> {
    // Set up panic hook to log panics
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = if let Some(loc) = panic_info.location() {
            format!(" at {}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            String::new()
        };
        let log_msg = format!("[PANIC]{} {}\n", location, msg);
        eprint!("{}", log_msg);
        append_to_log_file(&log_msg);
    }));

    // Ensure output directories exist
    paths::ensure_directories()?;

    let config = config::load_config();
    let credentials = config::Credentials::from_env()?;

    let client = OpenAiClient::new(&config, &credentials)?;
    let service = RetryOnEmpty::new(client, config.attempts());
    log(&format!(
        "Using model {} ({} attempt(s) per request)",
        config.model,
        config.attempts()
    ));

    let analysis = pipeline::run(&config, &service)?;

    println!("\n=== Výstup od GPT ===\n");
    println!("{}", analysis);
    Ok(())
}
