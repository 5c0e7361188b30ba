#![allow(non_snake_case)]

use std::env;

use agendaBot::cli;
use agendaBot::config::AppConfig;
use agendaBot::runtime;

const DEFAULT_RUN_MODE: &str = "cli";

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "chat" {
        let api_key = get_prop("OPENROUTER_API_KEY")
            .expect("OPENROUTER_API_KEY environment variable not set");
        runtime::run_chat(api_key).await;
    } else if run_mode == "cli" {
        cli::cli(get_prop("OPENROUTER_API_KEY")).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
