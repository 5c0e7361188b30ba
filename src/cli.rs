use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::runtime;
use crate::service::schedule_service::ScheduleBoard;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat with the hosted assistant
    Chat {},
    /// Interactive scheduling board over the seeded data
    Calendar {},
    /// Print the month grid (YYYY-MM, defaults to the current month)
    Grid { month: Option<String> },
    /// List activities scheduled on a date (YYYY-MM-DD)
    Agenda { date: String },
}

pub async fn cli(openrouter_api_key: Option<String>) {
    // Fine to panic here
    let cli = Cli::parse();
    match &cli.command {
        Commands::Chat {} => {
            let Some(api_key) = openrouter_api_key else {
                println!("OPENROUTER_API_KEY must be set for chat");
                return;
            };
            runtime::run_chat(api_key).await;
        }
        Commands::Calendar {} => {
            runtime::run_calendar().await;
        }
        Commands::Grid { month } => match parse_month(month.as_deref()) {
            Ok(anchor) => {
                let board = ScheduleBoard::seeded();
                println!("{}", runtime::render_month(&board, anchor));
            }
            Err(e) => println!("Failed to read month: {}", e),
        },
        Commands::Agenda { date } => match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(day) => {
                let board = ScheduleBoard::seeded();
                println!("{}", runtime::render_agenda(&board, day));
            }
            Err(e) => println!("Failed to read date '{}': {}", date, e),
        },
    }
}

fn parse_month(raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw {
        None => Ok(Local::now().date_naive().with_day(1).unwrap()),
        Some(s) => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map_err(|e| format!("'{}': {}", s, e)),
    }
}
