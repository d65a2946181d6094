use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod commands;
mod config;
mod models;
mod services;
mod utils;

use api::scorer::ScorerClient;
use app::App;
use commands::Reply;
use config::Config;

const PROMPT: &str = "securebank> ";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so they never interleave with the screen on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("securebank_sim=info".parse().expect("static directive")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    info!("💳 Starting SecureBank transaction simulator");
    info!("Scorer API: {}", config.api_url);
    info!(
        "Starting balance {:.2}, {} trigger merchants, {} trigger amounts",
        config.initial_balance,
        config.triggers.merchants().len(),
        config.triggers.amounts().len()
    );

    let scorer = ScorerClient::with_base_url(config.api_url.clone());
    let mut app = App::new(scorer, &config);

    println!("{}", commands::help::execute(&[]));
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", PROMPT);
        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush prompt: {}", e);
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match commands::handle_line(&mut app, &line).await {
            Reply::Output(text) => println!("{}\n", text),
            Reply::Nothing => {}
            Reply::Quit => break,
        }
    }

    info!("Session ended with balance {:.2}", app.session.balance());
}
