mod cli;
mod config;
mod dump;
mod error;
mod spotify;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::Settings;
use dotenv::dotenv;
use error::{Error, Result};
use spotify::{Auth, Spotify};
use std::io;
use std::process::ExitCode;

async fn run(cli: Cli) -> Result<usize> {
    let settings = Settings::load(cli.config.as_deref())?;

    let auth = Auth::resolve(
        cli.auth_token.as_deref(),
        cli.client_id.as_deref(),
        cli.client_secret.as_deref(),
    )
    .ok_or(Error::MissingCredentials)?;

    let mut spotify = Spotify::new(settings, auth);
    let mut out = io::stdout().lock();
    dump::print_user_tracks(&mut spotify, &cli.username, &mut out).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(count) => {
            log::info!("printed {} tracks", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
