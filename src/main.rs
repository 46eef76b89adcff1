use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod config;
mod error;
mod order;
mod ui;

use cli::Args;
use config::Settings;
use ui::commands::{AppState, handle_command};
use ui::prompt::Repl;
use ui::theme::{BANNER, create_skin};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let mut settings = Settings::new(args.config.as_deref()).context("failed to load configuration")?;
    args.apply(&mut settings);
    debug!(?settings, "settings loaded");

    match args.pages.as_deref() {
        Some(raw) => run_once(raw, &settings),
        None => run_shell(&mut settings),
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")
}

fn run_once(raw: &str, settings: &Settings) -> Result<()> {
    match order::respond(raw, settings) {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(e) => bail!(e.user_message()),
    }
}

fn run_shell(settings: &mut Settings) -> Result<()> {
    let skin = create_skin();
    let mut repl = Repl::new(&settings.prompt);

    if repl.is_interactive() {
        skin.print_text(BANNER);
    }
    info!(interactive = repl.is_interactive(), "shell started");

    loop {
        let line_buffer = match repl.read_line().context("failed to read input")? {
            Some(line) => line,
            None => break,
        };
        let line = line_buffer.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('/') {
            let mut state = AppState {
                settings: &mut *settings,
                skin: &skin,
            };
            if !handle_command(&line_buffer, &mut state) {
                break;
            }
            continue;
        }

        match order::respond(line, settings) {
            Ok(text) => print!("{}", text),
            Err(e) => println!("{}", e.user_message().red()),
        }
        io::stdout().flush()?;
    }

    Ok(())
}
