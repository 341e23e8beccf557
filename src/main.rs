use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{fs, io};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use loancalc::app::{handle_key, App};
use loancalc::cli::{after_help, log_path, Cli, Command, OutputFormat};
use loancalc::config::Config;
use loancalc::format::{format_currency, format_percent};
use loancalc::store::MemoryStore;
use loancalc::{LoanInput, PaymentSummary};

fn setup_logging(verbose: bool) -> Result<()> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    // stdout belongs to the TUI
    let log_file = fs::File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    info!(path = %path.display(), verbose, "logging to file");
    Ok(())
}

fn main() -> Result<()> {
    let cmd = Cli::command().after_help(after_help());
    let cli = Cli::from_arg_matches(&cmd.get_matches())?;

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(theme = %config.theme, loan_type = %config.loan_type, "config ready");

    match cli.command {
        Some(Command::Calc {
            principal,
            rate,
            years,
            format,
        }) => cmd_calc(&config, &principal, &rate, &years, format),
        Some(Command::Tui) | None => cmd_tui(&config),
    }
}

fn cmd_calc(config: &Config, principal: &str, rate: &str, years: &str, format: OutputFormat) -> Result<()> {
    let summary = LoanInput::parse(principal, rate, years).compute()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print_summary(&summary, &config.currency_symbol),
    }
    Ok(())
}

fn print_summary(summary: &PaymentSummary, symbol: &str) {
    println!("Monthly Payment: {}", format_currency(summary.monthly_payment, symbol));
    println!("Total Payment:   {}", format_currency(summary.total_payment, symbol));
    println!(
        "Principal:       {} ({})",
        format_currency(summary.principal_amount, symbol),
        format_percent(summary.principal_percentage)
    );
    println!(
        "Total Interest:  {} ({})",
        format_currency(summary.total_interest, symbol),
        format_percent(summary.interest_percentage)
    );
}

fn cmd_tui(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, MemoryStore::new());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Session ended with {} stored values", app.store().len());
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| loancalc::ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
