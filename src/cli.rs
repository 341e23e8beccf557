//! Command-line definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Where the log file is written: `<data_local_dir>/loancalc/logs/loancalc.log`
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("loancalc")
        .join("logs")
        .join("loancalc.log")
}

/// Help footer pointing at the platform's log location
pub fn after_help() -> String {
    format!("Logs are written to: {}", log_path().display())
}

/// Loan payment calculator
#[derive(Parser)]
#[command(
    name = "loancalc",
    about = "Amortized loan payment calculator",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive calculator (default)
    Tui,

    /// Print one payment summary and exit
    Calc {
        /// Amount borrowed
        #[arg(short, long, allow_hyphen_values = true)]
        principal: String,

        /// Annual interest rate in percent (6.5 means 6.5%)
        #[arg(short, long, allow_hyphen_values = true)]
        rate: String,

        /// Loan term in years; fractional values are not rounded
        #[arg(short, long, allow_hyphen_values = true)]
        years: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from([
            "loancalc", "calc", "--principal", "500000", "--rate", "0", "--years", "10", "-f", "json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Calc {
                principal,
                rate,
                years,
                format,
            }) => {
                assert_eq!(principal, "500000");
                assert_eq!(rate, "0");
                assert_eq!(years, "10");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected calc command"),
        }
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["loancalc", "calc", "-p", "-100", "-r", "5", "-y", "10"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Calc { ref principal, .. }) if principal == "-100"));
    }

    #[test]
    fn test_after_help_names_resolved_log_path() {
        let path = log_path();
        assert!(path.ends_with("loancalc/logs/loancalc.log"));
        assert!(after_help().contains(&path.display().to_string()));
    }

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["loancalc", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
