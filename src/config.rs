//! Configuration types and loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::LoanType;
use crate::theme::ThemeKind;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbol prefixed to every currency amount
    #[serde(rename = "currency-symbol")]
    pub currency_symbol: String,

    /// Theme used when the session has no stored preference
    pub theme: ThemeKind,

    /// Loan type selected at startup
    #[serde(rename = "loan-type")]
    pub loan_type: LoanType,

    /// Initial form values
    pub defaults: InputDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            theme: ThemeKind::default(),
            loan_type: LoanType::default(),
            defaults: InputDefaults::default(),
        }
    }
}

/// Raw form text pre-filled into the three inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub principal: String,
    pub rate: String,
    pub years: String,
}

impl Config {
    /// Loads `explicit` if given; an unreadable explicit file is an error.
    /// Otherwise the first readable implicit location wins, and defaults apply
    /// when none exist.
    pub fn load(explicit: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path).with_context(|| format!("Failed to load config from {}", path.display()));
        }

        for path in Self::implicit_locations() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!(path = %path.display(), "skipping config: {:#}", e),
            }
        }

        tracing::info!("no config file, using defaults");
        Ok(Self::default())
    }

    /// `./.loancalc.yml`, then `<config_dir>/loancalc/loancalc.yml`.
    fn implicit_locations() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".loancalc.yml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("loancalc").join("loancalc.yml"));
        }
        paths
    }

    fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).context("read")?;
        let config = serde_yaml::from_str(&text).context("parse")?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
