//! Application state and key handling for the interactive calculator.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{LoanInput, PaymentSummary};
use crate::config::Config;
use crate::store::{MemoryStore, KEY_LOAN_TYPE, KEY_PRINCIPAL, KEY_RATE, KEY_THEME, KEY_YEARS};
use crate::theme::ThemeKind;

/// The loan-type selector. Only affects labels; the formula is the same for all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    #[default]
    Home,
    Car,
    Personal,
    Education,
}

impl LoanType {
    const ALL: [LoanType; 4] = [LoanType::Home, LoanType::Car, LoanType::Personal, LoanType::Education];

    pub fn label(self) -> &'static str {
        match self {
            LoanType::Home => "Home Loan",
            LoanType::Car => "Car Loan",
            LoanType::Personal => "Personal Loan",
            LoanType::Education => "Education Loan",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoanType::Home => "home",
            LoanType::Car => "car",
            LoanType::Personal => "personal",
            LoanType::Education => "education",
        }
    }

    /// Common term lengths shown next to the term input.
    pub fn typical_terms(self) -> &'static str {
        match self {
            LoanType::Home => "15, 20, 30",
            LoanType::Car => "3, 5, 7",
            LoanType::Personal => "1, 3, 5",
            LoanType::Education => "5, 10, 15",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown loan type '{}'", s))
    }
}

/// Form input that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Rate,
    Years,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Principal, Field::Rate, Field::Years];

    pub fn next(self) -> Self {
        match self {
            Field::Principal => Field::Rate,
            Field::Rate => Field::Years,
            Field::Years => Field::Principal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Principal => Field::Years,
            Field::Rate => Field::Principal,
            Field::Years => Field::Rate,
        }
    }
}

/// Raw text of the three inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanInputs {
    pub principal: String,
    pub rate: String,
    pub years: String,
}

impl LoanInputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Principal => &self.principal,
            Field::Rate => &self.rate,
            Field::Years => &self.years,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Principal => &mut self.principal,
            Field::Rate => &mut self.rate,
            Field::Years => &mut self.years,
        }
    }

    pub fn to_loan_input(&self) -> LoanInput {
        LoanInput::parse(&self.principal, &self.rate, &self.years)
    }
}

pub struct App {
    pub focus: Field,
    pub inputs: LoanInputs,
    pub loan_type: LoanType,
    pub theme: ThemeKind,
    pub currency_symbol: String,
    pub summary: Option<PaymentSummary>,
    store: MemoryStore,
}

impl App {
    /// Builds the initial state, preferring values left in `store` by an
    /// earlier screen in this process over configuration defaults.
    pub fn new(config: &Config, store: MemoryStore) -> Self {
        let stored = |key: &str, fallback: &str| store.get(key).unwrap_or(fallback).to_string();

        let inputs = LoanInputs {
            principal: stored(KEY_PRINCIPAL, &config.defaults.principal),
            rate: stored(KEY_RATE, &config.defaults.rate),
            years: stored(KEY_YEARS, &config.defaults.years),
        };
        let theme = store
            .get(KEY_THEME)
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.theme);
        let loan_type = store
            .get(KEY_LOAN_TYPE)
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.loan_type);

        let mut app = Self {
            focus: Field::Principal,
            inputs,
            loan_type,
            theme,
            currency_symbol: config.currency_symbol.clone(),
            summary: None,
            store,
        };
        app.recalculate();
        app
    }

    /// Replaces the current summary from the form text and saves the text.
    pub fn recalculate(&mut self) {
        let input = self.inputs.to_loan_input();
        self.summary = match input.compute() {
            Ok(summary) => {
                debug!(
                    "Recalculated {}: monthly={:.2} total={:.2}",
                    self.loan_type, summary.monthly_payment, summary.total_payment
                );
                Some(summary)
            }
            Err(e) => {
                debug!("No result: {}", e);
                None
            }
        };

        self.store.set(KEY_PRINCIPAL, self.inputs.principal.as_str());
        self.store.set(KEY_RATE, self.inputs.rate.as_str());
        self.store.set(KEY_YEARS, self.inputs.years.as_str());
        self.store.set(KEY_LOAN_TYPE, self.loan_type.as_str());
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.store.set(KEY_THEME, self.theme.as_str());
        debug!("Theme switched to {}", self.theme);
    }

    pub fn set_loan_type(&mut self, loan_type: LoanType) {
        self.loan_type = loan_type;
        self.recalculate();
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Hands the store back so a later `App` in this process can resume from it.
    pub fn into_store(self) -> MemoryStore {
        self.store
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        edit(self.inputs.get_mut(self.focus));
        self.recalculate();
    }
}

/// Applies one key press. Returns `true` when the user asked to quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.edit_focused(|value| value.push(c));
        }
        KeyCode::Backspace => {
            app.edit_focused(|value| {
                value.pop();
            });
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char(']') | KeyCode::Right => app.set_loan_type(app.loan_type.next()),
        KeyCode::Char('[') | KeyCode::Left => app.set_loan_type(app.loan_type.prev()),
        _ => {}
    }
    false
}

fn handle_control_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => true,
        KeyCode::Char('u') => {
            app.edit_focused(String::clear);
            false
        }
        _ => false,
    }
}
