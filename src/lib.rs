//! Amortized loan payment calculator.
//!
//! The [`calculator`] module holds the pure payment formula. Everything else
//! is the terminal front end around it.

pub mod app;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod store;
pub mod theme;
pub mod ui;

pub use calculator::{compute, parse_number, LoanInput, PaymentSummary};
pub use error::{LoanError, LoanField};
