//! Fixed-rate amortization.
//!
//! Everything here is a pure function of its arguments. Rates are annual
//! percentages (`6.5` means 6.5%), terms are years, and all arithmetic is plain
//! `f64` with no rounding to cents.

use serde::Serialize;

use crate::error::{LoanError, LoanField};

/// The three numbers a payment summary is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

/// Derived payment figures for one [`LoanInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub principal_amount: f64,
    pub interest_percentage: f64,
    pub principal_percentage: f64,
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Builds an input from raw form text. Unparseable fields become NaN and
    /// are rejected later by [`compute`].
    pub fn parse(principal: &str, annual_rate_percent: &str, term_years: &str) -> Self {
        Self::new(
            parse_number(principal),
            parse_number(annual_rate_percent),
            parse_number(term_years),
        )
    }

    pub fn compute(&self) -> Result<PaymentSummary, LoanError> {
        compute(self.principal, self.annual_rate_percent, self.term_years)
    }
}

impl PaymentSummary {
    /// Number of monthly payments the summary covers. May be fractional.
    pub fn months(&self) -> f64 {
        if self.monthly_payment > 0.0 {
            self.total_payment / self.monthly_payment
        } else {
            0.0
        }
    }
}

/// Parses one form field. Empty, malformed or non-finite text yields NaN
/// rather than zero.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(f64::NAN)
}

/// Computes the level monthly payment and its totals.
///
/// Rejects a principal or term that is not strictly positive, and a negative
/// rate. A rate of exactly zero takes the straight-line path `P / n`. The
/// payment count `n = term_years * 12` is used as-is, so fractional years give
/// a fractional `n`.
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<PaymentSummary, LoanError> {
    if principal.is_nan() || principal <= 0.0 {
        return Err(LoanError::InvalidLoanInput {
            field: LoanField::Principal,
            reason: "must be greater than zero",
        });
    }
    if annual_rate_percent.is_nan() || annual_rate_percent < 0.0 {
        return Err(LoanError::InvalidLoanInput {
            field: LoanField::Rate,
            reason: "must not be negative",
        });
    }
    if term_years.is_nan() || term_years <= 0.0 {
        return Err(LoanError::InvalidLoanInput {
            field: LoanField::Term,
            reason: "must be greater than zero",
        });
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let num_payments = term_years * 12.0;

    // P * r / (1 - (1 + r)^-n) is the annuity formula with the power inverted,
    // so a long high-rate loan tends to P * r instead of overflowing.
    let decay = (1.0 + monthly_rate).powf(-num_payments);
    let monthly_payment = if monthly_rate == 0.0 || decay == 1.0 {
        principal / num_payments
    } else {
        principal * monthly_rate / (1.0 - decay)
    };

    let total_payment = monthly_payment * num_payments;
    let total_interest = total_payment - principal;

    if !monthly_payment.is_finite() || !total_payment.is_finite() {
        return Err(LoanError::InvalidLoanInput {
            field: LoanField::Combination,
            reason: "produce a payment too large to represent",
        });
    }

    Ok(PaymentSummary {
        monthly_payment,
        total_payment,
        total_interest,
        principal_amount: principal,
        interest_percentage: total_interest / total_payment * 100.0,
        principal_percentage: principal / total_payment * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual} (tolerance {tol})"
        );
    }

    #[test]
    fn test_eight_percent_twenty_years() {
        let summary = compute(1_000_000.0, 8.0, 20.0).unwrap();

        assert_close(summary.monthly_payment, 8364.40, 0.01);
        assert_close(summary.total_payment, 2_007_456.17, 0.01);
        assert_close(summary.total_interest, 1_007_456.17, 0.01);
        assert_eq!(summary.principal_amount, 1_000_000.0);
        assert_close(summary.months(), 240.0, 1e-9);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let summary = compute(500_000.0, 0.0, 10.0).unwrap();

        assert_eq!(summary.monthly_payment, 500_000.0 / 120.0);
        assert_close(summary.monthly_payment, 4166.67, 0.005);
        assert_close(summary.total_interest, 0.0, 1e-6);
        assert_close(summary.principal_percentage, 100.0, 1e-9);
        assert_close(summary.interest_percentage, 0.0, 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let cases = [
            (0.0, 5.0, 10.0, LoanField::Principal),
            (-100.0, 5.0, 10.0, LoanField::Principal),
            (1000.0, -1.0, 10.0, LoanField::Rate),
            (1000.0, 5.0, 0.0, LoanField::Term),
            (1000.0, 5.0, -5.0, LoanField::Term),
            (f64::NAN, 5.0, 10.0, LoanField::Principal),
            (1000.0, f64::NAN, 10.0, LoanField::Rate),
            (1000.0, 5.0, f64::NAN, LoanField::Term),
        ];

        for (principal, rate, years, field) in cases {
            let err = compute(principal, rate, years).unwrap_err();
            assert_eq!(err.field(), field, "inputs ({principal}, {rate}, {years})");
        }
    }

    #[test]
    fn test_parse_number_rejects_blank_and_garbage() {
        assert_eq!(parse_number(" 6.5 "), 6.5);
        assert!(parse_number("").is_nan());
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("inf").is_nan());
    }

    #[test]
    fn test_parsed_input_does_not_coerce_empty_to_zero() {
        let input = LoanInput::parse("250000", "", "30");
        assert!(input.annual_rate_percent.is_nan());

        let err = input.compute().unwrap_err();
        assert_eq!(err.field(), LoanField::Rate);
    }

    #[test]
    fn test_fractional_term_is_not_rounded() {
        let summary = compute(100_000.0, 6.0, 7.25).unwrap();
        assert_close(summary.months(), 87.0, 1e-9);

        let whole = compute(100_000.0, 6.0, 7.0).unwrap();
        assert!(summary.monthly_payment < whole.monthly_payment);
    }

    #[test]
    fn test_vanishing_rate_falls_back_to_straight_line() {
        let summary = compute(120_000.0, 1e-15, 10.0).unwrap();
        assert_eq!(summary.monthly_payment, 1_000.0);
        assert!(summary.interest_percentage.is_finite());
    }

    #[test]
    fn test_extreme_rate_and_term_stay_finite() {
        let summary = compute(100_000.0, 1000.0, 100.0).unwrap();
        let monthly_rate = 1000.0 / 12.0 / 100.0;

        assert_close(summary.monthly_payment, 100_000.0 * monthly_rate, 1e-6);
        assert!(summary.total_payment.is_finite());
        assert!(summary.total_interest > 0.0);
        assert_close(summary.interest_percentage + summary.principal_percentage, 100.0, 1e-9);
    }

    #[test]
    fn test_unrepresentable_payment_is_rejected() {
        let err = compute(1e10, 5.0, 1e-300).unwrap_err();
        assert_eq!(err.field(), LoanField::Combination);

        let err = compute(1e10, 0.0, 1e-300).unwrap_err();
        assert_eq!(err.field(), LoanField::Combination);
    }

    #[test]
    fn test_same_inputs_same_bits() {
        let a = compute(321_000.0, 6.5, 30.0).unwrap();
        let b = compute(321_000.0, 6.5, 30.0).unwrap();

        assert_eq!(a.monthly_payment.to_bits(), b.monthly_payment.to_bits());
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_message_names_field() {
        let err = compute(0.0, 5.0, 10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid loan input: principal must be greater than zero"
        );
    }
}
