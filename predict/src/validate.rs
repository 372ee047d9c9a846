//! Local sanity gate run before any request is sent.

use crate::types::FormState;

/// Largest loan-to-income ratio accepted before contacting the service.
pub const MAX_LOAN_TO_INCOME_RATIO: f64 = 100.0;

/// Why a form was refused locally. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An amount is zero, negative, or not a finite number.
    #[error("Values must be positive.")]
    NonPositive,
    /// Loan exceeds [`MAX_LOAN_TO_INCOME_RATIO`] times the income.
    #[error("loan-to-income ratio too high")]
    RatioTooHigh,
}

/// Check the two amounts of a form.
///
/// The positivity check runs first so the ratio is only ever computed with
/// a finite, positive divisor.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    let income = parse_amount(&form.applicant_income).ok_or(ValidationError::NonPositive)?;
    let loan = parse_amount(&form.loan_amount).ok_or(ValidationError::NonPositive)?;

    if loan / income > MAX_LOAN_TO_INCOME_RATIO {
        return Err(ValidationError::RatioTooHigh);
    }
    Ok(())
}

/// Parse a positive, finite amount. Blank or non-numeric text is `None`.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
