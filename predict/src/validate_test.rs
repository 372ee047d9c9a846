use super::*;
use crate::types::{CreditHistory, EmploymentType};

fn form(income: &str, loan: &str) -> FormState {
    FormState {
        applicant_income: income.to_owned(),
        loan_amount: loan.to_owned(),
        credit_history: CreditHistory::Good,
        employment_type: EmploymentType::Salaried,
    }
}

#[test]
fn positive_amounts_within_ratio_pass() {
    assert_eq!(validate(&form("50000", "150000")), Ok(()));
    assert_eq!(validate(&form("1", "1")), Ok(()));
    assert_eq!(validate(&form("0.5", "0.25")), Ok(()));
}

#[test]
fn ratio_exactly_at_limit_passes() {
    assert_eq!(validate(&form("1000", "100000")), Ok(()));
}

#[test]
fn ratio_above_limit_fails() {
    let err = validate(&form("1000", "200000")).expect_err("ratio 200");
    assert_eq!(err, ValidationError::RatioTooHigh);
    assert_eq!(err.to_string(), "loan-to-income ratio too high");
}

#[test]
fn negative_income_fails_positivity() {
    let err = validate(&form("-5", "1000")).expect_err("negative income");
    assert_eq!(err, ValidationError::NonPositive);
    assert_eq!(err.to_string(), "Values must be positive.");
}

#[test]
fn zero_amounts_fail_positivity() {
    assert_eq!(validate(&form("0", "1000")), Err(ValidationError::NonPositive));
    assert_eq!(validate(&form("1000", "0")), Err(ValidationError::NonPositive));
}

#[test]
fn zero_income_never_reaches_ratio_check() {
    // A huge loan over a zero income must report positivity, not ratio.
    assert_eq!(validate(&form("0", "1e12")), Err(ValidationError::NonPositive));
}

#[test]
fn blank_and_non_numeric_amounts_fail_positivity() {
    assert_eq!(validate(&form("", "1000")), Err(ValidationError::NonPositive));
    assert_eq!(validate(&form("1000", "lots")), Err(ValidationError::NonPositive));
    assert_eq!(validate(&form("NaN", "1000")), Err(ValidationError::NonPositive));
    assert_eq!(validate(&form("inf", "1000")), Err(ValidationError::NonPositive));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(validate(&form(" 50000 ", "\t1000")), Ok(()));
}

#[test]
fn select_fields_do_not_affect_validation() {
    let mut f = form("50000", "150000");
    f.credit_history = CreditHistory::Bad;
    f.employment_type = EmploymentType::Unemployed;
    assert_eq!(validate(&f), Ok(()));
}
