//! Wire types for the `/predict` exchange.
//!
//! The request body is the form itself: field names and enum strings are
//! sent verbatim, and the amounts stay strings so the service sees exactly
//! what the applicant typed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// FORM
// =============================================================================

/// Applicant's credit history as offered by the form's select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditHistory {
    #[default]
    Good,
    Bad,
}

impl CreditHistory {
    pub const ALL: [Self; 2] = [Self::Good, Self::Bad];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }

    /// Human label for the option.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Bad => "Bad",
        }
    }
}

/// Applicant's employment type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    Salaried,
    SelfEmployed,
    Unemployed,
}

impl EmploymentType {
    pub const ALL: [Self; 3] = [Self::Salaried, Self::SelfEmployed, Self::Unemployed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Salaried => "salaried",
            Self::SelfEmployed => "self-employed",
            Self::Unemployed => "unemployed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::SelfEmployed => "Self-employed",
            Self::Unemployed => "Unemployed",
        }
    }
}

/// Error for a select value that is not one of the known options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

impl FromStr for CreditHistory {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption { field: "credit_history", value: s.to_owned() })
    }
}

impl FromStr for EmploymentType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownOption { field: "employment_type", value: s.to_owned() })
    }
}

impl fmt::Display for CreditHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the applicant has entered. Also the `/predict` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub applicant_income: String,
    pub loan_amount: String,
    pub credit_history: CreditHistory,
    pub employment_type: EmploymentType,
}

impl FormState {
    /// Replace one field. Edits are never validated on their own.
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::ApplicantIncome(value) => self.applicant_income = value,
            FormEdit::LoanAmount(value) => self.loan_amount = value,
            FormEdit::CreditHistory(value) => self.credit_history = value,
            FormEdit::EmploymentType(value) => self.employment_type = value,
        }
    }
}

/// A single field edit coming from an input or select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEdit {
    ApplicantIncome(String),
    LoanAmount(String),
    CreditHistory(CreditHistory),
    EmploymentType(EmploymentType),
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Verdict returned by the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
    /// Returned by the service's ratio filter for applications it flags
    /// for manual review instead of scoring.
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl Decision {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::HighRisk => "High Risk",
        }
    }

    #[must_use]
    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `/predict` response.
///
/// The service answers with either a verdict or an application-level error,
/// and uses the same shapes for non-2xx statuses. A body carrying `error`
/// is treated as the error shape even when other fields are present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Error {
        error: String,
    },
    Decision {
        status: Decision,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confidence: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl PredictionResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body is not JSON or matches neither
    /// response shape.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Server-reported error message, if this is the error shape.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(error),
            Self::Decision { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
