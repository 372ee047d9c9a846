//! Shared loan-prediction model used by the browser client and the CLI.
//!
//! This crate owns the request/response wire types, the local validation
//! gate, and the form controller that drives one submission at a time
//! through a [`PredictTransport`]. It performs no I/O itself; each surface
//! plugs in its own HTTP stack.
//!
//! DESIGN
//! ======
//! The form's visible state is a single [`ViewState`] tag rather than
//! separate result, error, and loading flags, so a stale result can never
//! render beside a validation error.

pub mod controller;
pub mod endpoint;
pub mod transport;
pub mod types;
pub mod validate;
pub mod view;

pub use controller::{PredictionForm, SubmitError, Submission, Ticket};
pub use endpoint::{DEFAULT_API_URL, predict_url, resolve_base_url};
pub use transport::{PredictTransport, TransportError};
pub use types::{CreditHistory, Decision, EmploymentType, FormEdit, FormState, PredictionResponse, UnknownOption};
pub use validate::{MAX_LOAN_TO_INCOME_RATIO, ValidationError, validate};
pub use view::{CONNECTIVITY_MESSAGE, Confidence, DecisionView, ViewState};
