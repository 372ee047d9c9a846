mod render;
mod transport;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use predict::{
    CONNECTIVITY_MESSAGE, CreditHistory, DEFAULT_API_URL, EmploymentType, FormEdit, PredictionForm,
    PredictionResponse, SubmitError, TransportError, ValidationError, ViewState, resolve_base_url,
};
use tracing_subscriber::EnvFilter;

use crate::transport::HttpTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("{msg} ({0})", msg = CONNECTIVITY_MESSAGE)]
    Connectivity(TransportError),
    #[error("{0}")]
    Service(String),
    #[error("a prediction request is already in flight")]
    Busy,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<SubmitError> for CliError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(err) => Self::Invalid(err),
            SubmitError::Busy => Self::Busy,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "loan-predict-cli", about = "Loan approval prediction client")]
struct Cli {
    #[arg(long, env = "PREDICT_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one loan application and print the verdict.
    Predict(PredictArgs),
}

#[derive(Args, Debug)]
struct PredictArgs {
    #[arg(long, allow_hyphen_values = true)]
    income: String,

    #[arg(long, allow_hyphen_values = true)]
    loan: String,

    #[arg(long, default_value_t = CreditHistory::Good)]
    credit_history: CreditHistory,

    #[arg(long, default_value_t = EmploymentType::Salaried)]
    employment: EmploymentType,

    #[arg(long, default_value_t = false, help = "Print the raw service response as JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = resolve_base_url(Some(&cli.base_url));

    let result = match cli.command {
        Command::Predict(args) => run_predict(&base_url, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_predict(base_url: &str, args: PredictArgs) -> Result<(), CliError> {
    let transport = HttpTransport::new(base_url);
    tracing::debug!(url = transport.url(), "submitting application");

    let mut form = PredictionForm::new();
    form.update(FormEdit::ApplicantIncome(args.income));
    form.update(FormEdit::LoanAmount(args.loan));
    form.update(FormEdit::CreditHistory(args.credit_history));
    form.update(FormEdit::EmploymentType(args.employment));

    let view = form.submit(&transport).await?;

    if args.json {
        if let Some(resp) = view.result() {
            println!("{}", serde_json::to_string_pretty(resp)?);
        }
    } else if view.decision().is_some() {
        println!("{}", render::render(view));
    }

    match view {
        ViewState::Failed(err) => Err(CliError::Connectivity(err.clone())),
        ViewState::Result(PredictionResponse::Error { error }) => Err(CliError::Service(error.clone())),
        _ => Ok(()),
    }
}
