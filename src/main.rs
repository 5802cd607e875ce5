use clap::{Parser, Subcommand, ValueEnum};
use flow_validator::field::{ErrorList, Path, ValidationError};
use flow_validator::syntax::{CompiledRegexCheck, parse_hash};
use flow_validator::validate::types::validate_type_map;
use flow_validator::{Admission, AdmissionError, Flow, Operation, Result, Validator};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flow-validator")]
#[command(about = "Validate log-forwarding flow resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a flow file as the admission webhook would.
    Validate {
        #[arg(long)]
        flow: std::path::PathBuf,

        #[arg(long, value_enum, default_value_t = Operation::Create)]
        operation: Operation,

        /// Compile regex-shaped fields with the `regex` crate.
        #[arg(long)]
        strict_regex: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode and check a parser `types` hash string.
    Types {
        hash: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ErrorView {
    path: String,
    kind: &'static str,
    value: serde_json::Value,
    detail: String,
}

impl From<&ValidationError> for ErrorView {
    fn from(e: &ValidationError) -> Self {
        Self {
            path: e.path.to_string(),
            kind: e.kind.as_str(),
            value: e.value.clone(),
            detail: e.detail.clone(),
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate {
            flow,
            operation,
            strict_regex,
            format,
        } => {
            let resource = Flow::from_file(&flow)?;
            let validator = if strict_regex {
                Validator::with_regex_check(CompiledRegexCheck)
            } else {
                Validator::new()
            };

            match Admission::new(validator).review(operation, &resource) {
                Ok(()) => {
                    println!("{}: admitted", flow.display());
                    Ok(ExitCode::SUCCESS)
                }
                Err(AdmissionError::Rejected { errors, .. }) => {
                    print_errors(&errors, format)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Types { hash, format } => {
            let path = Path::new("types");
            let mut errs = ErrorList::new();
            match parse_hash(&hash) {
                Ok(types) => {
                    for (name, token) in &types {
                        println!("{} => {}", name, token);
                    }
                    validate_type_map(&path, &types, &mut errs);
                }
                Err(e) => errs.push(ValidationError::invalid(path, hash.as_str(), e.to_string())),
            }

            if errs.is_empty() {
                return Ok(ExitCode::SUCCESS);
            }
            print_errors(&errs, format)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_errors(errs: &ErrorList, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for e in errs {
                println!("{}", e);
            }
        }
        OutputFormat::Json => {
            let views: Vec<ErrorView> = errs.iter().map(ErrorView::from).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
    }
    Ok(())
}
