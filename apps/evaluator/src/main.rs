use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use evaluator::config::Config;
use evaluator::errors::AppError;
use evaluator::models::UserInfo;
use evaluator::pipeline::evaluate_file;
use evaluator::report::{build_report, render_text, write_report};
use evaluator::scoring::{DEFAULT_KEYWORDS, ROLE_KEYWORDS};

const EXIT_VALIDATION: u8 = 1;
const EXIT_RETRY_WITH_OTHER_FILE: u8 = 2;
const EXIT_FAILURE: u8 = 3;
const EXIT_CONFIG: u8 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a resume file against a target job role
    Analyze {
        /// Resume file (.pdf, .docx, or .txt)
        file: PathBuf,

        /// Your full name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// Target job role, e.g. "Software Engineer"
        #[arg(long)]
        role: String,

        /// Declared media type; inferred from the file extension when omitted
        #[arg(long)]
        media_type: Option<String>,

        /// Directory for the JSON report (overrides REPORT_DIR)
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Skip writing the JSON report
        #[arg(long)]
        no_report: bool,

        /// Print the analysis as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the job roles with tailored keyword lists
    Roles,
}

#[derive(Parser, Debug)]
#[command(name = "evaluator")]
#[command(about = "Heuristic resume scoring with role-specific feedback", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume evaluator v{}", env!("CARGO_PKG_VERSION"));

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.code(), "{err}");
            eprintln!("Error: {err}");
            if err.is_retryable() {
                eprintln!("Please choose a different file and try again.");
            }
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<(), AppError> {
    match command {
        Commands::Analyze {
            file,
            name,
            email,
            role,
            media_type,
            report_dir,
            no_report,
            json,
        } => {
            let user_info = UserInfo::new(name, email, role);
            let evaluation =
                evaluate_file(user_info, &file, media_type, config.max_upload_bytes)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&evaluation.analysis)?);
            } else {
                print!(
                    "{}",
                    render_text(&evaluation.analysis, &evaluation.submission.user_info.job_role)
                );
            }

            if !no_report {
                let report = build_report(&evaluation.submission, &evaluation.analysis, Utc::now());
                let dir = report_dir.unwrap_or_else(|| config.report_dir.clone());
                let path = write_report(&dir, &report)?;
                eprintln!("Report saved to {}", path.display());
            }
            Ok(())
        }
        Commands::Roles => {
            for entry in ROLE_KEYWORDS {
                println!("{}: {}", entry.role, entry.keywords.join(", "));
            }
            println!("(any other role): {}", DEFAULT_KEYWORDS.join(", "));
            Ok(())
        }
    }
}

fn exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Validation(_) => EXIT_VALIDATION,
        e if e.is_retryable() => EXIT_RETRY_WITH_OTHER_FILE,
        _ => EXIT_FAILURE,
    }
}
