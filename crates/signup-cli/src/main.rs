mod console;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::{print_errors, prompt, ConsoleNavigator, ConsoleNotifier};
use signup_form::{
    Collaborators, DryRunRegistration, Field, FieldCompletion, HttpRegistration, Registration,
    SignUpConfig, SignUpScreen, SubmissionOutcome,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Create an account from the terminal", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: ./signup.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accept every registration instead of calling the API
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SignUpConfig::load_existing(path)?,
        None => SignUpConfig::load_default()?,
    };

    let registration: Arc<dyn Registration> = if cli.dry_run {
        Arc::new(DryRunRegistration)
    } else {
        Arc::new(
            HttpRegistration::new(&config.api).context("Failed to build the HTTP client")?,
        )
    };

    let collaborators = Collaborators::new(
        registration,
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleNavigator),
    );
    let mut screen = SignUpScreen::new(&config, collaborators);

    println!("{}", "Crie sua conta".bold());
    println!("{}", "(Enter completes a field, :back leaves)".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut field = Field::Name;
    screen.focus(field);

    loop {
        prompt(field);
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        if line.trim() == ":back" {
            screen.go_back();
            break;
        }

        screen.set_value(field, line);

        match screen.complete(field).await {
            FieldCompletion::Focused(next) => field = next,
            FieldCompletion::Submitted(Ok(SubmissionOutcome::Success)) => break,
            FieldCompletion::Submitted(Ok(SubmissionOutcome::ValidationRejected(errors))) => {
                print_errors(&errors);
                field = errors.fields().next().unwrap_or(Field::Name);
                screen.focus(field);
            }
            FieldCompletion::Submitted(Ok(SubmissionOutcome::ExternalFailure)) => {
                field = Field::Name;
                screen.focus(field);
            }
            FieldCompletion::Submitted(Err(e)) => warn!(error = %e, "submit ignored"),
        }
    }

    screen.unmount();
    Ok(())
}
