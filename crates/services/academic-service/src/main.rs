//! Academic Service - schema migrations and record reports.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use academic_service_lib::config::AcademicServiceConfig;
use academic_service_lib::{MigrateAction, ReportKind};

#[derive(Parser)]
#[command(name = "academic-service")]
#[command(author, version, about = "Academic records service", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Print a summary line for every record of a kind
    Report {
        #[arg(value_enum)]
        kind: ReportTarget,
        /// Print the records as JSON instead
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportTarget {
    Careers,
    Students,
    Courses,
    Enrollments,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AcademicServiceConfig::from_env();
    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(service = %config.service.service_name, "Starting");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            academic_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Report { kind, json } => {
            let report_kind = match kind {
                ReportTarget::Careers => ReportKind::Careers,
                ReportTarget::Students => ReportKind::Students,
                ReportTarget::Courses => ReportKind::Courses,
                ReportTarget::Enrollments => ReportKind::Enrollments,
            };
            if let Err(err) = academic_service_lib::run_report(report_kind, json).await {
                tracing::error!(code = err.code(), "Report failed");
                eprintln!("{}", err.user_message());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
