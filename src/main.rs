//! CareConnect CLI
//!
//! Terminal client for the appointments backend:
//! - List appointments
//! - Create, reschedule and delete appointments
//! - Generate a config file

use anyhow::Context;
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use careconnect::appointments::datetime;
use careconnect::{
    logging, AppointmentController, AppointmentError, AppointmentId, AppointmentStore,
    Config, ConfigSearch, HttpBackend,
};

#[derive(Parser)]
#[command(name = "careconnect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage CareConnect appointments from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config and CARECONNECT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all appointments
    List,

    /// Book a new appointment
    Create {
        /// Appointment details (reason)
        details: String,
        /// Appointment time (default: now). Supports "now" and ISO 8601
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Reschedule an existing appointment
    Update {
        /// Appointment id
        id: AppointmentId,
        /// New details (default: keep current)
        #[arg(long)]
        details: Option<String>,
        /// New time (default: keep current)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an appointment
    Delete {
        /// Appointment id
        id: AppointmentId,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = careconnect::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => print!("{content}"),
        }
        return Ok(());
    }

    let search = match &cli.config {
        Some(path) => ConfigSearch {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::search_default(),
    };
    let mut config = search.config.clone();
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = url;
    }

    logging::init(&config.logging);
    search.report();
    tracing::debug!(base_url = %config.api.base_url, "CareConnect v{}", env!("CARGO_PKG_VERSION"));

    let backend = HttpBackend::new(&config.api.base_url, config.api.timeout())?;
    let mut controller = AppointmentController::new(backend);

    let outcome = run(&cli, &mut controller).await;

    let state = controller.state();
    if let Err(e) = outcome {
        eprintln!("{}", state.error.clone().unwrap_or_else(|| e.to_string()));
        std::process::exit(1);
    }
    if let Some(message) = &state.success {
        eprintln!("{message}");
    }
    print_store(&state.store, cli.format)?;
    Ok(())
}

async fn run(
    cli: &Cli,
    controller: &mut AppointmentController<HttpBackend>,
) -> Result<(), AppointmentError> {
    match &cli.command {
        Commands::List => {
            controller.load_all().await?;
        }

        Commands::Create { details, date } => {
            controller.set_date(parse_date(date.as_deref())?);
            controller.set_details(details.clone());
            controller.load_all().await?;
            controller.create().await?;
        }

        Commands::Update { id, details, date } => {
            controller.load_all().await?;
            controller.select_for_edit(*id);
            if !controller.state().draft.is_editing() {
                return Err(AppointmentError::NotFound(*id));
            }
            if let Some(details) = details {
                controller.set_details(details.clone());
            }
            if date.is_some() {
                controller.set_date(parse_date(date.as_deref())?);
            }
            controller.update().await?;
        }

        Commands::Delete { id } => {
            controller.load_all().await?;
            controller.delete(*id).await?;
        }

        Commands::Config { .. } => {}
    }
    Ok(())
}

fn parse_date(input: Option<&str>) -> Result<DateTime<Utc>, AppointmentError> {
    match input {
        None | Some("now") => Ok(Utc::now()),
        Some(s) => datetime::parse(s)
            .ok_or_else(|| AppointmentError::Validation(format!("Invalid date format: {s}"))),
    }
}

fn print_store(store: &AppointmentStore, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&store.to_vec())?);
        }
        OutputFormat::Table => {
            if store.is_empty() {
                println!("No appointments");
                return Ok(());
            }
            println!("{:>6}  {:<17}  {:<12}  REASON", "ID", "DATE", "STATUS");
            for appointment in store.iter() {
                let local = appointment.appointment_date.with_timezone(&Local);
                println!(
                    "{:>6}  {:<17}  {:<12}  {}",
                    appointment.id,
                    local.format("%Y-%m-%d %H:%M"),
                    appointment.status,
                    appointment.reason
                );
            }
        }
    }
    Ok(())
}
