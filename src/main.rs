use clap::{Parser, Subcommand};
use patient_events::{
    config::AppConfig, models::Patient, producer::PatientEventProducer,
    publisher::KafkaEventPublisher,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publishes a single PATIENT_CREATED event.
    Send(SendArgs),
}

#[derive(Parser, Debug)]
struct SendArgs {
    /// Full name of the patient.
    #[arg(short, long)]
    name: String,
    /// Email address of the patient.
    #[arg(short, long)]
    email: String,
    /// Patient id to publish under. A fresh UUID is generated when omitted.
    #[arg(short, long)]
    id: Option<Uuid>,
    /// Directory containing app.yaml. Defaults to `configs`.
    #[arg(short, long)]
    config_dir: Option<String>,
}

#[tokio::main]
#[tracing::instrument(level = "info")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => send(args).await?,
    }

    Ok(())
}

async fn send(args: SendArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Loading application configuration...");
    let config = AppConfig::new(args.config_dir.as_deref())?;
    config.kafka.validate()?;
    tracing::debug!(brokers = %config.kafka.brokers, "Configuration loaded.");

    let publisher = KafkaEventPublisher::from_config(&config.kafka)?;
    let producer = PatientEventProducer::new(Box::new(publisher));

    let patient = Patient {
        id: Some(args.id.unwrap_or_else(Uuid::new_v4)),
        name: args.name,
        email: args.email,
    };

    producer.publish_created(&patient).await;

    // Drain the transport queue before the process exits.
    producer.shutdown().await?;

    Ok(())
}
