use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use docdesk::api::{FailureKind, RawFailure, classify};
use docdesk::executor::{ApiRequest, Executor, ReqwestTransport};
use docdesk::interceptor::Interceptors;
use docdesk::notify::TerminalNotifier;
use docdesk::session::{FileSessionStore, SessionFlag, SessionStore};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{CallMethod, Commands, SessionCommands};
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docdesk")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("docdesk.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Narrow the log level to the configured one unless RUST_LOG overrides it.
fn apply_log_level(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    if let Some(level) = config.log_level.as_deref() {
        match level.parse::<log::LevelFilter>() {
            Ok(filter) => log::set_max_level(filter),
            Err(_) => log::warn!("Ignoring unknown log level '{}'", level),
        }
    }
}

fn open_session(config: &Config) -> Result<Arc<FileSessionStore>> {
    let store = FileSessionStore::open(&config.session.file)
        .context(format!("Failed to open session store at {}", config.session.file.display()))?;
    Ok(Arc::new(store))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Call {
            path,
            method,
            query,
        } => handle_call_command(path, *method, query, config, cli.is_verbose()).await,
        Commands::Classify { json } => handle_classify_command(json),
        Commands::Session { command } => handle_session_command(command, config),
    }
}

async fn handle_call_command(
    path: &str,
    method: CallMethod,
    query: &[(String, String)],
    config: &Config,
    verbose: bool,
) -> Result<()> {
    info!("Calling {:?} {}", method, path);

    let session = open_session(config)?;
    let notifier = Arc::new(TerminalNotifier::new(config.notifications.color));
    let hooks = Interceptors::new(session, notifier, config.routes.policy());
    let transport = ReqwestTransport::new(&config.api.base_url, config.api.timeout())?;
    let executor = Executor::new(hooks, transport);

    if verbose {
        println!("{} {}", "URL:".cyan(), executor.transport().url_for(path));
    }

    let mut request = ApiRequest::new(method.as_reqwest(), path);
    request.query = query.to_vec();

    let envelope = executor.execute_json(&request).await.context("Call failed")?;

    if verbose {
        println!("{} {} {}", "Status:".cyan(), envelope.code, envelope.status);
    }
    println!("{}", serde_json::to_string_pretty(&envelope.data)?);
    Ok(())
}

fn handle_classify_command(json: &str) -> Result<()> {
    let failure: RawFailure = serde_json::from_str(json).context("Failed to parse failure JSON")?;
    let kind = classify(&failure);
    info!("Classified {} as {}", failure.status, kind.label());

    println!("{} {}", "Kind:".cyan(), kind.label());
    match &kind {
        FailureKind::HttpError { status_code, body } => {
            println!("{} {}", "Status code:".cyan(), status_code);
            println!("{} {}", "Status:".cyan(), body.status);
            println!("{} {}", "Message:".cyan(), body.message);
        }
        FailureKind::TransportError { message } | FailureKind::ParsingError { message } => {
            println!("{} {}", "Message:".cyan(), message);
        }
        FailureKind::Unknown => {}
    }
    Ok(())
}

fn handle_session_command(command: &SessionCommands, config: &Config) -> Result<()> {
    info!("Handling session command: {:?}", command);
    let session = open_session(config)?;

    match command {
        SessionCommands::Status => {}
        SessionCommands::Clear => session.clear()?,
        SessionCommands::Invalidate => session.invalidate()?,
    }

    let flag = session.flag()?;
    let label = match flag {
        SessionFlag::LoggedIn => "true".green(),
        SessionFlag::LoggedOut => "false".red(),
        SessionFlag::Absent => "absent".yellow(),
    };
    println!("{} {}", "Logged in:".cyan(), label);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
