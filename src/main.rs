use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use pr_reminder::config::{load_config, validate_config};
use pr_reminder::credentials::{github_token_from_env, telegram_credentials_from_env};
use pr_reminder::github::{create_client, GitHubSource};
use pr_reminder::notify::{NotificationChannel, StdoutChannel, TelegramChannel};
use pr_reminder::runner::{ReminderRunner, RunContext};
use pr_reminder::ReminderError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a reminder for every configured repository (default if no subcommand)
    Run,
    /// Print every reminder to stdout instead of sending it
    Preview,
}

#[derive(Parser, Debug)]
#[command(name = "pr-reminder")]
#[command(about = "Remind a chat about open pull requests", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ./config.yaml, then ~/.config/pr-reminder/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Log to stdout; RUST_LOG overrides the level picked from --verbose.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "pr_reminder=debug" } else { "pr_reminder=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Log a fatal error and exit with `code`
fn fail(err: ReminderError, code: i32) -> ! {
    debug_assert!(err.is_fatal());
    error!("{}", err);
    std::process::exit(code);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);
    let start_time = Instant::now();

    // Before logging so a RUST_LOG in .env applies
    let dotenv_path = dotenvy::dotenv().ok();
    init_logging(cli.verbose);

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => fail(ReminderError::Config(format!("{:#}", e)), EXIT_CONFIG),
    };

    if let Err(errors) = validate_config(&config) {
        fail(ReminderError::Config(errors.join("; ")), EXIT_CONFIG);
    }

    if config.repos.is_empty() {
        warn!("No repositories configured. Add them under 'repos:' in the config file");
    }

    let token = match github_token_from_env() {
        Ok(t) => t,
        Err(e) => fail(ReminderError::Credentials(e.to_string()), EXIT_AUTH),
    };

    let client = match create_client(&token) {
        Ok(c) => c,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let ctx = match RunContext::new(config, Utc::now()) {
        Ok(ctx) => ctx,
        Err(e) => fail(e, EXIT_CONFIG),
    };
    let source = GitHubSource::new(client);
    let runner = ReminderRunner::new(&source, &ctx);

    let summary = match command {
        Commands::Run => {
            let channel = match telegram_credentials_from_env() {
                Ok(Some(creds)) => match TelegramChannel::from_credentials(creds) {
                    Ok(channel) => Some(channel),
                    Err(e) => fail(ReminderError::Config(e.to_string()), EXIT_CONFIG),
                },
                Ok(None) => None,
                Err(e) => fail(ReminderError::Config(e.to_string()), EXIT_CONFIG),
            };
            runner
                .run(channel.as_ref().map(|c| c as &dyn NotificationChannel))
                .await
        }
        Commands::Preview => runner.run(Some(&StdoutChannel)).await,
    };

    info!(
        "Done in {:?}: {} sent, {} failed, {} skipped",
        start_time.elapsed(),
        summary.sent,
        summary.failed,
        summary.skipped
    );

    std::process::exit(EXIT_SUCCESS);
}
