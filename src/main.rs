//! Interview Assist - structured interview answers from a hosted model.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

use interview_assist::answer::AnswerKind;
use interview_assist::client::{AskClient, DEFAULT_SERVER_URL};
use interview_assist::config::ConfigLoader;
use interview_assist::display;
use interview_assist::server::{AskServer, ServerError};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Dsa,
    Sql,
    Tech,
    Behavioral,
}

impl From<KindArg> for AnswerKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Dsa => AnswerKind::Dsa,
            KindArg::Sql => AnswerKind::Sql,
            KindArg::Tech => AnswerKind::Tech,
            KindArg::Behavioral => AnswerKind::Behavioral,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "interview-assist",
    about = "Structured interview answers from Gemini",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server.
    ///
    /// The Gemini API key is read from the process environment, by default
    /// from GEMINI_API_KEY (see `api_key_env` in the [ai] config section).
    /// Export it before starting; .env files are not loaded.
    Serve {
        /// Config file (defaults to the standard search paths).
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host address to bind to.
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides PORT and the config file).
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Ask a running server a question and print the answer.
    Ask {
        /// The interview question.
        question: String,
        /// Answer type.
        #[arg(short = 't', long = "type", value_enum, default_value_t = KindArg::Behavioral)]
        kind: KindArg,
        /// Server base URL.
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: Url,
        /// Print the raw JSON payload instead of formatted panels.
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), ServerError> {
    let loader = config_path.map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    let mut config = loader.load_with_env()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let server = AskServer::from_config(&config)?;

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C");
        }
        shutdown.cancel();
    });

    server.run(cancel).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { config, host, port } => match serve(config, host, port).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "Server failed");
                ExitCode::FAILURE
            }
        },
        Commands::Ask {
            question,
            kind,
            server,
            json,
        } => {
            let result = match AskClient::new(&server) {
                Ok(client) => client.ask(&question, kind.into()).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(answer) if json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&answer).unwrap_or_else(|_| answer.to_string())
                    );
                    ExitCode::SUCCESS
                }
                Ok(answer) => {
                    display::print_answer(&answer);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    display::print_error(&e.to_string());
                    ExitCode::FAILURE
                }
            }
        }
    }
}
