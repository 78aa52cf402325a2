//! axsid - Semantic Identification & Query Engine
//!
//! Main entry point for the axsid CLI.

mod cli;
mod cmd_config;
mod cmd_engine;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use axsid_config::{ConfigLoader, LoggingConfig};

use cli::{Cli, Commands};

/// Initialize tracing with console and optional file output.
///
/// Console logs go to stderr so stdout carries only command output.
/// `RUST_LOG` overrides the configured level.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match &logging.dir {
        Some(dir) => {
            let dir = ConfigLoader::expand_path(&dir.to_string_lossy());
            std::fs::create_dir_all(&dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("axsid")
                .filename_suffix("log")
                .max_log_files(14)
                .build(&dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the writer alive for the program duration.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = logging
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!logging.json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::ValidateConfig => cmd_config::validate(&cli.config, &config),
        Commands::Sid {
            ref frame,
            ref path,
            ref role,
            ref label,
            ref description,
        } => cmd_engine::sid(frame, path, role, label, description),
        Commands::Tools { ref style } => {
            let engine = cmd_engine::build_engine(&cli, &config)?;
            cmd_engine::tools(engine, style)
        }
        Commands::Snapshot {
            scope,
            ref within,
            ref fields,
            max_nodes,
            ref cursor,
        } => {
            let engine = cmd_engine::build_engine(&cli, &config)?;
            let mut request = axsid_protocols::SnapshotRequest::new(scope);
            request.within_sid = within.clone();
            request.fields = (!fields.is_empty()).then(|| fields.clone());
            request.max_nodes = max_nodes;
            request.cursor = cursor.clone();
            cmd_engine::snapshot(engine, request).await
        }
        Commands::Query {
            ref role,
            ref label,
            ref text,
            ref attributes,
            ref within,
            rank_by,
            multiple,
            max,
            explain,
        } => {
            let engine = cmd_engine::build_engine(&cli, &config)?;
            let mut request = axsid_protocols::QueryRequest::default();
            request.predicates.role = role.clone();
            request.predicates.label = label.clone();
            request.predicates.text = text.clone();
            request.predicates.attributes = attributes.iter().cloned().collect();
            request.within_sid = within.clone();
            request.rank_by = rank_by;
            request.multiple = multiple;
            request.max = max;
            request.explain = explain;
            cmd_engine::query(engine, request).await
        }
    }
}
