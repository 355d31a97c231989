use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scout_report::api::{build_router, cors_layer, state::AppState};
use scout_report::config::{parse_roles, AppConfig};
use scout_report::models::{Dataset, Role};
use scout_report::registry::TagRegistry;
use scout_report::storage::{load_dataset, JsonlWriter};
use scout_report::{expand_inputs, ScoutingReport};

#[derive(Parser)]
#[command(name = "scout-report")]
#[command(about = "Scouting reports from competitive match records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./scout.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more match record files
    Report {
        /// CSV/JSONL files or glob patterns (default: data_file from config)
        #[arg(long = "input", short)]
        inputs: Vec<String>,

        /// Only check these roles (comma-separated, e.g. "TOP,MID")
        #[arg(long)]
        roles: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Champion tags file (replaces the built-in table)
        #[arg(long)]
        tags: Option<PathBuf>,
    },

    /// Serve analyses for one dataset over HTTP
    Serve {
        /// Match record file (default: data_file from config)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// Champion tags file (replaces the built-in table)
        #[arg(long)]
        tags: Option<PathBuf>,
    },

    /// List champion tags
    Tags {
        /// Champion tags file (replaces the built-in table)
        #[arg(long)]
        tags: Option<PathBuf>,
    },

    /// Rewrite a match record file as JSONL
    Convert {
        #[arg(long, short)]
        input: PathBuf,

        #[arg(long, short)]
        output: PathBuf,
    },
}

fn load_registry(config: &AppConfig, override_path: Option<PathBuf>) -> Result<TagRegistry> {
    let registry = match override_path {
        Some(path) => TagRegistry::from_file(&path)?,
        None => config.tag_registry()?,
    };
    Ok(registry)
}

fn resolve_roles(config: &AppConfig, cli_roles: Option<&str>) -> Result<Vec<Role>> {
    let roles = match cli_roles {
        Some(list) => parse_roles(list.split(','))?,
        None => config.role_filter()?,
    };
    Ok(roles)
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    init_tracing(&level, cli.json_logs);

    tracing::info!("Starting scout-report v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Report {
            inputs,
            roles,
            format,
            tags,
        } => {
            let paths = if inputs.is_empty() {
                vec![config.data_file.clone()]
            } else {
                expand_inputs(inputs.as_slice())?
            };
            if paths.is_empty() {
                bail!("No input files to analyze");
            }

            let registry = Arc::new(load_registry(&config, tags)?);
            let roles = Arc::new(resolve_roles(&config, roles.as_deref())?);

            // Datasets are independent; analyze each on its own blocking thread.
            let handles: Vec<_> = paths
                .iter()
                .cloned()
                .map(|path| {
                    let registry = Arc::clone(&registry);
                    let roles = Arc::clone(&roles);
                    tokio::task::spawn_blocking(move || {
                        let dataset = load_dataset(&path)?;
                        Ok::<_, scout_report::storage::StorageError>(ScoutingReport::build(
                            &dataset,
                            registry.as_ref(),
                            Some(roles.as_slice()),
                        ))
                    })
                })
                .collect();

            let mut reports = Vec::with_capacity(handles.len());
            for (path, handle) in paths.iter().zip(handles) {
                let report = handle
                    .await?
                    .with_context(|| format!("Failed to analyze {}", path.display()))?;
                reports.push((path.clone(), report));
            }

            print_reports(&reports, format)?;
        }
        Commands::Serve {
            input,
            host,
            port,
            tags,
        } => {
            let path = input.unwrap_or_else(|| config.data_file.clone());
            let dataset = load_dataset(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let registry = load_registry(&config, tags)?;
            let roles = config.role_filter()?;

            let state = AppState::new(dataset, Arc::new(registry), roles);
            let app = build_router(state).layer(cors_layer(&config.server.cors_origin));

            let addr = format!(
                "{}:{}",
                host.unwrap_or_else(|| config.server.host.clone()),
                port.unwrap_or(config.server.port)
            );
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Serving {} on http://{}", path.display(), addr);
            axum::serve(listener, app).await?;
        }
        Commands::Tags { tags } => {
            let registry = load_registry(&config, tags)?;
            for (champion, tag) in registry.entries() {
                println!("{:<10} {}", tag.as_str(), champion);
            }
            println!("\n{} tagged champions", registry.len());
        }
        Commands::Convert { input, output } => {
            let dataset = load_dataset(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let written = write_jsonl(&dataset, &output)?;
            println!("Wrote {} {} rows to {}", written, dataset.schema(), output.display());
        }
    }

    Ok(())
}

fn print_reports(reports: &[(PathBuf, ScoutingReport)], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = if let [(_, single)] = reports {
                serde_json::to_string_pretty(single)?
            } else {
                let all: Vec<&ScoutingReport> = reports.iter().map(|(_, r)| r).collect();
                serde_json::to_string_pretty(&all)?
            };
            println!("{}", json);
        }
        OutputFormat::Text => {
            let rule = "=".repeat(50);
            for (path, report) in reports {
                println!("{}", rule);
                println!("Scouting Report: {}", path.display());
                println!("{}", rule);
                println!("{}", report.render_text());
            }
        }
    }
    Ok(())
}

fn write_jsonl(dataset: &Dataset, output: &Path) -> Result<usize> {
    let written = match dataset {
        Dataset::Full(rows) => JsonlWriter::new(output.to_path_buf()).write_all(rows.as_slice())?,
        Dataset::Partial(rows) => JsonlWriter::new(output.to_path_buf()).write_all(rows.as_slice())?,
    };
    Ok(written)
}
