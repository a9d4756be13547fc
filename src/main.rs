//! Storage Volume Resolver CLI
//!
//! Loads a multi-disk storage declaration, validates it, and prints the
//! resolved volumes (mount path, capacity, medium, name).
//!
//! ```text
//! storage-volume-resolver --config '/home/disk1/palo.SSD,50;/home/disk2/palo'
//! storage-volume-resolver --config-file /etc/operator/storage.conf --output yaml
//! storage-volume-resolver --names-only /home/disk1/doris /home/disk2/doris
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storage_volume_resolver::{
    resolve_specs, ConfigSource, Error, NameResolver, ResolvedVolume, Result,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Output format for resolved volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Storage Volume Resolver - multi-disk declaration parser and volume naming
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Storage declaration string
    #[arg(long, env = "STORAGE_CONFIG", conflicts_with = "config_file")]
    config: Option<String>,

    /// File containing the storage declaration
    #[arg(long, env = "STORAGE_CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Resolve names for the given paths without parsing a declaration
    #[arg(long, requires = "paths")]
    names_only: bool,

    /// Mount paths for --names-only
    #[arg(requires = "names_only")]
    paths: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

impl Args {
    fn source(&self) -> Result<ConfigSource> {
        match (&self.config, &self.config_file) {
            (Some(raw), None) => Ok(ConfigSource::Inline(raw.clone())),
            (None, Some(path)) => Ok(ConfigSource::File(path.clone())),
            (Some(_), Some(_)) => Err(Error::Configuration(
                "--config and --config-file are mutually exclusive".into(),
            )),
            (None, None) => Err(Error::Configuration(
                "no storage declaration given (use --config or --config-file)".into(),
            )),
        }
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args);

    info!("Starting Storage Volume Resolver v{}", storage_volume_resolver::VERSION);

    if args.names_only {
        let names = NameResolver::resolve(&args.paths);
        for (path, name) in args.paths.iter().zip(&names) {
            println!("{}\t{}", name, path);
        }
        return Ok(());
    }

    let source = args.source()?;
    info!("Reading storage declaration from {}", source);

    let specs = source.load_and_parse().map_err(|e| {
        error!("Rejected storage declaration: {}", e);
        e
    })?;
    let volumes = resolve_specs(&specs);

    print_volumes(&volumes, args.output)?;
    Ok(())
}

// =============================================================================
// Output
// =============================================================================

fn print_volumes(volumes: &[ResolvedVolume], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(volumes)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(volumes)?),
        OutputFormat::Table => {
            println!("{:<24} {:<40} {:<14} {:>10}", "NAME", "MOUNT PATH", "MEDIUM", "CAPACITY");
            for volume in volumes {
                let capacity = volume
                    .capacity
                    .as_ref()
                    .map(|q| q.0.as_str())
                    .unwrap_or("-");
                println!(
                    "{:<24} {:<40} {:<14} {:>10}",
                    volume.name, volume.mount_path, volume.medium.as_str(), capacity
                );
            }
        }
    }
    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdout stays machine-readable
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
