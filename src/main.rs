mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use parcel_resources::document::Document;
use parcel_resources::resource::{ResourceObject, ResourceType};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Inspect and normalize parcel API JSON-API documents
#[derive(Parser, Debug)]
#[command(name = "parcelres", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hydrate every resource and print the document as it would be sent
    Normalize {
        /// JSON or YAML document (defaults to the last one used)
        file: Option<PathBuf>,
    },
    /// Print one summary line per resource
    Inspect {
        /// JSON or YAML document (defaults to the last one used)
        file: Option<PathBuf>,
    },
    /// List the known resource types
    Types,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("parcelres started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("parcelres").join("parcelres.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".parcelres").join("parcelres.log");
    }
    PathBuf::from("parcelres.log")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let mut config = Config::load();
    let pretty = config.effective_pretty(args.compact);

    match &args.command {
        Command::Normalize { file } => {
            let document = read_document(&mut config, file.as_deref())?;
            let normalized = document.normalized()?;
            print_json(&normalized.into_value(), pretty)?;
        }
        Command::Inspect { file } => {
            let document = read_document(&mut config, file.as_deref())?;
            // Hydrate first so invalid documents fail before any output
            document.resources()?;
            for object in document.objects() {
                println!("{}", summarize(object));
            }
            for object in &document.included {
                println!("{} (included)", summarize(object));
            }
        }
        Command::Types => {
            for resource_type in ResourceType::ALL {
                println!("{:<24}{}", resource_type.as_str(), resource_type.display_name());
            }
        }
    }

    Ok(())
}

/// Load the document from the CLI path or the last one used
fn read_document(config: &mut Config, file: Option<&Path>) -> Result<Document> {
    let Some(path) = config.effective_document(file) else {
        bail!("No input document given and none used before");
    };
    tracing::debug!("Reading document {:?}", path);

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = parse_value(&path, &content)?;
    let document = Document::from_value(value)?;

    if file.is_some() {
        if let Err(e) = config.set_last_document(&path) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    Ok(document)
}

/// Parse JSON, or YAML for `.yaml`/`.yml` files
fn parse_value(path: &Path, content: &str) -> Result<Value> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(content).with_context(|| format!("Invalid YAML in {}", path.display()))
    } else {
        serde_json::from_str(content).with_context(|| format!("Invalid JSON in {}", path.display()))
    }
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

/// `type  id  N attributes, M linked` for one object
fn summarize(object: &ResourceObject) -> String {
    let linked = object
        .relationships
        .iter()
        .flat_map(|relationships| relationships.values())
        .filter_map(|relationship| relationship.get("data"))
        .map(|data| match data {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        })
        .sum::<usize>();

    format!(
        "{:<24}{:<40}{} attributes, {} linked",
        object.resource_type.as_str(),
        object.id.as_deref().unwrap_or("-"),
        object.attributes.len(),
        linked
    )
}
