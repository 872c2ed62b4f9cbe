//! `navwarn`: export navigational warnings as S-124 GML.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use navwarn_models::Message;
use navwarn_s124::{
    bounding_box_for_messages, dataset_title, CoordinateFormat, DatasetInfo, DatasetMapper,
    Marshaller, S124Config,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "navwarn")]
#[command(author, version, about = "Navigational warning S-124 exporter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Map one message (JSON) to an S-124 GML dataset
    Export(ExportArgs),
    /// Print the bounding envelope of a set of messages (JSON array)
    Envelope {
        /// File holding a JSON array of messages
        #[arg(long)]
        messages: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// File holding the message as JSON
    #[arg(long)]
    message: PathBuf,

    /// Output language (defaults to S124_LANGUAGE, else "en")
    #[arg(long)]
    lang: Option<String>,

    /// Write the dataset here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Dataset title (defaults to the message title)
    #[arg(long)]
    title: Option<String>,

    /// Fixed number of coordinate decimals
    #[arg(long)]
    precision: Option<usize>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn export(config: &S124Config, args: ExportArgs) -> Result<()> {
    let message: Message = read_json(&args.message)?;
    let language = args.lang.as_deref().unwrap_or(config.default_language.as_str());
    let title = args
        .title
        .unwrap_or_else(|| dataset_title(config, &message, language));

    info!(message_id = message.id, language, "exporting message");
    let dataset = DatasetMapper::new(config).map(
        Some(&DatasetInfo::new(title)),
        Some(&message),
        language,
    )?;

    let marshaller = Marshaller::new(CoordinateFormat {
        precision: args.precision.or(config.coordinate_precision),
    });

    match args.out {
        Some(path) => {
            let file = fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            marshaller.write(&dataset, io::BufWriter::new(file))?;
            info!(path = %path.display(), "dataset written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            marshaller.write(&dataset, &mut lock)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

fn envelope(config: &S124Config, path: &Path) -> Result<()> {
    let messages: Vec<Message> = read_json(path)?;
    let format = CoordinateFormat {
        precision: config.coordinate_precision,
    };
    match bounding_box_for_messages(&messages) {
        Some(env) => println!(
            "lower: {}\nupper: {}",
            format.position(env.lower),
            format.position(env.upper)
        ),
        None => println!("no geometry in {} message(s)", messages.len()),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so GML on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = S124Config::from_env();

    match cli.command {
        Commands::Export(args) => export(&config, args),
        Commands::Envelope { messages } => envelope(&config, &messages),
    }
}
