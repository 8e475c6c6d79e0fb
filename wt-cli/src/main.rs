use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wt_core::config::ServerConfig;
use wt_core::{classify_dialogue, count_characters, current_timestamp, range_label, TextRange};

/// バージョン情報を生成
fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\nBuilt: ",
        env!("BUILD_DATE"),
        "\nCommit: ",
        env!("GIT_HASH")
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "wt-cli",
    about = "Character counts and dialogue/narration ratios for plain-text manuscripts",
    version = env!("CARGO_PKG_VERSION"),
    long_version = long_version()
)]
struct Cli {
    /// Log to stderr at info level (WT_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count characters, excluding line breaks
    Count(FileArgs),
    /// Dialogue/narration character counts and ratios
    Dialogue(FileArgs),
    /// Current local time as YYYYMMDDHHMM
    Timestamp,
    /// Print the tool server configuration resolved from WT_* variables
    McpConfig,
}

#[derive(Args, Debug)]
struct FileArgs {
    /// UTF-8 text file
    #[arg(long)]
    path: PathBuf,
    /// First line (1-based, inclusive)
    #[arg(long, requires = "end_line")]
    start_line: Option<i64>,
    /// Last line (inclusive); lines past the end of the file are ignored
    #[arg(long, requires = "start_line")]
    end_line: Option<i64>,
    /// Output JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl FileArgs {
    fn range(&self) -> Result<Option<TextRange>> {
        match (self.start_line, self.end_line) {
            (Some(s), Some(e)) => Ok(Some(TextRange::new(s, e)?)),
            _ => Ok(None),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = std::env::var("WT_LOG")
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!(command = ?cli.command, "running");
    match cli.command {
        Commands::Count(a) => {
            let range = a.range()?;
            let label = a.path.to_string_lossy().into_owned();
            let counted = count_characters(&a.path, range)?;
            if a.json {
                println!("{}", serde_json::to_string_pretty(&counted.structured(&label, range))?);
            } else {
                println!("{}", counted.summary(&label, range));
            }
        }
        Commands::Dialogue(a) => {
            let range = a.range()?;
            let label = range_label(&a.path.to_string_lossy(), range);
            let result = classify_dialogue(&a.path, range)?;
            if a.json {
                println!("{}", serde_json::to_string_pretty(&result.structured(&label, range.is_some()))?);
            } else {
                println!("{}", result.summary(&label));
            }
        }
        Commands::Timestamp => println!("{}", current_timestamp()),
        Commands::McpConfig => {
            println!("{}", serde_json::to_string_pretty(&ServerConfig::from_env())?);
        }
    }
    Ok(())
}
