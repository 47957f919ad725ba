mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dejure_client::{ClientConfig, DEFAULT_USER_AGENT, DejureClient};
use dejure_core::DEFAULT_BASE_URL;
use serde::Serialize;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "dejure",
    version,
    about = "Statutes, paragraphs and search results from dejure.org"
)]
struct Cli {
    /// Site root to read from
    #[arg(long, env = "DEJURE_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// User-Agent header sent with every request
    #[arg(
        long,
        env = "DEJURE_USER_AGENT",
        default_value = DEFAULT_USER_AGENT,
        global = true,
        hide_default_value = true
    )]
    user_agent: String,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List subject areas and their statutes
    Areas,
    /// List all statutes from the alphabetical index
    Statutes,
    /// List the paragraphs of one or more statutes
    Paragraphs {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Read the text of one paragraph, e.g. `read BRAO "§ 43e"`
    Read { code: String, number: String },
    /// Search statutes, legislation and case law
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
}

/// Print `value` as pretty JSON, or with the given text renderer.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("dejure v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig {
        base_url: cli.base_url,
        user_agent: cli.user_agent,
    };
    let client = DejureClient::from_config(&config).context("building HTTP client")?;

    match cli.command {
        Command::Areas => {
            let areas = client.subject_areas().await.context("loading subject areas")?;
            emit(cli.json, &areas, |a| display::print_subject_areas(a))
        }
        Command::Statutes => {
            let statutes = client.statutes().await.context("loading statute index")?;
            emit(cli.json, &statutes, |s| display::print_statutes(s))
        }
        Command::Paragraphs { codes } => {
            let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
            let tocs = client
                .paragraphs_many(&codes)
                .await
                .with_context(|| format!("loading paragraphs of {}", codes.join(", ")))?;
            emit(cli.json, &tocs, |t| display::print_tables_of_contents(t))
        }
        Command::Read { code, number } => {
            let text = client
                .read_paragraph(&code, &number)
                .await
                .with_context(|| format!("reading {code} {number}"))?;
            emit(cli.json, &text, display::print_paragraph_text)
        }
        Command::Search { term } => {
            let term = term.join(" ");
            let result = client
                .search(&term)
                .await
                .with_context(|| format!("searching for {term:?}"))?;
            emit(cli.json, &result, display::print_search_result)
        }
    }
}
