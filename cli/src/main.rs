use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use grouping::consts::WEB_CANVAS_WIDTH;
use grouping::{GroupingError, InputError, InputPolicy, LayoutParams, Summary, Visualization, parse_inputs, svg};
use serde_json::Value;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    Core(#[from] GroupingError),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "viz", about = "Divisibility visualizer: grouping, remainders and primes")]
struct Cli {
    #[arg(long, env = "VIZ_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Visualize locally and print the report.
    Render(RenderArgs),
    /// Ask a running server for the visualization.
    Remote(RemoteArgs),
}

/// Raw entry text, validated by the core so errors read the same everywhere.
#[derive(Args, Debug)]
struct EntryArgs {
    #[arg(allow_negative_numbers = true)]
    number: String,

    #[arg(allow_negative_numbers = true)]
    group_size: String,

    /// Also print whether the number is prime and its divisors.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    entry: EntryArgs,

    /// Write the layout as SVG to this path.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Canvas width the rows wrap against.
    #[arg(long, default_value_t = WEB_CANVAS_WIDTH, value_parser = parse_width)]
    width: f64,
}

fn parse_width(raw: &str) -> Result<f64, String> {
    let width: f64 = raw.parse().map_err(|e| format!("{raw}: {e}"))?;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(format!("width must be a positive number, got {raw}"))
    }
}

#[derive(Args, Debug)]
struct RemoteArgs {
    #[command(flatten)]
    entry: EntryArgs,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Render(args) => {
            println!("{}", run_render(&args)?);
            Ok(())
        }
        Command::Remote(args) => {
            let viz = fetch_visualization(&cli.base_url, &args.entry).await?;
            println!("{}", report(&viz.summary, args.entry.summary));
            Ok(())
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

/// Validate, lay out, optionally write the SVG, and return the report text.
fn run_render(args: &RenderArgs) -> Result<String, CliError> {
    let inputs = parse_inputs(&args.entry.number, &args.entry.group_size, InputPolicy::unbounded())?;
    let params = LayoutParams::default().with_canvas_width(args.width);
    let viz = grouping::visualize(inputs, &params)?;

    if let Some(path) = &args.svg {
        fs::write(path, svg::render(&viz.layout)).map_err(|source| CliError::Write { path: path.clone(), source })?;
    }
    Ok(report(&viz.summary, args.entry.summary))
}

fn report(summary: &Summary, show_summary: bool) -> String {
    let mut lines = vec![summary.divisibility_message()];
    if show_summary {
        lines.push(summary.primality_message());
        lines.push(summary.divisors_message());
    }
    lines.join("\n")
}

fn visualize_url(base_url: &str, entry: &EntryArgs) -> Result<reqwest::Url, CliError> {
    let endpoint = format!("{}/api/visualize", base_url.trim_end_matches('/'));
    reqwest::Url::parse_with_params(&endpoint, [("number", &entry.number), ("group_size", &entry.group_size)])
        .map_err(|e| CliError::InvalidBaseUrl(format!("{base_url}: {e}")))
}

async fn fetch_visualization(base_url: &str, entry: &EntryArgs) -> Result<Visualization, CliError> {
    let url = visualize_url(base_url, entry)?;
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_message(&body) });
    }
    Ok(serde_json::from_str(&body)?)
}

/// Pull the `error` field out of an API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .map_or(None, |value| value.get("error").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.to_owned())
}
