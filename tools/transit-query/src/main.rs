use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_catalogue::models::TransitProvider;
use transit_catalogue::protocol::{answer_all, build_catalogue, responses_to_value, RequestBatch};

#[derive(Parser, Debug)]
#[command(
    name = "transit-query",
    author,
    version,
    about = "Answer bus and stop statistics requests from a transit request document",
    long_about = "Reads a document with `base_requests` (bus and stop definitions) and \
                  `stat_requests` (queries), builds the bus network from the definitions \
                  and writes one response per query as a document array.\n\n\
                  Unknown buses and stops are answered with `\"error_message\": \"not found\"`. \
                  A malformed document or request aborts the run with a non-zero exit code."
)]
struct Args {
    /// Request document to read (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the response document (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also log the ingested network and a human-readable line per answered query
    #[arg(long)]
    summary: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for the response document
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let input = read_input(args.input.as_deref())?;

    let batch = RequestBatch::parse(&input).context("Failed to decode request document")?;
    info!(
        "Loaded {} base requests and {} stat requests",
        batch.base.len(),
        batch.stat.len()
    );

    let catalogue = build_catalogue(batch.base);
    if args.summary {
        log_network(&catalogue);
    }

    let responses = answer_all(&catalogue, &batch.stat).context("Failed to answer stat requests")?;
    if args.summary {
        for response in &responses {
            info!("{}", response);
        }
    }

    let document = responses_to_value(&responses).context("Failed to encode responses")?;
    write_output(args.output.as_deref(), &document.to_string())?;
    info!("Wrote {} responses", responses.len());

    Ok(())
}

fn log_network(provider: &dyn TransitProvider) {
    for bus in provider.all_buses() {
        info!(bus = %bus.id, kind = ?bus.kind, stops = bus.stop_count(), "bus");
    }
    for stop in provider.all_stops() {
        info!(
            stop = %stop.id,
            lat = stop.latitude(),
            lon = stop.longitude(),
            neighbours = stop.road_distances.len(),
            "stop"
        );
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, document: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document).context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_stdio() {
        let args = Args::try_parse_from(["transit-query"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(!args.summary);
        assert!(!args.verbose);
    }

    #[test]
    fn test_paths_and_flags() {
        let args = Args::try_parse_from([
            "transit-query",
            "-i",
            "requests.json",
            "--output",
            "answers.json",
            "--summary",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("requests.json")));
        assert_eq!(args.output, Some(PathBuf::from("answers.json")));
        assert!(args.summary);
        assert!(args.verbose);
    }
}
