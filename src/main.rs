use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use booker::engine::Engine;
use booker::{loader, observability, runner};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

fn paint(text: &str, color: &str, tty: bool) -> String {
    if tty {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

struct Paths {
    resources: PathBuf,
    queries: PathBuf,
    results: PathBuf,
}

fn parse_args(args: &[String]) -> Option<Paths> {
    match args {
        [_, resources, queries, results] => Some(Paths {
            resources: PathBuf::from(resources),
            queries: PathBuf::from(queries),
            results: PathBuf::from(results),
        }),
        _ => None,
    }
}

fn print_usage(args: &[String]) {
    let tty = std::io::stderr().is_terminal();
    let program = args.first().map(String::as_str).unwrap_or("booker");
    eprintln!(
        "{} -> Incorrect number of arguments provided ({}), should be (3)\n",
        paint("ERROR", RED, tty),
        args.len().saturating_sub(1)
    );
    eprintln!("{}", paint(&format!("Provided execution command: {}", args.join(" ")), RED, tty));
    eprintln!(
        "{}",
        paint(
            &format!("You MUST use: {program} <resources_path> <queries_path> <results_path>"),
            YELLOW,
            tty
        )
    );
}

fn run(paths: &Paths) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    let hierarchy = loader::load_hierarchy(&paths.resources)?;
    metrics::gauge!(observability::HIERARCHY_RESOURCES).set(hierarchy.resource_count() as f64);
    let mut engine = Engine::new(hierarchy);

    let text = loader::read_queries(&paths.queries)?;
    let results = runner::run_queries(&mut engine, &text)?;
    loader::write_results(&paths.results, &results)?;

    debug!(
        queries = results.len(),
        ledger_entries = engine.ledger().entry_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(paths) = parse_args(&args) else {
        print_usage(&args);
        return ExitCode::FAILURE;
    };

    let metrics_port: Option<u16> = std::env::var("BOOKER_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    if let Err(e) = observability::init(metrics_port) {
        tracing::warn!("metrics exporter disabled: {e}");
    }

    match run(&paths) {
        Ok(()) => {
            let tty = std::io::stdout().is_terminal();
            println!(
                "{} -> Results written to output file: '{}'",
                paint("SUCCESS", GREEN, tty),
                paths.results.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let tty = std::io::stderr().is_terminal();
            eprintln!("{} -> {e}", paint("ERROR", RED, tty));
            ExitCode::FAILURE
        }
    }
}
