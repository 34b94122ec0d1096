use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::engine::Engine;
use crate::model::*;
use crate::observability;
use crate::query::{parse_queries, QueryError};

/// Engine behind one lock, for callers that share it across tasks.
pub type SharedEngine = Arc<RwLock<Engine>>;

pub fn shared(engine: Engine) -> SharedEngine {
    Arc::new(RwLock::new(engine))
}

fn record_query(command: Command, outcome: Outcome, started: Instant) {
    metrics::counter!(
        observability::QUERIES_TOTAL,
        "command" => command.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!(observability::QUERY_DURATION_SECONDS, "command" => command.as_str())
        .record(started.elapsed().as_secs_f64());
}

/// Execute already-parsed queries in order, one outcome per query.
pub fn execute_all(engine: &mut Engine, queries: &[Query]) -> Vec<Outcome> {
    let run_start = Instant::now();
    let mut results = Vec::with_capacity(queries.len());
    for query in queries {
        let started = Instant::now();
        let outcome = engine.execute(query);
        record_query(query.command, outcome, started);
        results.push(outcome);
    }
    metrics::histogram!(observability::RUN_DURATION_SECONDS)
        .record(run_start.elapsed().as_secs_f64());
    results
}

/// Parse and execute a whole query source.
///
/// Parsing finishes before the first query runs, so a bad line leaves the
/// ledger untouched and produces no results at all.
pub fn run_queries(engine: &mut Engine, text: &str) -> Result<Vec<Outcome>, QueryError> {
    let queries = parse_queries(text)?;
    Ok(execute_all(engine, &queries))
}

/// Execute one query against a shared engine.
///
/// Read-only queries share the read lock. `book` holds the write lock across
/// the availability check and the commit, so no other booking can slip in
/// between them.
pub async fn execute_shared(engine: &SharedEngine, query: &Query) -> Outcome {
    let started = Instant::now();
    let read_only = engine.read().await.execute_read_only(query);
    let outcome = match read_only {
        Some(outcome) => outcome,
        None => engine.write().await.execute(query),
    };
    record_query(query.command, outcome, started);
    outcome
}
