//! u-assign - plan a task assignment from a JSON request.
//!
//! Reads `{ "developers": [...], "tasks": [...], "scoring": {...} }` from a
//! file or stdin and prints the resulting plan as JSON on stdout. Logs go to
//! stderr, filtered by `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_assign::scheduler::{AssignmentRequest, GreedyAssigner, PlanKpi};

#[derive(Debug, Parser)]
#[command(name = "u-assign", version, about = "Greedy dependency-aware task assignment")]
struct Cli {
    /// Request file. Reads stdin when omitted or "-".
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Reject duplicate names, unknown or cyclic dependencies and invalid hours.
    #[arg(long, env = "U_ASSIGN_STRICT")]
    strict: bool,

    /// Print the plan on a single line.
    #[arg(long)]
    compact: bool,

    /// Print every assignment decision instead of the plan.
    #[arg(long, conflicts_with = "compact")]
    trace: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_request(input: Option<&PathBuf>) -> Result<AssignmentRequest> {
    let raw = match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("failed to parse assignment request")
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let request = read_request(cli.input.as_ref())?;
    let assigner = GreedyAssigner::new().with_weights(request.scoring);

    let (plan, events) = if cli.strict {
        assigner.assign_with_trace_checked(&request.developers, &request.tasks)?
    } else {
        assigner.assign_with_trace(&request.developers, &request.tasks)
    };

    let kpi = PlanKpi::calculate(&plan, &request.developers);
    info!(
        assignment_rate = kpi.assignment_rate,
        avg_utilization = kpi.avg_utilization,
        preference_match_rate = kpi.preference_match_rate,
        "plan summary"
    );

    let output = if cli.trace {
        serde_json::to_string_pretty(&events)?
    } else if cli.compact {
        serde_json::to_string(&plan)?
    } else {
        serde_json::to_string_pretty(&plan)?
    };
    println!("{output}");

    Ok(())
}
