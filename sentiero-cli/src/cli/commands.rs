//! Command implementations and argument parsing for the sentiero CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::SmallRng};
use sentiero_core::{
    Endpoints, GraphError, Point, PropagationStrategy, RandomScenarioConfig, RoutePlan,
    RoutePlannerBuilder, Scenario, edges_from_signed,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sentiero",
    about = "Plan the shortest route between the two most distant nodes of a planar graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Plan and print the shortest route for a scenario.
    Route(RouteCommand),
}

/// Options accepted by the `route` command.
#[derive(Debug, Args, Clone)]
pub struct RouteCommand {
    /// Relaxation order used to propagate travel costs.
    #[arg(long, value_enum, default_value_t = StrategyArg::Dijkstra)]
    pub strategy: StrategyArg,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Start node; defaults to one end of the farthest pair.
    #[arg(long, requires = "destination")]
    pub source: Option<usize>,

    /// End node; defaults to the other end of the farthest pair.
    #[arg(long, requires = "source")]
    pub destination: Option<usize>,

    /// Scenario to plan over.
    #[command(subcommand)]
    pub scenario: ScenarioSource,
}

/// Where the scenario comes from.
#[derive(Debug, Subcommand, Clone)]
pub enum ScenarioSource {
    /// The built-in six-node layout.
    Fixed,
    /// A randomly generated layout.
    Random(RandomArgs),
    /// A JSON file with `positions` and `edges` arrays.
    File(FileArgs),
}

/// Random scenario arguments.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of nodes to place.
    #[arg(long, default_value_t = RandomScenarioConfig::default().node_count())]
    pub nodes: usize,

    /// Number of random connection draws.
    #[arg(long, default_value_t = RandomScenarioConfig::default().connection_attempts())]
    pub connections: usize,

    /// Seed for reproducible layouts; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Scenario file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the JSON scenario.
    pub path: PathBuf,
}

/// Command-line names for [`PropagationStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Binary-heap Dijkstra.
    Dijkstra,
    /// Depth-first label-correcting relaxation.
    LabelCorrecting,
}

impl From<StrategyArg> for PropagationStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Dijkstra => Self::Dijkstra,
            StrategyArg::LabelCorrecting => Self::LabelCorrecting,
        }
    }
}

/// Rendering applied to a [`RouteSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented human-readable report.
    Text,
    /// The serialised draw frame.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The scenario file could not be read.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The scenario file was not valid scenario JSON.
    #[error("failed to parse scenario `{path}`: {source}")]
    Json {
        /// Path of the malformed file.
        path: PathBuf,
        /// Decoder error, including line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The scenario was structurally invalid.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Outcome of the `route` command.
#[derive(Debug, Clone)]
pub struct RouteSummary {
    /// Label for the scenario source: `fixed`, `random` or the file path.
    pub scenario: String,
    /// Requested output format.
    pub format: OutputFormat,
    /// Planned route and propagated graph.
    pub plan: RoutePlan,
}

/// On-disk scenario layout. Edges are signed so negative indices are reported
/// as invalid edges rather than JSON decoding failures.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    positions: Vec<[f64; 2]>,
    edges: Vec<[i64; 2]>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the scenario cannot be loaded or planned.
///
/// # Examples
/// ```
/// use sentiero_cli::cli::{Cli, Command, OutputFormat, RouteCommand, ScenarioSource, StrategyArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Route(RouteCommand {
///         strategy: StrategyArg::Dijkstra,
///         format: OutputFormat::Text,
///         source: None,
///         destination: None,
///         scenario: ScenarioSource::Fixed,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.plan.destination(), 5);
/// # Ok::<(), sentiero_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<RouteSummary, CliError> {
    match cli.command {
        Command::Route(route) => {
            Span::current().record("command", field::display("route"));
            run_route(route)
        }
    }
}

#[instrument(
    name = "cli.route",
    err,
    skip(command),
    fields(strategy = field::Empty, scenario = field::Empty, endpoints = field::Empty),
)]
pub(super) fn run_route(command: RouteCommand) -> Result<RouteSummary, CliError> {
    let strategy = PropagationStrategy::from(command.strategy);
    let endpoints = match (command.source, command.destination) {
        (Some(source), Some(destination)) => Endpoints::Explicit {
            source,
            destination,
        },
        _ => Endpoints::Farthest,
    };
    let span = Span::current();
    span.record("strategy", field::display(strategy));
    span.record(
        "endpoints",
        field::display(match endpoints {
            Endpoints::Farthest => "farthest",
            Endpoints::Explicit { .. } => "explicit",
        }),
    );

    let (label, scenario) = match command.scenario {
        ScenarioSource::Fixed => ("fixed".to_owned(), Scenario::fixed()),
        ScenarioSource::Random(args) => ("random".to_owned(), random_scenario(&args)),
        ScenarioSource::File(args) => {
            let scenario = load_scenario(&args.path)?;
            (args.path.display().to_string(), scenario)
        }
    };
    span.record("scenario", field::display(&label));

    let plan = RoutePlannerBuilder::new()
        .with_strategy(strategy)
        .with_endpoints(endpoints)
        .build()
        .plan(&scenario)?;

    info!(
        scenario = label.as_str(),
        reachable = plan.route().is_reachable(),
        relaxations = plan.stats().relaxations,
        "command completed"
    );
    Ok(RouteSummary {
        scenario: label,
        format: command.format,
        plan,
    })
}

pub(super) fn random_scenario(args: &RandomArgs) -> Scenario {
    let config = RandomScenarioConfig::default()
        .with_node_count(args.nodes)
        .with_connection_attempts(args.connections);
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    Scenario::random(&config, &mut rng)
}

#[instrument(name = "cli.load_scenario", err, fields(path = %path.display()))]
pub(super) fn load_scenario(path: &Path) -> Result<Scenario, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: ScenarioFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let positions: Vec<Point> = raw.positions.into_iter().map(Point::from).collect();
    let pairs: Vec<(i64, i64)> = raw
        .edges
        .into_iter()
        .map(|[left, right]| (left, right))
        .collect();
    let edges = edges_from_signed(&pairs, positions.len())?;
    Ok(Scenario::new(positions, edges))
}
