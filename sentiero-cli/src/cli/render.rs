//! Text and JSON rendering of route summaries.

use std::io::{self, Write};

use sentiero_core::{NodeCost, Route};

use super::commands::{OutputFormat, RouteSummary};

const NO_ROUTE: &str = "No route from the start to the end point!";

/// Renders `summary` to `writer` in the format it was requested in.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use sentiero_cli::cli::{Cli, Command, OutputFormat, RouteCommand, ScenarioSource, StrategyArg, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Route(RouteCommand {
///         strategy: StrategyArg::LabelCorrecting,
///         format: OutputFormat::Text,
///         source: None,
///         destination: None,
///         scenario: ScenarioSource::Fixed,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("route: 5 -> 3 -> 2 -> 0\ntotal cost: 1055\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &RouteSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => render_text(summary, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &summary.plan.frame())?;
            writeln!(writer)
        }
    }
}

fn render_text(summary: &RouteSummary, writer: &mut impl Write) -> io::Result<()> {
    let plan = &summary.plan;
    writeln!(writer, "scenario: {}", summary.scenario)?;
    writeln!(writer, "source: {}", plan.source())?;
    writeln!(writer, "destination: {}", plan.destination())?;
    writeln!(writer, "strategy: {}", plan.strategy())?;

    for node in plan.frame().nodes {
        writeln!(
            writer,
            "{}, {}, {}, {}",
            node.index,
            node.position,
            node.cost,
            node.role.as_str()
        )?;
    }

    match plan.route() {
        Route::Reachable(path) => {
            let hops: Vec<String> = path.nodes().iter().map(ToString::to_string).collect();
            writeln!(writer, "route: {}", hops.join(" -> "))?;
            writeln!(
                writer,
                "total cost: {}",
                NodeCost::Reached(path.total_cost())
            )
        }
        Route::Unreachable => writeln!(writer, "{NO_ROUTE}"),
    }
}
