//! Command-line interface for planning routes over planar graphs.
//!
//! The `route` command loads the fixed reference layout, a seeded random
//! layout or a JSON scenario file, plans the shortest route and renders it as
//! text or as a JSON frame.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, FileArgs, OutputFormat, RandomArgs, RouteCommand, RouteSummary,
    ScenarioSource, StrategyArg, run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod test_helpers;
