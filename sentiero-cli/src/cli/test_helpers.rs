//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_route;
use super::{CliError, OutputFormat, RouteCommand, RouteSummary, ScenarioSource, StrategyArg};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_scenario_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn route_command(scenario: ScenarioSource) -> RouteCommand {
    RouteCommand {
        strategy: StrategyArg::Dijkstra,
        format: OutputFormat::Text,
        source: None,
        destination: None,
        scenario,
    }
}

pub(super) fn run_route_expecting_error(command: RouteCommand, panic_msg: &str) -> CliError {
    match run_route(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &RouteSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    super::render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
