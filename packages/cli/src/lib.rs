//! # chartopts-cli
//!
//! Builds a Highcharts chart script from a JSON configuration and
//! command-line option overrides.
//!
//! ## Usage
//!
//! ```bash
//! chartopts --id 1 --render-to container \
//!     --set chart/type=line --set 'xAxis/categories=["Jan","Feb"]' \
//!     --label chart/zoomType=xy \
//!     --raw 'tooltip/formatter=function() { return this.y; }' \
//!     --series series.json
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chartopts_chart::{ChartConfig, ChartError, ChartScript, Series};
use chartopts_option_store::{json_to_value, Label, OptionValue, UnknownLabel};
use clap::Parser;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Label(#[from] UnknownLabel),

    #[error("expected PATH=VALUE, got {0:?}")]
    Assignment(String),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid series file {path}: {source}")]
    Series {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

/// chartopts - generate Highcharts chart scripts
#[derive(Parser, Debug, Default)]
#[command(name = "chartopts")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON chart configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Chart id (overrides the configuration)
    #[arg(long)]
    pub id: Option<String>,

    /// Container element id (overrides the configuration)
    #[arg(long, value_name = "DIV")]
    pub render_to: Option<String>,

    /// Set an option; the value is parsed as JSON, or taken as plain text
    #[arg(long = "set", value_name = "PATH=JSON")]
    pub set: Vec<String>,

    /// Set an option to raw JavaScript code
    #[arg(long = "raw", value_name = "PATH=CODE")]
    pub raw: Vec<String>,

    /// Set an option to a chart or zoom type label
    #[arg(long = "label", value_name = "PATH=LABEL")]
    pub label: Vec<String>,

    /// Remove an option
    #[arg(long = "remove", value_name = "PATH")]
    pub remove: Vec<String>,

    /// JSON file with one series or an array of series
    #[arg(long, value_name = "FILE")]
    pub series: Option<PathBuf>,

    /// Print only the option literal, without the chart wrapper
    #[arg(long)]
    pub options_only: bool,

    /// Skip the dangling-separator cleanup
    #[arg(long)]
    pub no_clean: bool,
}

/// Build the chart described by `args` and render it.
pub fn run(args: &Args) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    if let Some(id) = &args.id {
        config.id = Some(id.clone());
    }
    if let Some(target) = &args.render_to {
        config.render_to = Some(target.clone());
    }
    if args.no_clean {
        config.clean_output = false;
    }

    let mut chart = ChartScript::new(config)?;

    for assignment in &args.set {
        let (path, text) = split_assignment(assignment)?;
        chart.set_option(path, parse_value(text))?;
    }
    for assignment in &args.raw {
        let (path, code) = split_assignment(assignment)?;
        chart.set_option(path, OptionValue::raw(code))?;
    }
    for assignment in &args.label {
        let (path, label) = split_assignment(assignment)?;
        chart.set_option(path, Label::from_str(label)?)?;
    }
    for path in &args.remove {
        if chart.remove_option(path.as_str())?.is_none() {
            debug!(path = %path, "nothing to remove");
        }
    }
    if let Some(path) = &args.series {
        for series in load_series(path)? {
            chart.add_series(series);
        }
    }

    if args.options_only {
        return Ok(chart.options_js().unwrap_or_default());
    }
    Ok(chart.to_js()?)
}

/// Read a series file.
pub fn load_series(path: &Path) -> Result<Vec<Series>> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Series::list_from_json_str(&content).map_err(|source| CliError::Series {
        path: path.to_path_buf(),
        source,
    })
}

fn split_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((path, value)) if !path.trim().is_empty() => Ok((path.trim(), value)),
        _ => Err(CliError::Assignment(assignment.to_string())),
    }
}

/// JSON when it parses, plain text otherwise.
fn parse_value(text: &str) -> OptionValue {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => json_to_value(json),
        Err(_) => OptionValue::String(text.to_string()),
    }
}
