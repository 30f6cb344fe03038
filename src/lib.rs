//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{Color, ColorAssignment, colorize},
    config::{Config, ConfigBuilder},
    data::{Dialect, Record, Table, read_table, read_table_from_path},
    error::{ChartError, ConfigError, ParseErrorKind, ParseTableError},
};

pub use render::{Chart, ScaledTable, render_chart, scale};

/// Load `path` (`-` for stdin) and render it in one go.
///
/// Every call re-runs the whole pipeline, so pointing an existing `Config`
/// at a new source always yields a fresh chart.
pub fn chart_from_path(path: &str, cfg: &Config) -> Result<String, ChartError> {
    let table = read_table_from_path(path, Dialect::from(cfg))?;
    Ok(render_chart(&table, cfg))
}
