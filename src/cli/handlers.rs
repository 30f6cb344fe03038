use std::io::{Write, stdout};

use tracing::info;

use crate::{
    chart_from_path,
    core::{
        color::{Color, colorize},
        config::Config,
        error::ChartError,
    },
};

use super::parse::Cli;

/// Validate options, then load and print the chart.
pub fn chart(a: &Cli) -> Result<(), ChartError> {
    let cfg = config_from_args(a)?;
    info!(file = %a.file, width = cfg.width, colors = cfg.colors.len(), "rendering");

    let text = chart_from_path(&a.file, &cfg)?;
    let mut out = stdout().lock();
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

pub(crate) fn config_from_args(a: &Cli) -> Result<Config, ChartError> {
    let cfg = Config::builder()
        .title_opt(a.title.as_deref())
        .width(a.width)
        .suffix(&a.suffix)
        .no_labels(a.no_labels)
        .colors(&a.colors)
        .tick(&a.tick)
        .small_tick(&a.small_tick)
        .delimiter(&a.delim)
        .header_marker(&a.header_marker)
        .comment_marker(&a.comment_marker)
        .build()?;
    Ok(cfg)
}

/// Pretty-print available color names.
pub fn colors() -> Result<(), ChartError> {
    let mut out = stdout().lock();
    writeln!(out, "\nPossible colors:")?;
    for c in Color::ALL {
        writeln!(out, "{}", colorize(c, c.name()))?;
    }
    writeln!(out)?;
    Ok(())
}
