//! Whole-chart assembly: scale → colors → legend → rows.

use std::fmt;

use tracing::debug;

use crate::core::{color::ColorAssignment, config::Config, data::Table};

use super::{
    bars::{build_legend, build_rows},
    scale::scale,
};

/// A fully rendered chart.  Rebuilt from scratch for every table/config pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    title: Option<String>,
    legend: Option<String>,
    rows: Vec<String>,
}

impl Chart {
    #[must_use]
    pub fn build(table: &Table, cfg: &Config) -> Self {
        let scaled = scale(table, cfg.width);
        let colors = ColorAssignment::new(table.headers().len(), &cfg.colors);
        let legend = colors
            .is_colored()
            .then(|| build_legend(table.headers(), &colors, &cfg.tick));
        let rows = build_rows(table, &scaled, &colors, cfg);
        debug!(rows = rows.len(), legend = legend.is_some(), "chart built");

        Self {
            title: cfg.title.clone().filter(|t| !t.is_empty()),
            legend,
            rows,
        }
    }

    #[inline]
    #[must_use]
    pub fn legend(&self) -> Option<&str> {
        self.legend.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            write!(f, "{title}\n\n")?;
        }
        if let Some(legend) = &self.legend {
            write!(f, "{legend}\n\n")?;
        }
        f.write_str(&self.rows.join("\n"))
    }
}

/// Render `table` into the final printable block.
#[must_use]
pub fn render_chart(table: &Table, cfg: &Config) -> String {
    Chart::build(table, cfg).to_string()
}
