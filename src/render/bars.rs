//! Row and legend builders.
//!
//! A row reads `<label>: <color><ticks> <reset><value><suffix>`.  Records with
//! several categories print one row per category; only the first carries the
//! record label, the rest get a blank label of the same width so the bars
//! stack under it.

use crate::core::{
    color::ColorAssignment,
    config::Config,
    constants::{LABEL_SEPARATOR, SIGNIFICANT_DIGITS},
    data::Table,
    format::format_significant,
};

use super::scale::ScaledTable;

/// Glyph and repeat count for one bar.
///
/// Positive lengths round to the nearest tick but never below one; zero or
/// less falls back to a single small tick so no bar is ever invisible.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bar<'a>(scaled: f64, tick: &'a str, small_tick: &'a str) -> (&'a str, usize) {
    if scaled > 0.0 {
        (tick, (scaled.round_ties_even() as usize).max(1))
    } else {
        (small_tick, 1)
    }
}

/// Everything one row needs besides the bar glyphs.
pub struct RowParts<'a> {
    pub label: Option<&'a str>,
    pub label_width: usize,
    pub color: &'a str,
    pub reset: &'a str,
    pub glyph: &'a str,
    pub count: usize,
    pub value: f64,
    pub suffix: &'a str,
}

#[must_use]
pub fn build_row(p: &RowParts<'_>) -> String {
    let mut row = String::new();
    if let Some(label) = p.label {
        row.push_str(&format!("{label:>w$}", w = p.label_width));
        row.push_str(LABEL_SEPARATOR);
    }
    row.push_str(p.color);
    row.push_str(&p.glyph.repeat(p.count));
    row.push(' ');
    row.push_str(p.reset);
    row.push_str(&format_significant(p.value, SIGNIFICANT_DIGITS));
    row.push_str(p.suffix);
    row
}

/// `<color><tick> <name>` per category, space separated, closed by reset.
#[must_use]
pub fn build_legend(headers: &[String], colors: &ColorAssignment, tick: &str) -> String {
    let mut parts: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}{tick} {name}", colors.token(i)))
        .collect();
    parts.push(colors.reset().to_owned());
    parts.join(" ")
}

/// One row per (record, category), record order first.
#[must_use]
pub fn build_rows(
    table: &Table,
    scaled: &ScaledTable,
    colors: &ColorAssignment,
    cfg: &Config,
) -> Vec<String> {
    let label_width = table.label_width();
    let mut out = Vec::with_capacity(table.len() * table.headers().len());

    for (r, record) in table.records().iter().enumerate() {
        for (c, &value) in record.values.iter().enumerate() {
            let length = scaled.get(r, c).unwrap_or(0.0);
            let (glyph, count) = bar(length, &cfg.tick, &cfg.small_tick);
            let label = if cfg.no_labels {
                None
            } else if c == 0 {
                Some(record.label.as_str())
            } else {
                Some("")
            };
            out.push(build_row(&RowParts {
                label,
                label_width,
                color: colors.token(c),
                reset: colors.reset(),
                glyph,
                count,
                value,
                suffix: &cfg.suffix,
            }));
        }
    }
    out
}
