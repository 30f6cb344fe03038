//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;

// re-export frequently-used items for convenience
pub use color::{Color, ColorAssignment, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    COMMENT_MARKER, DEFAULT_DELIMITER, DEFAULT_WIDTH, HEADER_MARKER, SIGNIFICANT_DIGITS,
    SMALL_TICK, TICK,
};
pub use data::{Dialect, Record, Table};
pub use error::{ChartError, ConfigError, ParseErrorKind, ParseTableError};
pub use format::format_significant;
