//! A collection of constants.

/// Glyph repeated to draw a bar's filled length.
pub const TICK: &str = "▇";
/// Glyph drawn when a bar would otherwise be empty.
pub const SMALL_TICK: &str = "▏";

/// Fields are comma separated unless told otherwise.
pub const DEFAULT_DELIMITER: &str = ",";
/// A single-space delimiter splits on any run of whitespace.
pub const WHITESPACE_DELIMITER: &str = " ";

/// Leading line declaring category names, e.g. `@ Boys,Girls`.
pub const HEADER_MARKER: &str = "@";
/// Everything after this marker on a line is ignored.
pub const COMMENT_MARKER: &str = "#";

/// Bars never grow past this many ticks unless configured.
pub const DEFAULT_WIDTH: usize = 50;

/// Printed values keep five significant digits.
///
/// 183.3249 becomes 183.32
pub const SIGNIFICANT_DIGITS: usize = 5;

/// Between the label column and the bar.
pub const LABEL_SEPARATOR: &str = ": ";
