use clap::{ArgAction, Parser};

use crate::core::constants::{
    COMMENT_MARKER, DEFAULT_DELIMITER, DEFAULT_WIDTH, HEADER_MARKER, SMALL_TICK, TICK,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "bar-graph",
    version,
    about = "Draw horizontal bar charts in the terminal"
)]
pub struct Cli {
    /// Data file, comma or space separated (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Title printed above the chart
    #[arg(long)]
    pub title: Option<String>,

    /// Width of the longest bar in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// String appended to every printed value
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Do not print the label column
    #[arg(long)]
    pub no_labels: bool,

    /// Bar color(s), cycled across categories
    #[arg(long, num_args = 0.., value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Tick mark used to draw bars, emoji approved
    #[arg(long, default_value = TICK)]
    pub tick: String,

    /// Tick mark for bars too short to draw
    #[arg(long, default_value = SMALL_TICK)]
    pub small_tick: String,

    /// Field delimiter; a single space splits on any whitespace
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delim: String,

    /// Prefix of the line declaring category names
    #[arg(long, default_value = HEADER_MARKER)]
    pub header_marker: String,

    /// Prefix of comment text to ignore
    #[arg(long, default_value = COMMENT_MARKER)]
    pub comment_marker: String,

    /// Show available color names and exit
    #[arg(long)]
    pub list_colors: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bar-graph"]).unwrap();
        assert_eq!(cli.file, "-");
        assert_eq!(cli.width, 50);
        assert_eq!(cli.delim, ",");
        assert_eq!(cli.tick, "▇");
        assert_eq!(cli.small_tick, "▏");
        assert!(cli.colors.is_empty());
        assert!(!cli.no_labels);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn colors_take_many_values() {
        let cli =
            Cli::try_parse_from(["bar-graph", "data.csv", "--colors", "blue", "red", "-vv"])
                .unwrap();
        assert_eq!(cli.file, "data.csv");
        assert_eq!(cli.colors, ["blue", "red"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn non_numeric_width_is_rejected() {
        assert!(Cli::try_parse_from(["bar-graph", "--width", "wide"]).is_err());
    }
}
