//! Run-time configuration object + fluent builder.

use crate::core::{
    color::Color,
    constants::{COMMENT_MARKER, DEFAULT_DELIMITER, DEFAULT_WIDTH, HEADER_MARKER, SMALL_TICK, TICK},
    error::ConfigError,
};

/// Immutable parameters handed to the loader and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: Option<String>,
    pub width: usize,
    pub suffix: String,
    pub no_labels: bool,
    pub colors: Vec<Color>,
    pub tick: String,
    pub small_tick: String,
    pub delimiter: String,
    pub header_marker: String,
    pub comment_marker: String,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_WIDTH,
            suffix: String::new(),
            no_labels: false,
            colors: Vec::new(),
            tick: TICK.to_owned(),
            small_tick: SMALL_TICK.to_owned(),
            delimiter: DEFAULT_DELIMITER.to_owned(),
            header_marker: HEADER_MARKER.to_owned(),
            comment_marker: COMMENT_MARKER.to_owned(),
        }
    }
}

/// Fluent builder; colour names stay unresolved until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    title: Option<String>,
    width: Option<usize>,
    suffix: Option<String>,
    no_labels: bool,
    colors: Vec<String>,
    tick: Option<String>,
    small_tick: Option<String>,
    delimiter: Option<String>,
    header_marker: Option<String>,
    comment_marker: Option<String>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn suffix(mut self, s: impl Into<String>) -> Self {
        self.suffix = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn no_labels(mut self, yes: bool) -> Self {
        self.no_labels = yes;
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, name: impl Into<String>) -> Self {
        self.colors.push(name.into());
        self
    }
    #[must_use]
    pub fn colors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors.extend(names.into_iter().map(Into::into));
        self
    }
    #[inline]
    #[must_use]
    pub fn tick(mut self, t: impl Into<String>) -> Self {
        self.tick = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn small_tick(mut self, t: impl Into<String>) -> Self {
        self.small_tick = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn delimiter(mut self, d: impl Into<String>) -> Self {
        self.delimiter = Some(d.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn header_marker(mut self, m: impl Into<String>) -> Self {
        self.header_marker = Some(m.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn comment_marker(mut self, m: impl Into<String>) -> Self {
        self.comment_marker = Some(m.into());
        self
    }

    /// Validate every field; fails on the first bad one.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();

        let colors = self
            .colors
            .iter()
            .map(|name| Color::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;

        let width = self.width.unwrap_or(defaults.width);
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        let delimiter = self.delimiter.unwrap_or(defaults.delimiter);
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }

        let tick = non_empty_glyph(self.tick, defaults.tick, "tick")?;
        let small_tick = non_empty_glyph(self.small_tick, defaults.small_tick, "small tick")?;

        let header_marker = self.header_marker.unwrap_or(defaults.header_marker);
        if header_marker.is_empty() {
            return Err(ConfigError::EmptyMarker("header"));
        }
        let comment_marker = self.comment_marker.unwrap_or(defaults.comment_marker);
        if comment_marker.is_empty() {
            return Err(ConfigError::EmptyMarker("comment"));
        }

        Ok(Config {
            title: self.title,
            width,
            suffix: self.suffix.unwrap_or_default(),
            no_labels: self.no_labels,
            colors,
            tick,
            small_tick,
            delimiter,
            header_marker,
            comment_marker,
        })
    }
}

fn non_empty_glyph(
    given: Option<String>,
    fallback: String,
    what: &'static str,
) -> Result<String, ConfigError> {
    let glyph = given.unwrap_or(fallback);
    if glyph.is_empty() {
        Err(ConfigError::EmptyGlyph(what))
    } else {
        Ok(glyph)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
