use compact_str::CompactString;

use termcolor::ColorChoice;

use crate::{Level, LogError, Result};

pub const LEVEL_ENV: &str = "MERKKI_LOG";
pub const STYLE_ENV: &str = "MERKKI_LOG_STYLE";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildMode {
    Development,
    Release,
}

impl BuildMode {

    #[inline(always)]
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    /// Development builds log everything, release builds nothing.
    #[inline(always)]
    pub const fn threshold(self) -> Level {
        match self {
            Self::Development => Level::Debug,
            Self::Release => Level::None,
        }
    }
}

/// Settings a [`Logger`](crate::Logger) is built from.
///
/// Everything here is read once at construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogConfig {
    pub threshold: Level,
    pub color: ColorChoice,
}

impl LogConfig {

    pub fn new(threshold: Level, color: ColorChoice) -> Self {
        Self {
            threshold,
            color,
        }
    }

    #[inline(always)]
    pub fn for_build(mode: BuildMode) -> Self {
        Self {
            threshold: mode.threshold(),
            color: ColorChoice::Auto,
        }
    }

    /// Build-mode defaults, overridden by `MERKKI_LOG` and `MERKKI_LOG_STYLE`
    /// when they hold something sensible.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = lookup(LEVEL_ENV) {
            if let Ok(level) = level.parse::<Level>() {
                config.threshold = level;
            }
        }
        if let Some(style) = lookup(STYLE_ENV) {
            if let Ok(color) = parse_style(&style) {
                config.color = color;
            }
        }
        config
    }

    #[inline(always)]
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline(always)]
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

impl Default for LogConfig {

    fn default() -> Self {
        Self::for_build(BuildMode::current())
    }
}

pub fn parse_style(s: &str) -> Result<ColorChoice> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("auto") {
        Ok(ColorChoice::Auto)
    } else if s.eq_ignore_ascii_case("always") {
        Ok(ColorChoice::Always)
    } else if s.eq_ignore_ascii_case("never") {
        Ok(ColorChoice::Never)
    } else {
        Err(LogError::InvalidStyle(CompactString::new(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl FnMut(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_build_mode_thresholds() {
        assert_eq!(BuildMode::Development.threshold(), Level::Debug);
        assert_eq!(BuildMode::Release.threshold(), Level::None);
    }

    #[test]
    fn test_default_follows_build_mode() {
        let config = LogConfig::default();
        assert_eq!(config.threshold, BuildMode::current().threshold());
        assert_eq!(config.color, ColorChoice::Auto);
        if cfg!(debug_assertions) {
            assert_eq!(config.threshold, Level::Debug);
        }
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = LogConfig::from_lookup(lookup(&[
            (LEVEL_ENV, "warning"),
            (STYLE_ENV, "never"),
        ]));
        assert_eq!(config.threshold, Level::Warning);
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_lookup_ignores_invalid_values() {
        let config = LogConfig::from_lookup(lookup(&[
            (LEVEL_ENV, "chatty"),
            (STYLE_ENV, "rainbow"),
        ]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_lookup_without_variables_is_default() {
        assert_eq!(LogConfig::from_lookup(lookup(&[])), LogConfig::default());
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(parse_style("ALWAYS").ok(), Some(ColorChoice::Always));
        assert_eq!(parse_style("auto").ok(), Some(ColorChoice::Auto));
        assert!(matches!(parse_style("sometimes"), Err(LogError::InvalidStyle(_))));
    }
}
