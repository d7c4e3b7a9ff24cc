use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use compact_str::CompactString;

use termcolor::Color;

use crate::LogError;

/// Message severity.
///
/// Ordered by declaration. [`Level::None`] is only ever used as a threshold and
/// disables all output; no message is tagged with it.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Level {
    #[default]
    None = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
}

impl Level {

    pub const ALL: [Level; 5] = [
        Level::None,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
    ];

    /// Decorative tag printed in front of each line.
    #[inline(always)]
    pub fn tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Debug => "🏷",
            Self::Info => "💬",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }

    #[inline(always)]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[inline(always)]
    pub fn color(self) -> Option<Color> {
        match self {
            Self::None => None,
            Self::Debug => Some(Color::Cyan),
            Self::Info => Some(Color::Green),
            Self::Warning => Some(Color::Yellow),
            Self::Error => Some(Color::Red),
        }
    }

    /// Returns whether a message at `self` gets through `threshold`.
    #[inline(always)]
    pub fn passes(self, threshold: Level) -> bool {
        threshold != Level::None && self >= threshold
    }
}

impl Display for Level {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {

    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("off") {
            Ok(Self::None)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("warning") || s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else {
            Err(LogError::InvalidLevel(CompactString::new(s)))
        }
    }
}
