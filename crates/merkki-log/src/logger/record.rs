use core::fmt::{Arguments, Write as _};

use std::io::{self, Write};

use compact_str::CompactString;

use termcolor::{ColorSpec, WriteColor};

use crate::Level;

/// Written in place of payloads whose formatting fails.
pub const UNPRINTABLE: &str = "<unprintable>";

/// One log line on its way to the sink.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Record {
    pub message: CompactString,
    pub payload: CompactString,
    pub level: Level,
}

impl Record {

    pub fn new(message: &str, payload: Arguments<'_>, level: Level) -> Self {
        Self {
            message: CompactString::new(message),
            payload: render(payload),
            level,
        }
    }

    /// Writes `<tag> <message> <payload>` and a newline.
    pub fn write_to<W: WriteColor + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if let Some(color) = self.level.color() {
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(out, "{} {}", self.level.tag(), self.message)?;
            out.reset()?;
        } else {
            write!(out, "{} {}", self.level.tag(), self.message)?;
        }
        writeln!(out, " {}", self.payload)
    }
}

/// Renders `payload`, falling back to [`UNPRINTABLE`] if a formatting impl
/// reports an error.
pub fn render(payload: Arguments<'_>) -> CompactString {
    if let Some(s) = payload.as_str() {
        return CompactString::new(s)
    }
    let mut out = CompactString::default();
    match out.write_fmt(payload) {
        Ok(()) => out,
        Err(_) => CompactString::new(UNPRINTABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::fmt::{self, Display, Formatter};

    use termcolor::{Buffer, NoColor};

    struct Broken;

    impl Display for Broken {

        fn fmt(&self, _f: &mut Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_render_plain_and_formatted() {
        assert_eq!(render(format_args!("Awesome")), "Awesome");
        assert_eq!(render(format_args!("{} items", 3)), "3 items");
        assert_eq!(render(format_args!("{:?}", Some("x"))), "Some(\"x\")");
    }

    #[test]
    fn test_render_falls_back_on_format_error() {
        assert_eq!(render(format_args!("{}", Broken)), UNPRINTABLE);
    }

    #[test]
    fn test_write_line_layout() {
        let record = Record::new("Foo.bar[42]:", format_args!("hello"), Level::Info);
        let mut out = NoColor::new(Vec::new());
        record.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "💬 Foo.bar[42]: hello\n");
    }

    #[test]
    fn test_write_colored_line_keeps_text() {
        let record = Record::new(".:", format_args!("boom"), Level::Error);
        let mut out = Buffer::ansi();
        record.write_to(&mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.starts_with("\x1b["));
        assert!(text.contains("❌ .:"));
        assert!(text.ends_with(" boom\n"));
    }
}
