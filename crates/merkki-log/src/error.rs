use compact_str::CompactString;

#[derive(Debug)]
pub enum LogError {
    Io(std::io::Error),
    Disconnected,
    AlreadyInitialized,
    InvalidLevel(CompactString),
    InvalidStyle(CompactString),
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(_) => write!(f, "IO error"),
            Self::Disconnected => write!(f, "log worker disconnected"),
            Self::AlreadyInitialized => write!(f, "global logger initialized twice"),
            Self::InvalidLevel(name) => write!(f, "invalid log level \"{}\"", name),
            Self::InvalidStyle(name) => write!(f, "invalid log style \"{}\"", name),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
