// A literal on its own is a payload, not a format string; formatting only
// kicks in once arguments follow it.
#[doc(hidden)]
#[macro_export]
macro_rules! __publish {
    ($method:ident, $logger:expr => ? $val:expr) => {{
        use $crate::LogProvider as _;
        ($logger).$method($crate::call_site!(), format_args!("{:?}", $val))
    }};
    ($method:ident, $logger:expr => $fmt:literal, $($arg:expr),+ $(,)?) => {{
        use $crate::LogProvider as _;
        ($logger).$method($crate::call_site!(), format_args!($fmt, $($arg),+))
    }};
    ($method:ident, $logger:expr => $val:expr) => {{
        use $crate::LogProvider as _;
        ($logger).$method($crate::call_site!(), format_args!("{}", $val))
    }};
    ($method:ident, ? $val:expr) => {
        $crate::__publish!($method, $crate::global() => ? $val)
    };
    ($method:ident, $fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::__publish!($method, $crate::global() => $fmt, $($arg),+)
    };
    ($method:ident, $val:expr) => {
        $crate::__publish!($method, $crate::global() => $val)
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug) with the call site filled in.
///
/// ```
/// use merkki_log::{debug, NoopLogger};
///
/// let items = vec![1, 2, 3];
/// debug!("loaded {} items", items.len());
/// debug!(?items);
/// debug!(items.len());
/// debug!(NoopLogger => "sent to an injected logger");
/// ```
#[macro_export]
macro_rules! debug {
    ($($t:tt)+) => {
        $crate::__publish!(debug, $($t)+)
    };
}

/// Logs at [`Level::Info`](crate::Level::Info), see [`debug!`].
#[macro_export]
macro_rules! info {
    ($($t:tt)+) => {
        $crate::__publish!(info, $($t)+)
    };
}

/// Logs at [`Level::Warning`](crate::Level::Warning), see [`debug!`].
#[macro_export]
macro_rules! warning {
    ($($t:tt)+) => {
        $crate::__publish!(warning, $($t)+)
    };
}

/// Logs at [`Level::Error`](crate::Level::Error), see [`debug!`].
#[macro_export]
macro_rules! error {
    ($($t:tt)+) => {
        $crate::__publish!(error, $($t)+)
    };
}
