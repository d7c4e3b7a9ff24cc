//! Hooks for view trees.
//!
//! A view layer can log when a node is mounted with [`on_mount`] / [`mount!`],
//! or log a value in the middle of a builder chain with [`LogTap`] / [`tap!`],
//! which hand the value back untouched.

use core::fmt::{Arguments, Debug};

use crate::{CallSite, LogProvider};

/// Logs `payload` at info level. Call it once when a node enters the tree.
#[inline(always)]
pub fn on_mount(provider: &dyn LogProvider, site: CallSite<'_>, payload: Arguments<'_>) {
    provider.info(site, payload);
}

pub trait LogTap: Sized {

    /// Logs `self` at debug level and returns it.
    #[inline(always)]
    fn tap_log(self, provider: &dyn LogProvider, site: CallSite<'_>) -> Self
        where
            Self: Debug,
    {
        provider.debug(site, format_args!("{:?}", self));
        self
    }
}

impl<T> LogTap for T {}

/// [`on_mount`] with the call site filled in.
#[macro_export]
macro_rules! mount {
    ($logger:expr => $fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::hook::on_mount(&$logger, $crate::call_site!(), format_args!($fmt, $($arg),+))
    };
    ($logger:expr => $val:expr) => {
        $crate::hook::on_mount(&$logger, $crate::call_site!(), format_args!("{}", $val))
    };
    ($fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::hook::on_mount($crate::global(), $crate::call_site!(), format_args!($fmt, $($arg),+))
    };
    ($val:expr) => {
        $crate::hook::on_mount($crate::global(), $crate::call_site!(), format_args!("{}", $val))
    };
}

/// Logs the Debug form of a value and evaluates to it, like `dbg!`.
#[macro_export]
macro_rules! tap {
    ($logger:expr => $val:expr) => {
        $crate::hook::LogTap::tap_log($val, &$logger, $crate::call_site!())
    };
    ($val:expr) => {
        $crate::hook::LogTap::tap_log($val, $crate::global(), $crate::call_site!())
    };
}
