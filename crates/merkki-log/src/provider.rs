use core::fmt::Arguments;

use std::sync::Arc;

use crate::{CallSite, Level};

/// Something log calls can be sent to.
///
/// Implementations must be `Send + Sync` so one instance can be shared by any
/// number of threads. Pick the implementation when wiring the application
/// ([`Logger`](crate::Logger) or [`NoopLogger`](crate::NoopLogger)); call sites
/// stay the same.
pub trait LogProvider: Send + Sync {

    /// Emits `payload` prefixed by `message` if `level` gets through the
    /// provider's threshold, otherwise does nothing.
    fn publish(&self, message: &str, payload: Arguments<'_>, level: Level);

    /// Threshold below which messages are dropped.
    fn threshold(&self) -> Level {
        Level::None
    }

    /// Blocks until everything published so far has been written.
    fn flush(&self) {}

    #[inline(always)]
    fn debug(&self, site: CallSite<'_>, payload: Arguments<'_>) {
        self.publish(&site.prefix(), payload, Level::Debug);
    }

    #[inline(always)]
    fn info(&self, site: CallSite<'_>, payload: Arguments<'_>) {
        self.publish(&site.prefix(), payload, Level::Info);
    }

    #[inline(always)]
    fn warning(&self, site: CallSite<'_>, payload: Arguments<'_>) {
        self.publish(&site.prefix(), payload, Level::Warning);
    }

    #[inline(always)]
    fn error(&self, site: CallSite<'_>, payload: Arguments<'_>) {
        self.publish(&site.prefix(), payload, Level::Error);
    }
}

impl<P: LogProvider + ?Sized> LogProvider for Arc<P> {

    #[inline(always)]
    fn publish(&self, message: &str, payload: Arguments<'_>, level: Level) {
        (**self).publish(message, payload, level)
    }

    #[inline(always)]
    fn threshold(&self) -> Level {
        (**self).threshold()
    }

    #[inline(always)]
    fn flush(&self) {
        (**self).flush()
    }
}

impl<P: LogProvider + ?Sized> LogProvider for &P {

    #[inline(always)]
    fn publish(&self, message: &str, payload: Arguments<'_>, level: Level) {
        (**self).publish(message, payload, level)
    }

    #[inline(always)]
    fn threshold(&self) -> Level {
        (**self).threshold()
    }

    #[inline(always)]
    fn flush(&self) {
        (**self).flush()
    }
}
