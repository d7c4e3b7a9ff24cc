use std::sync::{Arc, OnceLock};

use crate::*;

static GLOBAL: OnceLock<Arc<dyn LogProvider>> = OnceLock::new();

/// Flushes the process-wide logger when dropped.
///
/// The global logger lives in a static and is never dropped, so lines still
/// queued when `main` returns would be lost. Keep the guard alive for the
/// whole of `main`.
#[must_use = "dropping the guard flushes immediately"]
pub struct LogGuard(());

impl Drop for LogGuard {

    fn drop(&mut self) {
        flush();
    }
}

/// Installs `provider` as the process-wide logger used by the macros when no
/// logger is given.
///
/// Fails if a global logger is already set, including one created implicitly
/// by an earlier [`global`] call.
pub fn init(provider: Arc<dyn LogProvider>) -> Result<LogGuard> {
    GLOBAL
        .set(provider)
        .map_err(|_| LogError::AlreadyInitialized)?;
    Ok(LogGuard(()))
}

/// Guard for the implicitly created global logger, see [`LogGuard`].
#[inline(always)]
pub fn guard() -> LogGuard {
    LogGuard(())
}

/// The process-wide logger.
///
/// Created on first use from [`LogConfig::from_env`] unless [`init`] ran first.
/// Falls back to [`NoopLogger`] if the worker thread can't be started. Hold a
/// [`LogGuard`] or call [`flush`] before exiting so queued lines get written.
#[inline(always)]
pub fn global() -> &'static dyn LogProvider {
    &**instance()
}

/// Shared handle to the process-wide logger, for injecting into components.
#[inline(always)]
pub fn shared() -> Arc<dyn LogProvider> {
    instance().clone()
}

fn instance() -> &'static Arc<dyn LogProvider> {
    GLOBAL.get_or_init(|| {
        let provider: Arc<dyn LogProvider> = match Logger::new(LogConfig::from_env()) {
            Ok(logger) => Arc::new(logger),
            Err(_) => Arc::new(NoopLogger),
        };
        provider
    })
}

/// Waits until the process-wide logger has written everything queued so far.
#[inline(always)]
pub fn flush() {
    global().flush()
}
