//! Leveled logging for application UI code.
//!
//! Every line carries a severity tag and the call site it came from:
//!
//! ```text
//! 💬 content_view.body[42]: Awesome
//! ```
//!
//! Log calls go through a [`LogProvider`]. [`Logger`] filters on the calling
//! thread and leaves the write to its own worker thread, [`NoopLogger`] drops
//! everything. The [`debug!`], [`info!`], [`warning!`] and [`error!`] macros
//! fill in the call site and use either an injected provider or the
//! process-wide one from [`global`].

#[macro_use]

mod macros;
mod error;
mod level;
mod call_site;
mod config;
mod provider;
mod noop;
mod logger;
mod global;

pub mod hook;
pub mod capture;

pub use error::LogError;
pub use level::Level;
pub use call_site::{CallSite, file_name, function_name};
pub use config::{BuildMode, LogConfig, LEVEL_ENV, STYLE_ENV, parse_style};
pub use provider::LogProvider;
pub use noop::NoopLogger;
pub use logger::{Logger, Record, UNPRINTABLE, WORKER_NAME, render};
pub use global::{LogGuard, init, guard, global, shared, flush};

pub use termcolor::{ColorChoice, WriteColor};

pub type Result<T> = core::result::Result<T, LogError>;
