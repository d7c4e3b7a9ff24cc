mod record;
mod worker;

pub use record::{Record, UNPRINTABLE, render};
pub use worker::WORKER_NAME;

use core::fmt::Arguments;

use std::thread::JoinHandle;

use crossbeam::channel::{self, Sender};

use termcolor::{StandardStream, WriteColor};

use crate::*;

use worker::Command;

/// The console logger.
///
/// Filtering happens on the calling thread; matching records are queued to a
/// dedicated worker thread which writes them one at a time in submission
/// order. Callers never wait for the write. Share it behind an `Arc` (or
/// install it with [`init`](crate::init)) and log from any thread.
///
/// Dropping the logger writes everything already queued before returning.
pub struct Logger {
    threshold: Level,
    sender: Option<Sender<Command>>,
    worker: Option<JoinHandle<()>>,
}

impl Logger {

    /// Logger writing to stdout.
    pub fn new(config: LogConfig) -> Result<Self> {
        Self::with_writer(config.threshold, StandardStream::stdout(config.color))
    }

    /// Logger writing to `out` instead of stdout.
    pub fn with_writer<W>(threshold: Level, out: W) -> Result<Self>
        where
            W: WriteColor + Send + 'static,
    {
        let (sender, receiver) = channel::unbounded();
        let worker = worker::spawn(out, receiver)?;
        Ok(Self {
            threshold,
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Queues `record` if it passes the threshold.
    ///
    /// Returns `Ok(false)` when the record was filtered out.
    pub fn submit(&self, record: Record) -> Result<bool> {
        if !record.level.passes(self.threshold) {
            return Ok(false)
        }
        let sender = self.sender
            .as_ref()
            .ok_or(LogError::Disconnected)?;
        sender
            .send(Command::Write(record))
            .map_err(|_| LogError::Disconnected)?;
        Ok(true)
    }
}

impl LogProvider for Logger {

    fn publish(&self, message: &str, payload: Arguments<'_>, level: Level) {
        if !level.passes(self.threshold) {
            return
        }
        let _ = self.submit(Record::new(message, payload, level));
    }

    #[inline(always)]
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn flush(&self) {
        let Some(sender) = &self.sender else {
            return
        };
        let (done, wait) = channel::bounded(1);
        if sender.send(Command::Flush(done)).is_ok() {
            let _ = wait.recv();
        }
    }
}

impl Drop for Logger {

    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{sync::Arc, thread};

    use crate::capture::Capture;

    fn logger(threshold: Level) -> (Logger, Capture) {
        let capture = Capture::new();
        let logger = Logger::with_writer(threshold, capture.clone()).unwrap();
        (logger, capture)
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_publish_above_threshold_writes_one_line() {
        let (logger, capture) = logger(Level::Info);
        logger.publish("Foo.bar[1]:", format_args!("hello"), Level::Warning);
        logger.flush();
        assert_eq!(capture.lines(), ["⚠️ Foo.bar[1]: hello"]);
    }

    #[test]
    fn test_publish_below_threshold_writes_nothing() {
        let (logger, capture) = logger(Level::Warning);
        logger.publish("Foo.bar[1]:", format_args!("hello"), Level::Info);
        logger.publish("Foo.bar[2]:", format_args!("hello"), Level::Debug);
        logger.flush();
        assert!(capture.lines().is_empty());
    }

    #[test]
    fn test_none_threshold_writes_nothing() {
        let (logger, capture) = logger(Level::None);
        for level in Level::ALL {
            logger.publish(".:", format_args!("x"), level);
        }
        logger.flush();
        assert!(capture.lines().is_empty());
    }

    #[test]
    fn test_submit_reports_filtering() {
        let (logger, capture) = logger(Level::Error);
        let record = Record::new(".:", format_args!("x"), Level::Info);
        assert!(!logger.submit(record).unwrap());
        let record = Record::new(".:", format_args!("x"), Level::Error);
        assert!(logger.submit(record).unwrap());
        logger.flush();
        assert_eq!(capture.lines().len(), 1);
    }

    #[test]
    fn test_single_thread_order_is_kept() {
        let (logger, capture) = logger(Level::Debug);
        for i in 0..100 {
            logger.publish(".:", format_args!("{}", i), Level::Debug);
        }
        logger.flush();
        let expected: Vec<String> = (0..100).map(|i| format!("🏷 .: {}", i)).collect();
        assert_eq!(capture.lines(), expected);
    }

    #[test]
    fn test_drop_writes_queued_records() {
        let (logger, capture) = logger(Level::Debug);
        for _ in 0..10 {
            logger.publish(".:", format_args!("queued"), Level::Info);
        }
        drop(logger);
        assert_eq!(capture.lines().len(), 10);
    }

    #[test]
    fn test_concurrent_callers() {
        let (logger, capture) = logger(Level::Debug);
        let logger = Arc::new(logger);
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let logger = logger.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        logger.publish(".:", format_args!("{}-{}", t, i), Level::Debug);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        logger.flush();
        let lines = capture.lines();
        assert_eq!(lines.len(), 200);
        for t in 0..8 {
            let ours: Vec<_> = lines
                .iter()
                .filter(|line| line.starts_with(&format!("🏷 .: {}-", t)))
                .cloned()
                .collect();
            let expected: Vec<_> = (0..25).map(|i| format!("🏷 .: {}-{}", t, i)).collect();
            assert_eq!(ours, expected);
        }
    }

    #[test]
    fn test_stdout_logger_builds() {
        let logger = Logger::new(LogConfig::new(Level::None, ColorChoice::Never)).unwrap();
        logger.info(CallSite::new(), format_args!("never shown"));
        assert_eq!(logger.threshold(), Level::None);
    }
}
