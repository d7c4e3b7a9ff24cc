use std::{
    io,
    thread::{self, JoinHandle},
};

use crossbeam::channel::{Receiver, Sender};

use termcolor::WriteColor;

use super::Record;

pub const WORKER_NAME: &str = "merkki-log";

pub(crate) enum Command {
    Write(Record),
    Flush(Sender<()>),
}

pub(crate) fn spawn<W>(out: W, commands: Receiver<Command>) -> io::Result<JoinHandle<()>>
    where
        W: WriteColor + Send + 'static,
{
    thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || run(out, commands))
}

/// Writes records in the order they were queued until every sender is gone.
fn run<W: WriteColor>(mut out: W, commands: Receiver<Command>) {
    for command in commands.iter() {
        match command {
            Command::Write(record) => {
                // a failed write loses this line only
                if record.write_to(&mut out).is_err() {
                    let _ = out.reset();
                }
            },
            Command::Flush(done) => {
                let _ = out.flush();
                let _ = done.send(());
            },
        }
    }
    let _ = out.flush();
}
