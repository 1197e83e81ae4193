//! Input channel: a reader thread feeding a single-slot mailbox.
//!
//! The reader blocks on the input stream; the game loop never does. Each
//! decoded command overwrites the slot, so commands that pile up between two
//! ticks collapse to the latest one. The thread is never joined: it dies with
//! the process.

use std::io::{self, Read};
use std::thread;

use tokio::sync::watch;

use crate::decode::decode;
use crate::types::Command;

/// Largest single read; an arrow key is three bytes.
const READ_BUF_LEN: usize = 100;

/// Failure of the blocking reader.
#[derive(Debug, thiserror::Error)]
pub enum InputReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed")]
    Closed,
}

/// Receiving end of the input mailbox.
pub struct InputChannel {
    rx: watch::Receiver<Command>,
}

impl InputChannel {
    /// Spawn a reader thread over `reader`.
    pub fn spawn<R>(reader: R) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = watch::channel(Command::None);
        thread::Builder::new()
            .name("input".into())
            .spawn(move || read_loop(reader, tx))?;
        Ok(Self { rx })
    }

    /// Spawn a reader over the process's standard input.
    pub fn from_stdin() -> io::Result<Self> {
        Self::spawn(io::stdin())
    }

    /// Take the pending command, if any. Never blocks.
    ///
    /// Once the reader is gone no command can ever arrive, so a closed
    /// channel reads as [`Command::Escape`].
    pub fn try_recv(&mut self) -> Option<Command> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            Ok(false) => None,
            Err(_) => Some(Command::Escape),
        }
    }
}

fn read_loop<R: Read>(mut reader: R, tx: watch::Sender<Command>) {
    let mut buf = [0u8; READ_BUF_LEN];
    loop {
        let cmd = match read_command(&mut reader, &mut buf) {
            Ok(cmd) => cmd,
            Err(e) => {
                log::warn!("{e}; quitting");
                tx.send_replace(Command::Escape);
                return;
            }
        };

        if cmd != Command::None {
            tx.send_replace(cmd);
        }
    }
}

fn read_command<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<Command, InputReadError> {
    let n = reader.read(buf)?;
    if n == 0 {
        return Err(InputReadError::Closed);
    }
    Ok(decode(&buf[..n]))
}
