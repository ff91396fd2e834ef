use crate::{error::Error, sink::Sink, types::Message};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};
use tracing::error;

/// Appends each record to a file as one self-contained JSON line, flushing
/// after every write so a record is durable independent of later failures.
///
/// The target file is created (or truncated) at construction time. If setup
/// fails, the failure is reported once and the sink stays in a degraded state
/// where `handle` is a no-op, so logger construction still succeeds.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let writer = match Self::open(&path) {
            Ok(w) => Some(w),
            Err(e) => {
                error!(path = %path.display(), "Failed to set up the log file ({e})");
                None
            }
        };
        Self {
            path,
            writer: Mutex::new(writer),
        }
    }

    /// Path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path) -> Result<BufWriter<File>, Error> {
        Ok(BufWriter::new(File::create(path)?))
    }

    fn append(&self, message: &Message) -> Result<(), Error> {
        let mut guard = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(writer) = guard.as_mut() else {
            // Degraded since construction
            return Ok(());
        };
        serde_json::to_writer(&mut *writer, message)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl Sink for JsonLinesSink {
    fn handle(&self, message: &Message) {
        if let Err(e) = self.append(message) {
            // The record is lost; delivery to other sinks continues
            error!(path = %self.path.display(), "Failed to append a log record ({e})");
        }
    }
}
