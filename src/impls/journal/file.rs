use std::{
    fs::{create_dir_all, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

use crate::core::ports::journal::{Event, Journal};
use crate::error::Error;

/// Writes submission events to the console through `log` and appends them
/// to a file. The console line is always emitted; file errors only warn.
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_owned() }
    }

    fn append(&self, line: &str) -> Result<(), Error> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_dir_all(dir)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        // one write per line so concurrent batches do not interleave mid-line
        file.write_all(format!("[{}] {}\n", Utc::now().to_rfc3339(), line).as_bytes())?;
        Ok(())
    }
}

impl Journal for FileJournal {
    fn record(&self, batch: &Uuid, event: Event<'_>) {
        let line = format!("[{}] {}", batch, event);
        info!(target: "submission", "{}", line);
        if let Err(e) = self.append(&line) {
            warn!("failed to write to submission log {}: {}", self.path.display(), e);
        }
    }
}
