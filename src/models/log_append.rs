use std::fs::File;
use std::io::{self, Write};
use std::iter;
use std::time::Duration;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::stopwatch::Stopwatch;

/// The buffer sizes worth appending to a log.
pub fn interesting_buf_sizes() -> Vec<usize> {
    vec![
        1,           // Worst case
        4 * 1024,    // Disk page size
        1024 * 1024, // Big-ish write
    ]
}

/// `size_bytes` bytes of the little endian counter 0, 1, 2...
pub fn buf_data(size_bytes: usize) -> Vec<u8> {
    iter::successors(Some(0u64), |x| Some(x + 1))
        .flat_map(u64::to_le_bytes)
        .take(size_bytes)
        .collect()
}

/// When appended data is synced to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SyncPolicy {
    /// After every single append.
    Serial,
    /// Once, after all appends.
    SyncAtEnd,
}

/// Appends the same buffer to a file log, over and over.
///
/// Example:
/// ```
/// use funcall::prelude::*;
///
/// let mut log = LogAppender::new(16).unwrap();
/// log.run(SyncPolicy::SyncAtEnd, 3).unwrap();
/// assert_eq!(log.len().unwrap(), 48);
/// ```
#[derive(Debug)]
pub struct LogAppender {
    file: File,
    data: Vec<u8>,
    appended: u64,
}

impl LogAppender {
    /// A log in a fresh temporary file, removed on drop.
    pub fn new(buf_size: usize) -> io::Result<Self> {
        Ok(Self::with_file(tempfile::tempfile()?, buf_size))
    }

    /// A log appending to the given file.
    pub fn with_file(file: File, buf_size: usize) -> Self {
        Self {
            file,
            data: buf_data(buf_size),
            appended: 0,
        }
    }

    /// The size of one append.
    pub fn buf_size(&self) -> usize {
        self.data.len()
    }

    /// Bytes appended by successful runs so far.
    pub fn bytes_appended(&self) -> u64 {
        self.appended
    }

    /// The current size of the log file.
    pub fn len(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    pub fn is_empty(&self) -> io::Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Appends the buffer `iters` times, syncing according to `policy`.
    /// Returns the time it took, syncs included.
    pub fn run(&mut self, policy: SyncPolicy, iters: u64) -> io::Result<Duration> {
        let mut sw = Stopwatch::new();
        sw.reset();
        match policy {
            SyncPolicy::Serial => {
                for _ in 0..iters {
                    self.file.write_all(&self.data)?;
                    self.file.sync_data()?;
                }
            }
            SyncPolicy::SyncAtEnd => {
                for _ in 0..iters {
                    self.file.write_all(&self.data)?;
                }
                self.file.sync_data()?;
            }
        }
        sw.stop();
        self.appended += iters * self.data.len() as u64;
        Ok(sw.elapsed())
    }
}
