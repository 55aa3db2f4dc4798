use chrono::{Local, NaiveDate};
use std::io;

/// Destination for the per-todo CSV files. `ensure_dir` covers the storage
/// root including intermediate path segments; `write_file` truncates any
/// existing file of the same name.
pub trait Storage: Send + Sync {
    fn ensure_dir(&self) -> impl std::future::Future<Output = io::Result<()>> + Send;
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = io::Result<()>> + Send;
}

/// Source of the date stamped into output file names. Read at write time,
/// once per record.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
