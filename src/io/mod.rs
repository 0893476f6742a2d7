//! Input/output collaborators.
//!
//! The pipeline only sees the `Reader` and `Writer` traits; backends are
//! injected at construction time:
//!
//! - filesystem directories (`fs`)
//! - in-memory sources and sinks for tests and embedding (`memory`)
//! - stdout printing (`stdout`)
//!
//! JSON decoding shared by every reader lives in `ingest`.

pub mod fs;
pub mod ingest;
pub mod memory;
pub mod stdout;

pub use fs::*;
pub use ingest::*;
pub use memory::*;
pub use stdout::*;

use crate::domain::{Dataset, Report};
use crate::error::AppError;

/// Source of datasets.
pub trait Reader {
    /// Read and decode every available source; the first failure aborts.
    fn read_all(&self) -> Result<Vec<Dataset>, AppError>;

    /// Read and decode a single source by name (e.g. `download.json`).
    fn read(&self, name: &str) -> Result<Dataset, AppError>;
}

/// Sink for rendered reports.
pub trait Writer {
    /// Write one report under `name`.
    fn write(&mut self, name: &str, content: &str) -> Result<(), AppError>;

    /// Write reports in order, stopping at the first failure.
    fn write_all(&mut self, reports: &[Report]) -> Result<(), AppError> {
        for report in reports {
            self.write(&report.name, &report.content)?;
        }
        Ok(())
    }
}
