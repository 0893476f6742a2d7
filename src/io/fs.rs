//! Directory-backed reader and writer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Dataset, Report};
use crate::error::AppError;
use crate::io::ingest::decode_dataset;
use crate::io::{Reader, Writer};

/// Reads every regular file of `input_dir` as a measurement file.
#[derive(Debug, Clone)]
pub struct FsReader {
    input_dir: PathBuf,
}

impl FsReader {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    /// Files in the input directory, sorted by name, sub-directories skipped.
    ///
    /// Paths are kept as returned by the OS; names that are not valid UTF-8
    /// are only converted lossily for naming the dataset.
    fn source_paths(&self) -> Result<Vec<PathBuf>, AppError> {
        let list_err = |e: std::io::Error| {
            AppError::storage(format!(
                "Failed to list input dir '{}': {e}",
                self.input_dir.display()
            ))
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.input_dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            let file_type = entry.file_type().map_err(|e| {
                AppError::storage(format!("Failed to stat '{}': {e}", entry.path().display()))
            })?;
            if file_type.is_dir() {
                continue;
            }
            paths.push(entry.path());
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    fn read_path(&self, path: &Path) -> Result<Dataset, AppError> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::storage(format!("Failed to read input '{}': {e}", path.display()))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        decode_dataset(&name, &bytes)
    }
}

impl Reader for FsReader {
    fn read_all(&self) -> Result<Vec<Dataset>, AppError> {
        let paths = self.source_paths()?;
        tracing::info!(
            dir = %self.input_dir.display(),
            files = paths.len(),
            "reading input directory"
        );
        paths.iter().map(|path| self.read_path(path)).collect()
    }

    fn read(&self, name: &str) -> Result<Dataset, AppError> {
        self.read_path(&self.input_dir.join(name))
    }
}

/// Writes each report as a file inside `output_dir`.
#[derive(Debug, Clone)]
pub struct FsWriter {
    output_dir: PathBuf,
}

impl FsWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Writer for FsWriter {
    fn write(&mut self, name: &str, content: &str) -> Result<(), AppError> {
        let path = self.output_dir.join(name);
        fs::write(&path, content).map_err(|e| {
            AppError::storage(format!("Failed to write report '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "report written");
        Ok(())
    }

    fn write_all(&mut self, reports: &[Report]) -> Result<(), AppError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            AppError::storage(format!(
                "Failed to create output dir '{}': {e}",
                self.output_dir.display()
            ))
        })?;
        for report in reports {
            self.write(&report.name, &report.content)?;
        }
        Ok(())
    }
}
