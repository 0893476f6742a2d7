//! In-memory reader and writer.
//!
//! Sources are kept as raw JSON so decoding behaves exactly as for files.

use crate::domain::{Dataset, Measurement};
use crate::error::AppError;
use crate::io::ingest::decode_dataset;
use crate::io::{Reader, Writer};

#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    sources: Vec<(String, Vec<u8>)>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw JSON source.
    pub fn with_source(mut self, name: impl Into<String>, json: impl Into<Vec<u8>>) -> Self {
        self.sources.push((name.into(), json.into()));
        self
    }

    /// Add a source by encoding `measurements` to JSON.
    pub fn with_measurements(
        self,
        name: impl Into<String>,
        measurements: &[Measurement],
    ) -> Result<Self, AppError> {
        let json = serde_json::to_vec(measurements)
            .map_err(|e| AppError::storage(format!("Failed to encode measurements: {e}")))?;
        Ok(self.with_source(name, json))
    }
}

impl Reader for MemoryReader {
    fn read_all(&self) -> Result<Vec<Dataset>, AppError> {
        self.sources
            .iter()
            .map(|(name, bytes)| decode_dataset(name, bytes))
            .collect()
    }

    fn read(&self, name: &str) -> Result<Dataset, AppError> {
        let (_, bytes) = self
            .sources
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| AppError::storage(format!("No in-memory source named '{name}'")))?;
        decode_dataset(name, bytes)
    }
}

/// Collects reports in write order.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    outputs: Vec<(String, String)>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> &[(String, String)] {
        &self.outputs
    }

    /// Content of the most recent report written under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content.as_str())
    }
}

impl Writer for MemoryWriter {
    fn write(&mut self, name: &str, content: &str) -> Result<(), AppError> {
        self.outputs.push((name.to_string(), content.to_string()));
        Ok(())
    }
}
