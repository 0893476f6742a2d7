//! Print reports to stdout (`--print`).

use std::io::Write as _;

use crate::error::AppError;
use crate::io::Writer;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl Writer for StdoutWriter {
    fn write(&mut self, name: &str, content: &str) -> Result<(), AppError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "==> {name} <==")
            .and_then(|_| writeln!(out, "{content}"))
            .map_err(|e| AppError::storage(format!("Failed to print report '{name}': {e}")))
    }
}
