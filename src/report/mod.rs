//! Reporting utilities: display units, period compression, and the text template.

pub mod format;
pub mod periods;
pub mod unit;

pub use format::*;
pub use periods::*;
pub use unit::*;
