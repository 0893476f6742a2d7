//! Dataset statistics: order statistics and outlier detection.

pub mod order;
pub mod outliers;

pub use order::*;
pub use outliers::*;
