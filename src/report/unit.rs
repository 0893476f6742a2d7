//! Bit-rate display units.
//!
//! Inputs are bytes per second; reports are always shown in bits per second,
//! scaled by a power of 1000.

/// A bits-per-second magnitude, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BitRateUnit {
    Bits,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Petabits,
}

impl BitRateUnit {
    pub const ALL: [BitRateUnit; 6] = [
        BitRateUnit::Bits,
        BitRateUnit::Kilobits,
        BitRateUnit::Megabits,
        BitRateUnit::Gigabits,
        BitRateUnit::Terabits,
        BitRateUnit::Petabits,
    ];

    /// Label printed on the report's `Unit:` line.
    pub fn label(self) -> &'static str {
        match self {
            BitRateUnit::Bits => "Bits per second",
            BitRateUnit::Kilobits => "Kilobits per second",
            BitRateUnit::Megabits => "Megabits per second",
            BitRateUnit::Gigabits => "Gigabits per second",
            BitRateUnit::Terabits => "Terabits per second",
            BitRateUnit::Petabits => "Petabits per second",
        }
    }

    /// Number of ×1000 steps above plain bits.
    pub fn magnitude(self) -> u32 {
        self as u32
    }

    /// Convert a bytes-per-second value into this unit.
    pub fn scale(self, bytes_per_second: f64) -> f64 {
        bytes_per_second * 8.0 / 1000f64.powi(self.magnitude() as i32)
    }
}

/// Pick the largest unit for which the value (in bits) still exceeds 1000.
///
/// The comparison is strict: exactly 1000 bits stays in the smaller unit.
pub fn select_unit(bytes_per_second: f64) -> BitRateUnit {
    let mut scaled = bytes_per_second * 8.0;
    let mut unit = BitRateUnit::Bits;

    for next in &BitRateUnit::ALL[1..] {
        if scaled <= 1000.0 {
            break;
        }
        scaled /= 1000.0;
        unit = *next;
    }

    unit
}
