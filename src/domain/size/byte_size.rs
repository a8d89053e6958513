//! Byte size value object

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::ByteSizeParseError;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Default upload ceiling (4 MiB), matching the speech API proxy limit
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 4 * MIB;

/// Value object representing a size in bytes.
/// Immutable; parsed sizes are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ByteSize {
    bytes: u64,
}

impl ByteSize {
    /// Create a ByteSize from a raw byte count
    pub const fn from_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    /// Create a ByteSize from kibibytes
    pub const fn from_kib(kib: u64) -> Self {
        Self { bytes: kib * KIB }
    }

    /// Create a ByteSize from mebibytes
    pub const fn from_mib(mib: u64) -> Self {
        Self { bytes: mib * MIB }
    }

    /// Default upload ceiling (4 MiB)
    pub const fn default_max_size() -> Self {
        Self::from_bytes(DEFAULT_MAX_SIZE_BYTES)
    }

    /// Get the size in bytes
    pub const fn as_bytes(&self) -> u64 {
        self.bytes
    }

    /// Size in mebibytes, for display
    pub fn as_mib(&self) -> f64 {
        self.bytes as f64 / MIB as f64
    }

    /// Human-readable size, in the largest unit that keeps the value >= 1
    pub fn human_readable(&self) -> String {
        let bytes = self.bytes;
        if bytes < KIB {
            format!("{} B", bytes)
        } else if bytes < MIB {
            format!("{:.1} KB", bytes as f64 / KIB as f64)
        } else {
            format!("{:.2} MB", self.as_mib())
        }
    }
}

impl From<usize> for ByteSize {
    fn from(bytes: usize) -> Self {
        Self::from_bytes(bytes as u64)
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeParseError;

    /// Parse a size string such as "4MiB", "512kb", "1.5M" or "4194304".
    /// Units are binary: KB and KiB both mean 1024 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ByteSizeParseError { input: s.to_string() };
        let input = s.trim().to_lowercase();

        let split = input
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(input.len());
        let (number, unit) = input.split_at(split);

        if number.is_empty() {
            return Err(err());
        }

        let multiplier = match unit.trim() {
            "" | "b" => 1,
            "k" | "kb" | "kib" => KIB,
            "m" | "mb" | "mib" => MIB,
            "g" | "gb" | "gib" => GIB,
            _ => return Err(err()),
        };

        let bytes = if number.contains('.') {
            let value: f64 = number.parse().map_err(|_| err())?;
            let bytes = (value * multiplier as f64).floor();
            if !bytes.is_finite() || bytes >= u64::MAX as f64 {
                return Err(err());
            }
            bytes as u64
        } else {
            let value: u64 = number.parse().map_err(|_| err())?;
            value.checked_mul(multiplier).ok_or_else(err)?
        };

        if bytes == 0 {
            return Err(err());
        }

        Ok(Self { bytes })
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_readable())
    }
}

impl Default for ByteSize {
    fn default() -> Self {
        Self::default_max_size()
    }
}

/// Percentage saved going from `original` to `reduced`.
/// Negative when the result grew.
pub fn compression_ratio(original: ByteSize, reduced: ByteSize) -> f64 {
    if original.as_bytes() == 0 {
        return 0.0;
    }
    (1.0 - reduced.as_bytes() as f64 / original.as_bytes() as f64) * 100.0
}
