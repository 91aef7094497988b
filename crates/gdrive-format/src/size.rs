//! Human-readable byte sizes.

/// Decimal units, one step per division by 1000.
const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Formats a byte count (e.g., "1.5 MB", or "1500000 B" with
/// `force_raw_bytes`).
///
/// Scaling stops at PB; larger values are printed as thousands of PB.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_size(bytes: u64, force_raw_bytes: bool) -> String {
    if force_raw_bytes {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
