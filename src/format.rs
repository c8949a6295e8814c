//! Display formatting for amounts and durations.

/// Compact amount: one decimal with a K/M/B/T suffix from 1,000 up, whole
/// number below.
pub fn format_amount(value: f64) -> String {
    const SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (scale, suffix) in SUFFIXES {
        if value >= scale {
            return format!("{:.1} {}", value / scale, suffix);
        }
    }
    format!("{}", value.floor())
}

/// Play time as `1h 2m 3s`, dropping leading zero units.
pub fn format_play_time(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}
