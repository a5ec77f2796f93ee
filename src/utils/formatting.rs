//! Formatting utilities used for CLI and export outputs.

/// `label ........ value` line of fixed width, as used by the run summary.
pub fn key_value_line(key: &str, value: &str, width: usize) -> String {
    let used = key.chars().count() + 1;
    format!("{} {:>w$}", key, value, w = width.saturating_sub(used))
}

/// Minutes (fractional) as `HHh MMm` or `HH:MM`.
pub fn mins2readable(mins: f64, short: bool) -> String {
    let total = mins.round() as i64;
    let hours = total / 60;
    let minutes = total % 60;

    if short {
        // es: 02:25
        format!("{:02}:{:02}", hours, minutes)
    } else {
        // es: 02h 25m
        format!("{:02}h {:02}m", hours, minutes)
    }
}
