//! Money is carried as integer minor units (cents) end to end.

/// Apply a percentage uplift to a cent amount, rounding half-up.
/// Integer arithmetic keeps the .5 boundary exact.
pub fn uplift_half_up(cents: i64, percent: u32) -> i64 {
    (cents * (100 + percent as i64) + 50) / 100
}

/// Render a cent amount as a decimal string for tickets and logs.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
