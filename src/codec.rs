//! Conversion between human time strings and integer seconds
//!
//! Input accepts `mm:ss` or `h:mm:ss`; output is always the canonical
//! three-part `H:MM:SS` form.

/// Parse a `[h:]mm:ss` string into a total number of seconds.
///
/// Minutes and seconds must be in `0..60`; hours (when present) may be any
/// non-negative integer. Any malformed component fails the whole parse.
pub fn parse_time(input: &str) -> Result<u64, String> {
    let parts: Vec<&str> = input.split(':').collect();

    if parts.len() != 2 && parts.len() != 3 {
        return Err(format!("invalid time format: {:?} (expected [h:]mm:ss)", input));
    }

    let seconds: u64 = parts[parts.len() - 1]
        .parse()
        .map_err(|_| format!("invalid seconds component: {:?}", parts[parts.len() - 1]))?;
    if seconds >= 60 {
        return Err(format!("seconds out of range: {}", seconds));
    }

    let minutes: u64 = parts[parts.len() - 2]
        .parse()
        .map_err(|_| format!("invalid minutes component: {:?}", parts[parts.len() - 2]))?;
    if minutes >= 60 {
        return Err(format!("minutes out of range: {}", minutes));
    }

    if parts.len() == 2 {
        return Ok(seconds + 60 * minutes);
    }

    let hours: u64 = parts[0]
        .parse()
        .map_err(|_| format!("invalid hours component: {:?}", parts[0]))?;

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(60 * minutes))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| format!("time value out of range: {:?}", input))
}

/// Format a total number of seconds as `H:MM:SS`.
///
/// Hours are unpadded and may exceed two digits; minutes and seconds are
/// zero-padded to width 2.
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
