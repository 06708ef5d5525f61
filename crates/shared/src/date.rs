use time::OffsetDateTime;

pub const DAY_SECS: u64 = 24 * 60 * 60;

/// Current unix timestamp in seconds.
pub fn now() -> u64 {
    OffsetDateTime::now_utc()
        .unix_timestamp()
        .try_into()
        .unwrap_or_default()
}
