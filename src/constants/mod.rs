use std::sync::LazyLock;

pub mod version;

pub static STARTUP_TIME: LazyLock<std::time::SystemTime> =
    LazyLock::new(std::time::SystemTime::now);

/// Seconds since the process started serving.
pub fn uptime_secs() -> u64 {
    STARTUP_TIME.elapsed().map(|d| d.as_secs()).unwrap_or_default()
}
