//! Read-only status snapshot.

use crate::config::TimerConfig;

/// Renders the configuration as `"<countdown> (<interval>)\n"`.
///
/// Pure and idempotent; safe to call concurrently with writes. The two
/// fields are loaded independently, so a snapshot taken during a concurrent
/// write is best-effort-current rather than transactionally consistent.
pub fn render(config: &TimerConfig) -> String {
    format!("{} ({})\n", config.countdown(), config.interval_ms())
}
