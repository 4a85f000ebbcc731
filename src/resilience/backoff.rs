//! Linear retry delay.

use std::time::Duration;

/// Delay before retry number `retry` (1-based): `base * retry`.
///
/// No jitter and no exponential growth; a zero `retry` yields no delay.
pub fn linear_backoff(retry: u32, base: Duration) -> Duration {
    base.saturating_mul(retry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_calculation() {
        let base = Duration::from_millis(900);
        assert_eq!(linear_backoff(0, base), Duration::ZERO);
        assert_eq!(linear_backoff(1, base), Duration::from_millis(900));
        assert_eq!(linear_backoff(2, base), Duration::from_millis(1800));
        assert_eq!(linear_backoff(3, base), Duration::from_millis(2700));
    }

    #[test]
    fn test_backoff_saturates() {
        assert_eq!(linear_backoff(u32::MAX, Duration::MAX), Duration::MAX);
    }
}
