// ⏰ Time Source - Injected wall-clock capability
// The station core never reads the clock directly; everything time-dependent
// (weekend detection for alternating rates, the parked-at stamp on receipts)
// goes through this trait so tests can substitute deterministic stubs.

use chrono::{Datelike, Local, Timelike, Weekday};

// ============================================================================
// TIME SOURCE TRAIT
// ============================================================================

/// Read-only wall-clock queries used by the pay station.
///
/// Two consumers:
/// - `AlternatingRateStrategy` asks `is_weekend` to pick a sub-strategy
/// - `Receipt::render` asks `time_of_day` for the "Car parked at" stamp
pub trait TimeSource: Send + Sync {
    /// Is it currently Saturday or Sunday?
    fn is_weekend(&self) -> bool;

    /// Current local (hour, minute), 24-hour clock.
    fn time_of_day(&self) -> (u32, u32);
}

// ============================================================================
// SYSTEM CLOCK
// ============================================================================

/// Production clock backed by `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn is_weekend(&self) -> bool {
        matches!(Local::now().weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn time_of_day(&self) -> (u32, u32) {
        let now = Local::now();
        (now.hour(), now.minute())
    }
}

// ============================================================================
// FIXED CLOCK
// ============================================================================

/// Deterministic clock returning preset values.
///
/// Public (not test-only) so integration code and demos can pin the clock.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub weekend: bool,
    pub hour: u32,
    pub minute: u32,
}

impl FixedClock {
    pub fn new(weekend: bool, hour: u32, minute: u32) -> Self {
        FixedClock {
            weekend,
            hour,
            minute,
        }
    }
}

impl TimeSource for FixedClock {
    fn is_weekend(&self) -> bool {
        self.weekend
    }

    fn time_of_day(&self) -> (u32, u32) {
        (self.hour, self.minute)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_preset_values() {
        let clock = FixedClock::new(true, 8, 6);

        assert!(clock.is_weekend());
        assert_eq!(clock.time_of_day(), (8, 6));
    }

    #[test]
    fn test_system_clock_time_in_range() {
        let (hour, minute) = SystemClock.time_of_day();

        assert!(hour < 24);
        assert!(minute < 60);
    }
}
