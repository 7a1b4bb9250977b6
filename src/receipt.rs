// 🧾 Receipt - Immutable proof of purchase
// Produced once at buy(), owned by the caller; the station keeps no reference.
// Rendering is pure formatting against an injected clock and sink.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::clock::TimeSource;

/// Barcode pattern appended to receipts from towns that print one.
const BARCODE_LINE: &str = "          || ||| | || ||| | ||| | || ||";

// ============================================================================
// RECEIPT
// ============================================================================

/// Value holder for the minutes bought in one transaction.
///
/// `minutes` keeps the exact (possibly fractional) value the strategy
/// produced; rendering truncates it toward zero for the fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Minutes of parking purchased
    pub minutes: f64,

    /// Print the barcode line when rendering
    pub barcode: bool,
}

impl Receipt {
    pub fn new(minutes: f64, barcode: bool) -> Self {
        Receipt { minutes, barcode }
    }

    /// Write the receipt to `sink` in the fixed ticket layout:
    ///
    /// ```text
    /// -------------------------------------------------
    /// -------  P A R K I N G   R E C E I P T    -------
    ///           Value 010 minutes.
    ///           Car parked at 08:06
    /// -------------------------------------------------
    /// ```
    ///
    /// The minutes field is zero-padded to 3 digits, fractional values
    /// truncated toward zero. The parked-at stamp comes from `clock`; the
    /// barcode line is inserted before the closing banner when enabled.
    pub fn render(&self, clock: &dyn TimeSource, sink: &mut dyn Write) -> std::io::Result<()> {
        let (hour, minute) = clock.time_of_day();

        writeln!(sink, "-------------------------------------------------")?;
        writeln!(sink, "-------  P A R K I N G   R E C E I P T    -------")?;
        writeln!(sink, "          Value {:03} minutes.", self.minutes.trunc() as u64)?;
        writeln!(sink, "          Car parked at {:02}:{:02}", hour, minute)?;
        if self.barcode {
            writeln!(sink, "{}", BARCODE_LINE)?;
        }
        writeln!(sink, "-------------------------------------------------")?;

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn render_to_string(receipt: &Receipt, clock: &FixedClock) -> String {
        let mut buf = Vec::new();
        receipt.render(clock, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_plain_receipt() {
        let receipt = Receipt::new(10.0, false);
        let clock = FixedClock::new(false, 8, 6);

        let text = render_to_string(&receipt, &clock);

        assert!(text.contains("P A R K I N G   R E C E I P T"));
        assert!(text.contains("Value 010 minutes."));
        assert!(text.contains("Car parked at 08:06"));
        assert!(!text.contains("||"));
    }

    #[test]
    fn test_render_with_barcode() {
        let receipt = Receipt::new(40.0, true);
        let clock = FixedClock::new(false, 14, 30);

        let text = render_to_string(&receipt, &clock);

        assert!(text.contains("Value 040 minutes."));
        assert!(text.contains("|| ||| | ||"));
    }

    #[test]
    fn test_render_zero_pads_to_three_digits() {
        let clock = FixedClock::new(false, 0, 0);

        let small = render_to_string(&Receipt::new(2.0, false), &clock);
        let large = render_to_string(&Receipt::new(180.0, false), &clock);

        assert!(small.contains("Value 002 minutes."));
        assert!(large.contains("Value 180 minutes."));
        assert!(small.contains("Car parked at 00:00"));
    }

    #[test]
    fn test_render_truncates_fractional_minutes() {
        let clock = FixedClock::new(false, 9, 5);

        // 61.5 from the progressive middle tier renders as 061
        let text = render_to_string(&Receipt::new(61.5, false), &clock);
        assert!(text.contains("Value 061 minutes."));

        // The stored value stays exact
        assert_eq!(Receipt::new(61.5, false).minutes, 61.5);
    }

    #[test]
    fn test_barcode_line_precedes_closing_banner() {
        let receipt = Receipt::new(5.0, true);
        let clock = FixedClock::new(true, 23, 59);

        let text = render_to_string(&receipt, &clock);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[4].contains("||"));
        assert!(lines[5].starts_with("----"));
    }
}
