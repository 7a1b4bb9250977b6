// 🅿️ Pay Station - Transaction session logic
// One station, one coin total, one bound deployment profile. Everything here
// is straight-line bookkeeping; the decision logic lives in the strategies.

use std::sync::Arc;
use thiserror::Error;

use crate::factory::StationFactory;
use crate::rates::RateStrategy;
use crate::receipt::Receipt;

/// Coin values the station accepts, in cents.
pub const LEGAL_COINS: [u32; 3] = [5, 10, 25];

// ============================================================================
// ERRORS
// ============================================================================

/// The only failure a station can produce: a coin outside the legal set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinError {
    #[error("invalid coin: {value} cents (legal coins: 5, 10, 25)")]
    InvalidCoin { value: u32 },
}

// ============================================================================
// PAY STATION
// ============================================================================

/// Stateful pay station session.
///
/// Holds the running coin total for the current transaction. The rate
/// strategy and receipt style are bound from the factory at construction and
/// fixed for the station's lifetime; a different deployment profile means a
/// new station.
pub struct PayStation {
    inserted_cents: u32,
    strategy: Arc<dyn RateStrategy>,
    factory: Box<dyn StationFactory>,
}

impl PayStation {
    pub fn new(factory: impl StationFactory + 'static) -> Self {
        PayStation {
            inserted_cents: 0,
            strategy: factory.create_rate_strategy(),
            factory: Box::new(factory),
        }
    }

    /// Deployment profile this station was built for.
    pub fn profile_name(&self) -> &str {
        self.factory.name()
    }

    /// Insert a coin.
    ///
    /// Rejects values outside {5, 10, 25} with `CoinError::InvalidCoin`,
    /// leaving the running total untouched.
    pub fn add_payment(&mut self, coin_cents: u32) -> Result<(), CoinError> {
        if !LEGAL_COINS.contains(&coin_cents) {
            return Err(CoinError::InvalidCoin { value: coin_cents });
        }

        self.inserted_cents += coin_cents;
        Ok(())
    }

    /// Minutes purchased so far. Pure read, recomputed from the running
    /// total on every call.
    pub fn read_display(&self) -> f64 {
        self.strategy.minutes_for(self.inserted_cents)
    }

    /// Complete the transaction: returns a receipt for the current display
    /// value and resets the station for the next customer.
    pub fn buy(&mut self) -> Receipt {
        let receipt = self.factory.create_receipt(self.read_display());
        self.reset();
        receipt
    }

    /// Abort the transaction. Resets the station; no receipt, no refund
    /// bookkeeping (the coin return is hardware, not logic).
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.inserted_cents = 0;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::factory::ProfileRegistry;

    fn station(profile: &str) -> PayStation {
        let registry = ProfileRegistry::with_clock(Arc::new(FixedClock::new(false, 10, 0)));
        PayStation::new(registry.factory(profile).unwrap())
    }

    #[test]
    fn test_new_station_displays_zero() {
        let ps = station("AlphaTown");
        assert_eq!(ps.read_display(), 0.0);
        assert_eq!(ps.profile_name(), "AlphaTown");
    }

    #[test]
    fn test_display_tracks_running_sum() {
        let mut ps = station("AlphaTown");

        ps.add_payment(25).unwrap();
        assert_eq!(ps.read_display(), 10.0);

        ps.add_payment(25).unwrap();
        ps.add_payment(25).unwrap();
        ps.add_payment(25).unwrap();
        // 100¢ at linear(150): 40 minutes, order-independent
        assert_eq!(ps.read_display(), 40.0);
    }

    #[test]
    fn test_illegal_coin_rejected_state_unchanged() {
        let mut ps = station("AlphaTown");
        ps.add_payment(10).unwrap();
        let before = ps.read_display();

        let err = ps.add_payment(17).unwrap_err();
        assert_eq!(err, CoinError::InvalidCoin { value: 17 });
        assert_eq!(ps.read_display(), before);

        assert!(ps.add_payment(0).is_err());
        assert!(ps.add_payment(100).is_err());
        assert_eq!(ps.read_display(), before);
    }

    #[test]
    fn test_buy_returns_display_value_and_resets() {
        let mut ps = station("AlphaTown");
        ps.add_payment(25).unwrap();
        ps.add_payment(25).unwrap();

        let shown = ps.read_display();
        let receipt = ps.buy();

        assert_eq!(receipt.minutes, shown);
        assert_eq!(ps.read_display(), 0.0);
    }

    #[test]
    fn test_cancel_resets_without_receipt() {
        let mut ps = station("AlphaTown");
        ps.add_payment(25).unwrap();

        ps.cancel();
        assert_eq!(ps.read_display(), 0.0);

        // Next transaction starts clean
        ps.add_payment(5).unwrap();
        assert_eq!(ps.read_display(), 2.0);
    }

    #[test]
    fn test_receipt_style_follows_profile() {
        let mut beta = station("BetaTown");
        beta.add_payment(25).unwrap();
        assert!(beta.buy().barcode);

        let mut alpha = station("AlphaTown");
        alpha.add_payment(25).unwrap();
        assert!(!alpha.buy().barcode);
    }

    #[test]
    fn test_separate_stations_do_not_share_totals() {
        let mut a = station("AlphaTown");
        let mut b = station("AlphaTown");

        a.add_payment(25).unwrap();
        b.add_payment(5).unwrap();

        assert_eq!(a.read_display(), 10.0);
        assert_eq!(b.read_display(), 2.0);
    }
}
