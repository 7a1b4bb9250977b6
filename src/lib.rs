// Pay Station - Core Library
// Parking pay station logic: coins in, minutes out, receipt on buy.
// Rate rules and receipt styles vary per town deployment via factories.

pub mod clock;
pub mod rates;
pub mod receipt;
pub mod factory;
pub mod station;

// Re-export commonly used types
pub use clock::{FixedClock, SystemClock, TimeSource};
pub use rates::{
    AlternatingRateStrategy, DecisionFn, LinearRateStrategy, ProgressiveRateStrategy,
    RateStrategy, StrategyConfig,
};
pub use receipt::Receipt;
pub use factory::{ProfileConfig, ProfileRegistry, StationFactory, TownFactory};
pub use station::{CoinError, PayStation, LEGAL_COINS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
