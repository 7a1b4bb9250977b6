// 💰 Rate Strategies - Money to minutes
// Pure mappings from accumulated cents to purchased parking minutes.
// Each town deployment plugs in its own mapping; the station never knows
// which one it is talking to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::clock::TimeSource;

// ============================================================================
// RATE STRATEGY TRAIT
// ============================================================================

/// A pure mapping from accumulated amount (cents) to purchased minutes.
///
/// Implementations hold only fixed configuration set at construction and are
/// evaluated fresh on every call. They are `Send + Sync` so a single strategy
/// instance can be shared read-only across many stations.
pub trait RateStrategy: Send + Sync {
    /// Minutes purchased for `amount_cents`. Must map 0 to 0.0.
    fn minutes_for(&self, amount_cents: u32) -> f64;
}

/// Zero-argument predicate driving an alternating strategy.
///
/// Reads external time state only (e.g. "is it a weekend"); must never depend
/// on the amount being converted.
pub type DecisionFn = Box<dyn Fn() -> bool + Send + Sync>;

// ============================================================================
// LINEAR
// ============================================================================

/// Linear rate: a fixed price per hour of parking.
///
/// Uses true division, so fractional minute values are preserved
/// (25 cents at 150¢/hour buys exactly 10.0 minutes, 5 cents buys 2.0,
/// but 5 cents at 200¢/hour buys 1.5).
#[derive(Debug, Clone, Copy)]
pub struct LinearRateStrategy {
    rate_cents_per_hour: u32,
}

impl LinearRateStrategy {
    pub fn new(rate_cents_per_hour: u32) -> Self {
        LinearRateStrategy {
            rate_cents_per_hour,
        }
    }
}

impl RateStrategy for LinearRateStrategy {
    fn minutes_for(&self, amount_cents: u32) -> f64 {
        amount_cents as f64 / self.rate_cents_per_hour as f64 * 60.0
    }
}

// ============================================================================
// PROGRESSIVE
// ============================================================================

/// Progressive (tiered) rate: parking gets more expensive the longer you stay.
///
/// - up to 150¢:        2 minutes per 5¢
/// - 150¢ to 350¢:      60 minutes, then 1.5 minutes per 5¢
/// - beyond 350¢:       120 minutes, then 1 minute per 5¢
///
/// Tier boundaries are inclusive (exactly 150¢ uses the first tier, exactly
/// 350¢ the second). Each tier floor-divides its slice of the amount by 5
/// before applying the multiplier; the 1.5 multiplier in the middle tier can
/// yield fractional minutes. The mixed arithmetic is intentional and must be
/// preserved exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressiveRateStrategy;

impl ProgressiveRateStrategy {
    pub fn new() -> Self {
        ProgressiveRateStrategy
    }
}

impl RateStrategy for ProgressiveRateStrategy {
    fn minutes_for(&self, amount_cents: u32) -> f64 {
        if amount_cents <= 150 {
            (amount_cents / 5) as f64 * 2.0
        } else if amount_cents <= 350 {
            60.0 + ((amount_cents - 150) / 5) as f64 * 1.5
        } else {
            120.0 + ((amount_cents - 350) / 5) as f64
        }
    }
}

// ============================================================================
// ALTERNATING
// ============================================================================

/// Alternating rate: delegates to one of two sub-strategies based on an
/// injected zero-argument decision (typically "is it a weekend").
///
/// The decision is re-evaluated on every conversion, so a station left
/// running across a Friday midnight switches rates without intervention.
pub struct AlternatingRateStrategy {
    decision: DecisionFn,
    if_true: Arc<dyn RateStrategy>,
    if_false: Arc<dyn RateStrategy>,
}

impl AlternatingRateStrategy {
    pub fn new(
        decision: DecisionFn,
        if_true: Arc<dyn RateStrategy>,
        if_false: Arc<dyn RateStrategy>,
    ) -> Self {
        AlternatingRateStrategy {
            decision,
            if_true,
            if_false,
        }
    }

    /// Convenience constructor for the common weekend/weekday split.
    pub fn weekend_split(
        clock: Arc<dyn TimeSource>,
        weekend: Arc<dyn RateStrategy>,
        weekday: Arc<dyn RateStrategy>,
    ) -> Self {
        AlternatingRateStrategy::new(
            Box::new(move || clock.is_weekend()),
            weekend,
            weekday,
        )
    }
}

impl RateStrategy for AlternatingRateStrategy {
    fn minutes_for(&self, amount_cents: u32) -> f64 {
        if (self.decision)() {
            self.if_true.minutes_for(amount_cents)
        } else {
            self.if_false.minutes_for(amount_cents)
        }
    }
}

impl fmt::Debug for AlternatingRateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlternatingRateStrategy").finish_non_exhaustive()
    }
}

// ============================================================================
// STRATEGY CONFIG (rules as data)
// ============================================================================

/// Declarative description of a rate strategy, for profile files.
///
/// The data form only knows the weekend/weekday split for alternating rates;
/// arbitrary decision functions are a code-level concern
/// (`AlternatingRateStrategy::new`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Linear {
        rate_cents_per_hour: u32,
    },
    Progressive,
    Alternating {
        weekend: Box<StrategyConfig>,
        weekday: Box<StrategyConfig>,
    },
}

impl StrategyConfig {
    /// Build the runtime strategy this config describes.
    ///
    /// The clock is only consulted by alternating strategies; linear and
    /// progressive ignore it.
    pub fn build(&self, clock: Arc<dyn TimeSource>) -> Arc<dyn RateStrategy> {
        match self {
            StrategyConfig::Linear {
                rate_cents_per_hour,
            } => Arc::new(LinearRateStrategy::new(*rate_cents_per_hour)),
            StrategyConfig::Progressive => Arc::new(ProgressiveRateStrategy::new()),
            StrategyConfig::Alternating { weekend, weekday } => {
                let weekend_rate = weekend.build(Arc::clone(&clock));
                let weekday_rate = weekday.build(Arc::clone(&clock));
                Arc::new(AlternatingRateStrategy::weekend_split(
                    clock,
                    weekend_rate,
                    weekday_rate,
                ))
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
