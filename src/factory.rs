// 🏭 Station Factories - Deployment profiles as data
// A factory binds one rate strategy and one receipt style into a named
// town profile. Stations are built against a factory and never reconfigured;
// a different town means a different station.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::clock::{SystemClock, TimeSource};
use crate::rates::{RateStrategy, StrategyConfig};
use crate::receipt::Receipt;

// ============================================================================
// STATION FACTORY TRAIT
// ============================================================================

/// Binds a rate strategy and a receipt-construction rule for one deployment.
pub trait StationFactory {
    /// Profile name ("AlphaTown", ...)
    fn name(&self) -> &str;

    /// The rate strategy stations in this deployment convert money with.
    fn create_rate_strategy(&self) -> Arc<dyn RateStrategy>;

    /// A receipt for `minutes` in this deployment's style.
    fn create_receipt(&self, minutes: f64) -> Receipt;
}

// ============================================================================
// PROFILE CONFIG
// ============================================================================

/// Declarative deployment profile: name, rate rule, receipt style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile name, unique within a registry
    pub name: String,

    /// Rate rule as data
    pub strategy: StrategyConfig,

    /// Print a barcode line on receipts
    #[serde(default)]
    pub barcode: bool,
}

// ============================================================================
// TOWN FACTORY
// ============================================================================

/// `StationFactory` driven by a `ProfileConfig`.
///
/// The strategy is built once at factory construction and shared (read-only)
/// by every station the factory serves.
pub struct TownFactory {
    config: ProfileConfig,
    strategy: Arc<dyn RateStrategy>,
}

impl TownFactory {
    pub fn new(config: ProfileConfig, clock: Arc<dyn TimeSource>) -> Self {
        let strategy = config.strategy.build(clock);
        TownFactory { config, strategy }
    }
}

impl StationFactory for TownFactory {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn create_rate_strategy(&self) -> Arc<dyn RateStrategy> {
        Arc::clone(&self.strategy)
    }

    fn create_receipt(&self, minutes: f64) -> Receipt {
        Receipt::new(minutes, self.config.barcode)
    }
}

// ============================================================================
// PROFILE REGISTRY
// ============================================================================

/// Registry of deployment profiles, keyed by profile name.
///
/// Ships the four known towns by default; extra profiles can be loaded from a
/// JSON file. The injected clock is shared by every factory the registry
/// builds, so tests pin one `FixedClock` for the whole fleet.
pub struct ProfileRegistry {
    clock: Arc<dyn TimeSource>,
    profiles: HashMap<String, ProfileConfig>,
}

impl ProfileRegistry {
    /// Registry with the built-in town profiles and the system clock.
    pub fn new() -> Self {
        ProfileRegistry::with_clock(Arc::new(SystemClock))
    }

    /// Registry with the built-in town profiles and an explicit clock.
    pub fn with_clock(clock: Arc<dyn TimeSource>) -> Self {
        let mut registry = ProfileRegistry {
            clock,
            profiles: HashMap::new(),
        };

        registry.register_default_towns();
        registry
    }

    /// Load additional profiles from a JSON array of `ProfileConfig`.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read profile file: {:?}", path.as_ref()))?;

        let configs: Vec<ProfileConfig> =
            serde_json::from_str(&content).context("Failed to parse profile JSON")?;

        let count = configs.len();
        for config in configs {
            self.register(config);
        }

        Ok(count)
    }

    /// Registry built from a JSON file only (plus the defaults).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut registry = ProfileRegistry::new();
        registry.load_file(path)?;
        Ok(registry)
    }

    /// The four known town deployments.
    fn register_default_towns(&mut self) {
        // 1. AlphaTown: $1.50/hour flat
        self.register(ProfileConfig {
            name: "AlphaTown".to_string(),
            strategy: StrategyConfig::Linear {
                rate_cents_per_hour: 150,
            },
            barcode: false,
        });

        // 2. BetaTown: progressive rate, barcoded receipts
        self.register(ProfileConfig {
            name: "BetaTown".to_string(),
            strategy: StrategyConfig::Progressive,
            barcode: true,
        });

        // 3. GammaTown: $2.00/hour flat
        self.register(ProfileConfig {
            name: "GammaTown".to_string(),
            strategy: StrategyConfig::Linear {
                rate_cents_per_hour: 200,
            },
            barcode: false,
        });

        // 4. DeltaTown: progressive on weekends, AlphaTown linear on weekdays
        self.register(ProfileConfig {
            name: "DeltaTown".to_string(),
            strategy: StrategyConfig::Alternating {
                weekend: Box::new(StrategyConfig::Progressive),
                weekday: Box::new(StrategyConfig::Linear {
                    rate_cents_per_hour: 150,
                }),
            },
            barcode: false,
        });
    }

    /// Add or replace a profile.
    pub fn register(&mut self, config: ProfileConfig) {
        self.profiles.insert(config.name.clone(), config);
    }

    /// Build the factory for a named profile, if registered.
    pub fn factory(&self, name: &str) -> Option<TownFactory> {
        self.profiles
            .get(name)
            .map(|config| TownFactory::new(config.clone(), Arc::clone(&self.clock)))
    }

    /// Registered profile names, sorted.
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
