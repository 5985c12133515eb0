//! Configuration of a generation run. The default matches the standard dataset: seven assets
//! quoted against each other on four exchanges.
use std::collections::HashSet;

use rand_distr::Uniform;

use crate::error::{GeneratorError, Result};
use crate::pair::{Asset, Exchange};

pub const DEFAULT_ASSETS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];
pub const DEFAULT_EXCHANGES: [&str; 4] = ["1", "2", "3", "4"];
pub const DEFAULT_DROP_PROBABILITY: f64 = 0.1;

/// Half-open range `[low, high)` that a uniform draw is taken from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    pub low: f64,
    pub high: f64,
}

impl SampleRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Panics if the range is empty, ranges should be checked with [GeneratorConfig::validate]
    /// before a distribution is built.
    pub fn uniform(&self) -> Uniform<f64> {
        Uniform::new(self.low, self.high)
    }

    fn check(&self, name: &str) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(GeneratorError::invalid_config(format!(
                "{name} bounds must be finite, got [{}, {})",
                self.low, self.high
            )));
        }
        if self.low >= self.high {
            return Err(GeneratorError::invalid_config(format!(
                "{name} is empty, got [{}, {})",
                self.low, self.high
            )));
        }
        if self.low < 0.0 {
            return Err(GeneratorError::invalid_config(format!(
                "{name} must not be negative, got [{}, {})",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub assets: Vec<Asset>,
    pub exchanges: Vec<Exchange>,
    /// Chance that an asset pair is not listed on an exchange at all.
    pub drop_probability: f64,
    /// Range of the intrinsic value sampled for each asset.
    pub value_range: SampleRange,
    /// Range of the additive noise applied to each side of a rate.
    pub noise_range: SampleRange,
    pub capacity_range: SampleRange,
}

impl GeneratorConfig {
    pub fn with_assets<S: Into<Asset>>(mut self, assets: impl IntoIterator<Item = S>) -> Self {
        self.assets = assets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exchanges<S: Into<Exchange>>(
        mut self,
        exchanges: impl IntoIterator<Item = S>,
    ) -> Self {
        self.exchanges = exchanges.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_drop_probability(mut self, drop_probability: f64) -> Self {
        self.drop_probability = drop_probability;
        self
    }

    pub fn with_value_range(mut self, low: f64, high: f64) -> Self {
        self.value_range = SampleRange::new(low, high);
        self
    }

    pub fn with_noise_range(mut self, low: f64, high: f64) -> Self {
        self.noise_range = SampleRange::new(low, high);
        self
    }

    pub fn with_capacity_range(mut self, low: f64, high: f64) -> Self {
        self.capacity_range = SampleRange::new(low, high);
        self
    }

    /// Upper bound on the number of records a run can produce: two for every unordered asset pair
    /// on every exchange.
    pub fn max_records(&self) -> usize {
        let assets = self.assets.len();
        let asset_pairs = assets * assets.saturating_sub(1) / 2;
        asset_pairs * self.exchanges.len() * 2
    }

    pub fn validate(&self) -> Result<()> {
        if !self.drop_probability.is_finite() || !(0.0..=1.0).contains(&self.drop_probability) {
            return Err(GeneratorError::invalid_config(format!(
                "drop probability must be within [0, 1], got {}",
                self.drop_probability
            )));
        }

        self.value_range.check("value range")?;
        self.noise_range.check("noise range")?;
        self.capacity_range.check("capacity range")?;

        //Both sides of a rate are a value plus noise, the largest side and the largest ratio of
        //two sides must stay finite
        let lowest_side = self.value_range.low + self.noise_range.low;
        let highest_side = self.value_range.high + self.noise_range.high;
        if !highest_side.is_finite() {
            return Err(GeneratorError::invalid_config(format!(
                "value plus noise overflows, got {} + {}",
                self.value_range.high, self.noise_range.high
            )));
        }
        if lowest_side > 0.0 && !(highest_side / lowest_side).is_finite() {
            return Err(GeneratorError::invalid_config(format!(
                "rate overflows, value plus noise ranges over [{lowest_side}, {highest_side})"
            )));
        }

        //Duplicate symbols would produce self-pairs or two listings for one pair on an exchange
        if let Some(asset) = first_duplicate(&self.assets) {
            return Err(GeneratorError::invalid_config(format!(
                "duplicate asset {asset}"
            )));
        }
        if let Some(exchange) = first_duplicate(&self.exchanges) {
            return Err(GeneratorError::invalid_config(format!(
                "duplicate exchange {exchange}"
            )));
        }
        Ok(())
    }
}

fn first_duplicate(symbols: &[String]) -> Option<&String> {
    let mut seen = HashSet::new();
    symbols.iter().find(|symbol| !seen.insert(symbol.as_str()))
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets: DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect(),
            exchanges: DEFAULT_EXCHANGES.iter().map(|s| s.to_string()).collect(),
            drop_probability: DEFAULT_DROP_PROBABILITY,
            value_range: SampleRange::new(0.0, 100.0),
            noise_range: SampleRange::new(0.0, 1.0),
            capacity_range: SampleRange::new(0.0, 50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GeneratorConfig;
    use crate::error::GeneratorError;

    #[test]
    fn test_that_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.assets.len(), 7);
        assert_eq!(config.exchanges.len(), 4);
        assert_eq!(config.max_records(), 168);
    }

    #[test]
    fn test_that_max_records_handles_small_alphabets() {
        let empty = GeneratorConfig::default().with_assets(Vec::<String>::new());
        assert_eq!(empty.max_records(), 0);

        let single = GeneratorConfig::default().with_assets(["A"]);
        assert_eq!(single.max_records(), 0);

        let two = GeneratorConfig::default()
            .with_assets(["A", "B"])
            .with_exchanges(["1"]);
        assert_eq!(two.max_records(), 2);
    }

    #[test]
    fn test_that_drop_probability_outside_unit_interval_is_rejected() {
        for drop in [-0.1, 1.1, f64::NAN] {
            let config = GeneratorConfig::default().with_drop_probability(drop);
            assert!(matches!(
                config.validate(),
                Err(GeneratorError::InvalidConfig { .. })
            ));
        }

        assert!(GeneratorConfig::default()
            .with_drop_probability(0.0)
            .validate()
            .is_ok());
        assert!(GeneratorConfig::default()
            .with_drop_probability(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_that_bad_ranges_are_rejected() {
        let empty = GeneratorConfig::default().with_capacity_range(10.0, 10.0);
        assert!(empty.validate().is_err());

        let negative = GeneratorConfig::default().with_value_range(-1.0, 100.0);
        assert!(negative.validate().is_err());

        let infinite = GeneratorConfig::default().with_noise_range(0.0, f64::INFINITY);
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_that_overflowing_value_plus_noise_is_rejected() {
        let config = GeneratorConfig::default()
            .with_value_range(0.0, 1.7e308)
            .with_noise_range(0.0, 1.7e308);
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_that_overflowing_rate_is_rejected() {
        let config = GeneratorConfig::default()
            .with_value_range(1e-300, 1.0)
            .with_noise_range(0.0, 1e10);
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidConfig { .. })
        ));

        let bounded = GeneratorConfig::default()
            .with_value_range(1.0, 100.0)
            .with_noise_range(0.0, 1e10);
        assert!(bounded.validate().is_ok());
    }

    #[test]
    fn test_that_zero_lower_bounds_are_accepted() {
        //Zero draws are redrawn by the generator so the default ranges stay valid
        let config = GeneratorConfig::default();
        assert_eq!(config.value_range.low + config.noise_range.low, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_that_duplicate_symbols_are_rejected() {
        let assets = GeneratorConfig::default().with_assets(["A", "B", "A"]);
        let err = assets.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid generator config: duplicate asset A");

        let exchanges = GeneratorConfig::default().with_exchanges(["1", "1"]);
        assert!(exchanges.validate().is_err());
    }
}
