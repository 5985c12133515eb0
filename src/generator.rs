//! Generation of trading pairs.
//!
//! The generator walks every unordered pair of assets `(i, j)` with `i` before `j` in the asset
//! alphabet and, for each pair, every exchange in order. Each listing is dropped with the
//! configured probability, otherwise a forward pair `i -> j` is emitted immediately followed by
//! the reverse pair `j -> i` with the reciprocal rate.
use std::iter::FusedIterator;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::pair::TradingPair;
use crate::values::AssetValues;

#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Lazily produces the trading pairs for one run.
    ///
    /// Asset values are drawn when this is called, everything else is drawn as the iterator
    /// advances. Draw order for each listing is: drop decision, numerator noise, denominator
    /// noise, forward capacity, reverse capacity. Once exhausted the iterator keeps returning
    /// `None`, a new run needs a new call.
    pub fn pairs<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> TradingPairs<'a, R> {
        let values = AssetValues::sample(&self.config.assets, &self.config.value_range, rng);
        TradingPairs {
            config: &self.config,
            values,
            rng,
            drop_dist: Uniform::new(0.0, 1.0),
            noise_dist: self.config.noise_range.uniform(),
            capacity_dist: self.config.capacity_range.uniform(),
            first: 0,
            second: 1,
            exchange: 0,
            reverse: None,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TradingPair> {
        let pairs: Vec<TradingPair> = self.pairs(rng).collect();
        debug!(
            "GENERATOR: Generated {} trading pairs out of a possible {}",
            pairs.len(),
            self.config.max_records()
        );
        pairs
    }
}

/// Iterator returned by [Generator::pairs].
pub struct TradingPairs<'a, R: Rng + ?Sized> {
    config: &'a GeneratorConfig,
    values: AssetValues,
    rng: &'a mut R,
    drop_dist: Uniform<f64>,
    noise_dist: Uniform<f64>,
    capacity_dist: Uniform<f64>,
    //Position of the next listing, assets are indexed by position in the alphabet
    first: usize,
    second: usize,
    exchange: usize,
    reverse: Option<TradingPair>,
}

impl<'a, R: Rng + ?Sized> TradingPairs<'a, R> {
    /// Asset values sampled for this run.
    pub fn values(&self) -> &AssetValues {
        &self.values
    }

    fn next_listing(&mut self) -> Option<(usize, usize, usize)> {
        let assets = self.config.assets.len();
        let exchanges = self.config.exchanges.len();
        if exchanges == 0 {
            return None;
        }

        loop {
            if self.first + 1 >= assets {
                return None;
            }

            if self.exchange < exchanges {
                let listing = (self.first, self.second, self.exchange);
                self.exchange += 1;
                return Some(listing);
            }

            self.exchange = 0;
            self.second += 1;
            if self.second >= assets {
                self.first += 1;
                self.second = self.first + 1;
            }
        }
    }

    /// Ratio of the noisy values of two assets.
    ///
    /// Both sides are redrawn if the rate or its reciprocal is zero or not finite, which can only
    /// happen when a lower bound of zero is drawn exactly on both value and noise.
    fn noisy_rate(&mut self, first: usize, second: usize) -> f64 {
        loop {
            let numerator =
                self.values.get_by_position(first) + self.noise_dist.sample(&mut *self.rng);
            let denominator =
                self.values.get_by_position(second) + self.noise_dist.sample(&mut *self.rng);
            let rate = numerator / denominator;
            if rate.is_finite() && rate > 0.0 && (1.0 / rate).is_finite() {
                return rate;
            }
            trace!("GENERATOR: Redrawing degenerate rate {}", rate);
        }
    }

    fn remaining_listings(&self) -> usize {
        let assets = self.config.assets.len();
        let exchanges = self.config.exchanges.len();
        if self.first + 1 >= assets {
            return 0;
        }

        let total = assets * (assets - 1) / 2 * exchanges;
        let pair_pos =
            self.first * (2 * assets - self.first - 1) / 2 + (self.second - self.first - 1);
        total - (pair_pos * exchanges + self.exchange)
    }
}

impl<'a, R: Rng + ?Sized> Iterator for TradingPairs<'a, R> {
    type Item = TradingPair;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(reverse) = self.reverse.take() {
            return Some(reverse);
        }

        let config = self.config;
        while let Some((first, second, exchange)) = self.next_listing() {
            let asset = &config.assets[first];
            let other_asset = &config.assets[second];
            let exchange = &config.exchanges[exchange];

            if self.drop_dist.sample(&mut *self.rng) < config.drop_probability {
                trace!(
                    "GENERATOR: Dropped {}/{} on exchange {}",
                    asset,
                    other_asset,
                    exchange
                );
                continue;
            }

            let rate = self.noisy_rate(first, second);

            let forward = TradingPair::new(
                exchange.clone(),
                asset.clone(),
                other_asset.clone(),
                rate,
                self.capacity_dist.sample(&mut *self.rng),
            );
            self.reverse = Some(TradingPair::new(
                exchange.clone(),
                other_asset.clone(),
                asset.clone(),
                1.0 / rate,
                self.capacity_dist.sample(&mut *self.rng),
            ));
            return Some(forward);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.reverse.is_some());
        (pending, Some(pending + 2 * self.remaining_listings()))
    }
}

impl<'a, R: Rng + ?Sized> FusedIterator for TradingPairs<'a, R> {}

/// Generates the standard dataset from a seeded rng, intended for tests and benches that need
/// data but don't care about its content.
pub fn random_pairs(seed: u64) -> Vec<TradingPair> {
    let mut rng = StdRng::seed_from_u64(seed);
    Generator::default().generate(&mut rng)
}
