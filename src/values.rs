use rand::Rng;
use rand_distr::Distribution;

use crate::config::SampleRange;
use crate::pair::Asset;

/// Intrinsic value of each asset for a single run.
///
/// Rates between two assets are derived from the ratio of their values so that the same pair is
/// priced similarly on every exchange. Values only live as long as the run that sampled them.
#[derive(Clone, Debug)]
pub struct AssetValues {
    assets: Vec<Asset>,
    values: Vec<f64>,
}

impl AssetValues {
    /// Draws one value per asset, in the order the assets are given.
    pub fn sample<R: Rng + ?Sized>(assets: &[Asset], range: &SampleRange, rng: &mut R) -> Self {
        let value_dist = range.uniform();
        let values = assets.iter().map(|_| value_dist.sample(&mut *rng)).collect();
        Self {
            assets: assets.to_vec(),
            values,
        }
    }

    pub fn get(&self, asset: &str) -> Option<f64> {
        let pos = self.assets.iter().position(|a| a == asset)?;
        self.values.get(pos).copied()
    }

    pub(crate) fn get_by_position(&self, pos: usize) -> f64 {
        self.values[pos]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
