use serde::{Deserialize, Serialize};

/// Symbol for a tradable unit of value.
pub type Asset = String;

/// Symbol for a venue on which a trading pair may be listed.
pub type Exchange = String;

/// Directed and priced conversion from `quote_asset` to `base_asset` on a single exchange.
///
/// `rate` is the price of one unit of the quote asset in units of the base asset. Listings are
/// always emitted in pairs so for every `TradingPair` produced by a run there is another on the
/// same exchange with the assets swapped and the reciprocal rate.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TradingPair {
    pub exchange: Exchange,
    pub quote_asset: Asset,
    pub base_asset: Asset,
    pub rate: f64,
    pub capacity: f64,
}

impl TradingPair {
    pub fn new(
        exchange: impl Into<Exchange>,
        quote_asset: impl Into<Asset>,
        base_asset: impl Into<Asset>,
        rate: f64,
        capacity: f64,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            quote_asset: quote_asset.into(),
            base_asset: base_asset.into(),
            rate,
            capacity,
        }
    }

    /// True if `other` lists the same assets in the opposite direction on the same exchange.
    pub fn is_reverse_of(&self, other: &TradingPair) -> bool {
        self.exchange == other.exchange
            && self.quote_asset == other.base_asset
            && self.base_asset == other.quote_asset
    }
}

#[cfg(test)]
mod tests {
    use super::TradingPair;

    #[test]
    fn test_that_pair_serializes_with_camel_case_fields() {
        let pair = TradingPair::new("1", "A", "B", 2.0, 10.0);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(
            json,
            r#"{"exchange":"1","quoteAsset":"A","baseAsset":"B","rate":2.0,"capacity":10.0}"#
        );
    }

    #[test]
    fn test_that_reverse_requires_same_exchange() {
        let forward = TradingPair::new("1", "A", "B", 2.0, 10.0);
        let reverse = TradingPair::new("1", "B", "A", 0.5, 3.0);
        let elsewhere = TradingPair::new("2", "B", "A", 0.5, 3.0);

        assert!(reverse.is_reverse_of(&forward));
        assert!(forward.is_reverse_of(&reverse));
        assert!(!elsewhere.is_reverse_of(&forward));
        assert!(!forward.is_reverse_of(&forward));
    }

    #[test]
    fn test_that_unknown_fields_are_rejected() {
        let json = r#"{"exchange":"1","quoteAsset":"A","baseAsset":"B","rate":2.0,"capacity":1.0,"fee":0.1}"#;
        assert!(serde_json::from_str::<TradingPair>(json).is_err());
    }
}
