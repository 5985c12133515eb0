//! # What is pairgen?
//!
//! Pairgen produces synthetic market data: a flat list of trading pairs quoting every pair of
//! assets against each other across a set of exchanges. The data has no meaning beyond being
//! plausible enough to exercise code that consumes trading pairs, for example route-finding or
//! rate optimisation over a graph of assets.
//!
//! # Implementation
//!
//! A single run is composed of:
//! - A [GeneratorConfig](crate::config::GeneratorConfig) holding the asset and exchange alphabets
//! and the ranges that every random draw is taken from. The default reproduces the standard
//! dataset of seven assets on four exchanges.
//! - [AssetValues](crate::values::AssetValues), one intrinsic value per asset sampled at the start
//! of the run. Values are used to bias rates so that the data is roughly consistent across
//! exchanges, they are never emitted.
//! - A [Generator](crate::generator::Generator) that walks every unordered pair of assets and
//! every exchange, randomly drops some listings and emits a forward and reverse
//! [TradingPair](crate::pair::TradingPair) for the rest. Rates of the two directions are exact
//! reciprocals, capacities are sampled independently.
//! - [Output](crate::output) which serializes the sequence as a single JSON array.
//!
//! Randomness is never global: every operation that samples takes the rng as an argument so a
//! seeded rng gives byte-identical output across runs.
//!
//! ```text
//! cargo run --bin gen_data > pairs.json
//! ```
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod pair;
pub mod values;
