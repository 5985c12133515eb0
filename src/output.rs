//! Serialization of generated trading pairs. The whole sequence is written as one JSON array.
use std::io::Write;

use crate::error::Result;
use crate::pair::TradingPair;

pub fn to_json(pairs: &[TradingPair]) -> Result<String> {
    Ok(serde_json::to_string(pairs)?)
}

/// Writes `pairs` as a JSON array followed by a newline and flushes the writer.
///
/// Serialization happens in full before anything is written so a failure never leaves a partial
/// array behind.
pub fn write_pairs<W: Write>(mut writer: W, pairs: &[TradingPair]) -> Result<()> {
    let json = to_json(pairs)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
