//! Real-time price/volume override applied before scoring

use crate::api::QuoteMap;
use crate::record::{FieldValue, StockRecord};

pub const PRICE_FIELD: &str = "Price";
pub const VOLUME_FIELD: &str = "Volume";

/// Overwrite `Price` and `Volume` on every record from a fetched quote batch
///
/// With `None` (no fetch was made) the static values are kept. With a map,
/// a symbol missing from it gets both fields set to `Unavailable`, replacing
/// whatever the reference table held. `Average Volume` is never touched.
///
/// Returns how many records received a live quote.
pub fn apply_realtime_override(records: &mut [StockRecord], quotes: Option<&QuoteMap>) -> usize {
    let Some(quotes) = quotes else {
        return 0;
    };

    let mut applied = 0;
    for record in records.iter_mut() {
        match quotes.get(&record.symbol) {
            Some(quote) => {
                record.set(PRICE_FIELD, FieldValue::Number(quote.price));
                record.set(VOLUME_FIELD, FieldValue::Number(quote.volume as f64));
                applied += 1;
            }
            None => {
                tracing::debug!(symbol = %record.symbol, "No live quote, marking price and volume unavailable");
                record.set(PRICE_FIELD, FieldValue::Unavailable);
                record.set(VOLUME_FIELD, FieldValue::Unavailable);
            }
        }
    }
    applied
}
