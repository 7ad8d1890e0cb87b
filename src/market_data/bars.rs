use crate::market_data::enums::{DataSource, MarketDataSchema};
use crate::market_data::MarketDataRecord;
use crate::{Price, SymbolId, TimeStamp, Volume};
use chrono::{DateTime, NaiveDate, Utc};
use rkyv::{Archive, Deserialize as Deserialize_rkyv, Serialize as Serialize_rkyv};
use serde_derive::{Deserialize, Serialize};

/// A daily OHLCV bar aggregated from trades. `ts_event` is the bar open in
/// nanoseconds since the UNIX epoch.
#[derive(Clone, Serialize, Deserialize, Serialize_rkyv, Deserialize_rkyv, Archive, PartialEq, Debug)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub struct DailyBar {
    pub symbol: SymbolId,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub ts_event: TimeStamp,
    pub volume: Option<Volume>,
    pub rtype: Option<u8>,
    pub instrument_id: Option<u32>,
    pub publisher_id: Option<u16>,
    pub vendor: DataSource,
}

impl DailyBar {
    pub fn ts_event_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.ts_event)
    }

    /// Calendar date of the bar open, in UTC.
    pub fn date(&self) -> NaiveDate {
        self.ts_event_utc().date_naive()
    }

    pub fn range(&self) -> Price {
        self.high - self.low
    }
}

impl MarketDataRecord for DailyBar {
    fn schema(&self) -> MarketDataSchema {
        MarketDataSchema::Ohlcv1D
    }

    fn table_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.symbol.to_lowercase(),
            self.schema().short_name(),
            self.vendor
        )
    }

    fn stream_name(&self) -> String {
        format!("hist:{}:{}", self.vendor, self.symbol)
    }
}
