use crate::market_data::enums::{BookAction, BookSide, DataSource, MarketDataSchema};
use crate::market_data::MarketDataRecord;
use crate::reference::enums::AssetKind;
use crate::{Price, SymbolId, TimeStamp};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rkyv::{Archive, Deserialize as Deserialize_rkyv, Serialize as Serialize_rkyv};
use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

/// A single order book event as captured from a market-by-order feed,
/// shaped for storage and book reconstruction.
///
/// Timestamps are nanoseconds since the UNIX epoch; `price` is a signed
/// integer where one unit is 1e-9 of the instrument's currency.
#[derive(Clone, Serialize, Deserialize, Serialize_rkyv, Deserialize_rkyv, Archive, PartialEq, Debug)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub struct OrderBookEvent {
    /// Capture server received timestamp.
    pub ts_recv: TimeStamp,
    /// Matching engine received timestamp.
    pub ts_event: TimeStamp,
    /// Matching-engine-sending delta, nanoseconds before `ts_recv`.
    pub ts_in_delta: TimeStamp,

    pub instrument_id: u32,
    pub symbol: SymbolId,
    pub publisher_id: u16,
    /// Record type; each schema corresponds with a single rtype value.
    pub rtype: u8,
    /// Message sequence number assigned at the venue.
    pub sequence: u32,

    pub action: BookAction,
    pub side: BookSide,
    /// Order price in nano units.
    pub price: i64,
    pub size: u32,

    /// Bit field for event end, message characteristics and data quality.
    pub flags: u8,
    pub channel_id: Option<u8>,
    /// Book level where the update occurred.
    pub depth: Option<u8>,

    pub bid_px_00: Option<Price>,
    pub bid_sz_00: Option<u32>,
    pub bid_ct_00: Option<u32>,
    pub ask_px_00: Option<Price>,
    pub ask_sz_00: Option<u32>,
    pub ask_ct_00: Option<u32>,
}

impl OrderBookEvent {
    pub fn ts_recv_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.ts_recv)
    }

    pub fn ts_event_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.ts_event)
    }

    pub fn time_local(&self, time_zone: &Tz) -> DateTime<Tz> {
        time_zone.from_utc_datetime(&self.ts_event_utc().naive_utc())
    }

    /// Nano-unit price as a decimal.
    pub fn price_decimal(&self) -> Price {
        Decimal::new(self.price, 9)
    }

    pub fn is_trade(&self) -> bool {
        matches!(self.action, BookAction::Trade | BookAction::Fill)
    }

    pub fn is_book_update(&self) -> bool {
        matches!(
            self.action,
            BookAction::Add | BookAction::Cancel | BookAction::Modify
        )
    }
}

impl MarketDataRecord for OrderBookEvent {
    fn schema(&self) -> MarketDataSchema {
        MarketDataSchema::Mbo
    }

    fn table_name(&self) -> String {
        format!("{}_{}", self.symbol.to_lowercase(), self.schema().short_name())
    }

    fn stream_name(&self) -> String {
        format!("rt:{}", self.symbol)
    }
}

/// Top-of-book (MBP-1) record with vendor metadata, the realtime cousin of
/// [`OrderBookEvent`].
#[derive(Clone, Serialize, Deserialize, Serialize_rkyv, Deserialize_rkyv, Archive, PartialEq, Debug)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub struct MarketByPriceTop {
    pub ts_recv: TimeStamp,
    pub ts_event: TimeStamp,
    pub ts_in_delta: TimeStamp,

    pub instrument_id: u32,
    pub asset_kind: AssetKind,
    pub symbol: SymbolId,
    pub publisher_id: u16,
    pub rtype: u8,
    pub sequence: u32,

    pub action: BookAction,
    pub side: BookSide,
    pub price: i64,
    pub size: u32,

    pub flags: u8,
    pub vendor: DataSource,
    pub channel_id: Option<u8>,
    pub depth: Option<u8>,

    pub bid_px_00: Option<Price>,
    pub bid_sz_00: Option<u32>,
    pub bid_ct_00: Option<u32>,
    pub mid_px_00: Option<Price>,
    pub ask_px_00: Option<Price>,
    pub ask_sz_00: Option<u32>,
    pub ask_ct_00: Option<u32>,
}

impl MarketByPriceTop {
    pub fn ts_event_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.ts_event)
    }

    pub fn price_decimal(&self) -> Price {
        Decimal::new(self.price, 9)
    }
}

impl MarketDataRecord for MarketByPriceTop {
    fn schema(&self) -> MarketDataSchema {
        MarketDataSchema::Mbp1
    }

    fn table_name(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.asset_kind,
            self.symbol.to_lowercase(),
            self.schema().short_name(),
            self.vendor
        )
    }

    fn stream_name(&self) -> String {
        format!("rt:{}:{}", self.vendor, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade_event() -> OrderBookEvent {
        OrderBookEvent {
            ts_recv: 1_704_722_401_000_000_500,
            ts_event: 1_704_722_401_000_000_000,
            ts_in_delta: 500,
            instrument_id: 42,
            symbol: "CLZ24".to_string(),
            publisher_id: 1,
            rtype: 160,
            sequence: 77,
            action: BookAction::Trade,
            side: BookSide::Bid,
            price: 72_345_000_000,
            size: 3,
            flags: 0,
            channel_id: None,
            depth: Some(0),
            bid_px_00: Some(dec!(72.34)),
            bid_sz_00: Some(10),
            bid_ct_00: Some(4),
            ask_px_00: Some(dec!(72.35)),
            ask_sz_00: Some(8),
            ask_ct_00: Some(2),
        }
    }

    #[test]
    fn nano_price_converts_exactly() {
        assert_eq!(trade_event().price_decimal(), dec!(72.345));
    }

    #[test]
    fn timestamps_convert_to_utc() {
        let event = trade_event();
        assert_eq!(event.ts_event_utc().timestamp(), 1_704_722_401);
        assert_eq!(
            event.ts_recv_utc().timestamp_subsec_nanos(),
            500
        );
    }

    #[test]
    fn actions_partition_into_trades_and_book_updates() {
        let mut event = trade_event();
        assert!(event.is_trade());
        assert!(!event.is_book_update());

        event.action = BookAction::Modify;
        assert!(!event.is_trade());
        assert!(event.is_book_update());

        event.action = BookAction::Clear;
        assert!(!event.is_trade());
        assert!(!event.is_book_update());
    }

    #[test]
    fn storage_names_compose_from_identity() {
        let top = MarketByPriceTop {
            ts_recv: 0,
            ts_event: 0,
            ts_in_delta: 0,
            instrument_id: 42,
            asset_kind: AssetKind::Futures,
            symbol: "CLZ24".to_string(),
            publisher_id: 1,
            rtype: 1,
            sequence: 0,
            action: BookAction::Add,
            side: BookSide::Ask,
            price: 0,
            size: 0,
            flags: 0,
            vendor: DataSource::DataBento,
            channel_id: None,
            depth: None,
            bid_px_00: None,
            bid_sz_00: None,
            bid_ct_00: None,
            mid_px_00: None,
            ask_px_00: None,
            ask_sz_00: None,
            ask_ct_00: None,
        };
        assert_eq!(top.table_name(), "fut_clz24_mbp1_databento");
        assert_eq!(top.stream_name(), "rt:databento:CLZ24");
        assert_eq!(trade_event().table_name(), "clz24_mbo");
    }
}
