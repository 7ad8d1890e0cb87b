use chrono::Duration;
use rkyv::{Archive, Deserialize as Deserialize_rkyv, Serialize as Serialize_rkyv};
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

// Venues with reference or market data coverage.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, EnumString, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum Venue {
    LME,
    CME,
    ICE,
    GLOBAL,
    SGX,
    ONYX,
}

#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, EnumString, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum DataSource {
    #[serde(rename = "databento")]
    #[strum(serialize = "databento")]
    DataBento,
    #[serde(rename = "bbg")]
    #[strum(serialize = "bbg")]
    Bloomberg,
    #[serde(rename = "influx")]
    #[strum(serialize = "influx")]
    InfluxDb,
    #[serde(rename = "sparta")]
    #[strum(serialize = "sparta")]
    Sparta,
}

/// Bar or sampling frequency of a stored dataset.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, EnumString, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum Frequency {
    #[serde(rename = "raw")]
    #[strum(serialize = "raw")]
    Raw,
    #[serde(rename = "tick")]
    #[strum(serialize = "tick")]
    Tick,
    #[serde(rename = "1min")]
    #[strum(serialize = "1min")]
    Min1,
    #[serde(rename = "5min")]
    #[strum(serialize = "5min")]
    Min5,
    #[serde(rename = "15min")]
    #[strum(serialize = "15min")]
    Min15,
    #[serde(rename = "1hour")]
    #[strum(serialize = "1hour")]
    Hour1,
    #[serde(rename = "daily")]
    #[strum(serialize = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    #[strum(serialize = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    #[strum(serialize = "monthly")]
    Monthly,
}

impl Frequency {
    /// The bar width, where one is defined. Raw and tick data are event
    /// streams and monthly bars have no fixed width.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Frequency::Raw | Frequency::Tick | Frequency::Monthly => None,
            Frequency::Min1 => Some(Duration::minutes(1)),
            Frequency::Min5 => Some(Duration::minutes(5)),
            Frequency::Min15 => Some(Duration::minutes(15)),
            Frequency::Hour1 => Some(Duration::hours(1)),
            Frequency::Daily => Some(Duration::days(1)),
            Frequency::Weekly => Some(Duration::weeks(1)),
        }
    }
}

/// Record schemas a dataset can be stored under, following the common
/// market-by-order / market-by-price / aggregate split.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, EnumString, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum MarketDataSchema {
    #[serde(rename = "mbo")]
    #[strum(serialize = "mbo")]
    Mbo,
    #[serde(rename = "mbp_1")]
    #[strum(serialize = "mbp_1")]
    Mbp1,
    #[serde(rename = "mbp_10")]
    #[strum(serialize = "mbp_10")]
    Mbp10,
    #[serde(rename = "trades")]
    #[strum(serialize = "trades")]
    Trades,
    #[serde(rename = "ohlcv_1s")]
    #[strum(serialize = "ohlcv_1s")]
    Ohlcv1S,
    #[serde(rename = "ohlcv_1m")]
    #[strum(serialize = "ohlcv_1m")]
    Ohlcv1M,
    #[serde(rename = "ohlcv_1h")]
    #[strum(serialize = "ohlcv_1h")]
    Ohlcv1H,
    #[serde(rename = "ohlcv_1d")]
    #[strum(serialize = "ohlcv_1d")]
    Ohlcv1D,
}

impl MarketDataSchema {
    /// Schema value with underscores removed, used in table names.
    pub fn short_name(&self) -> String {
        self.to_string().replace('_', "")
    }
}

/// Event action in an order book feed.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum BookAction {
    #[serde(rename = "A")]
    Add,
    #[serde(rename = "C")]
    Cancel,
    #[serde(rename = "M")]
    Modify,
    #[serde(rename = "R")]
    Clear,
    #[serde(rename = "T")]
    Trade,
    #[serde(rename = "F")]
    Fill,
    #[serde(rename = "N")]
    None,
}

impl BookAction {
    pub fn code(&self) -> char {
        match self {
            BookAction::Add => 'A',
            BookAction::Cancel => 'C',
            BookAction::Modify => 'M',
            BookAction::Clear => 'R',
            BookAction::Trade => 'T',
            BookAction::Fill => 'F',
            BookAction::None => 'N',
        }
    }

    pub fn from_code(code: char) -> Result<BookAction, String> {
        match code {
            'A' => Ok(BookAction::Add),
            'C' => Ok(BookAction::Cancel),
            'M' => Ok(BookAction::Modify),
            'R' => Ok(BookAction::Clear),
            'T' => Ok(BookAction::Trade),
            'F' => Ok(BookAction::Fill),
            'N' => Ok(BookAction::None),
            other => Err(format!("unknown book action code '{}'", other)),
        }
    }
}

/// Side that initiated a book event. `None` where the feed does not specify
/// one, e.g. a record that was not a trade.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum BookSide {
    #[serde(rename = "B")]
    Bid,
    #[serde(rename = "A")]
    Ask,
    #[serde(rename = "N")]
    None,
}

impl BookSide {
    pub fn code(&self) -> char {
        match self {
            BookSide::Bid => 'B',
            BookSide::Ask => 'A',
            BookSide::None => 'N',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn schema_short_names_drop_underscores() {
        assert_eq!(MarketDataSchema::Mbp1.short_name(), "mbp1");
        assert_eq!(MarketDataSchema::Ohlcv1D.short_name(), "ohlcv1d");
        assert_eq!(MarketDataSchema::Trades.short_name(), "trades");
    }

    #[test]
    fn frequency_parses_storage_values() {
        assert_eq!(Frequency::from_str("1min").unwrap(), Frequency::Min1);
        assert_eq!(Frequency::from_str("daily").unwrap(), Frequency::Daily);
        assert!(Frequency::from_str("2min").is_err());
        assert_eq!(Frequency::Hour1.as_duration(), Some(Duration::hours(1)));
        assert_eq!(Frequency::Tick.as_duration(), None);
    }

    #[test]
    fn book_action_codes_round_trip() {
        for action in [
            BookAction::Add,
            BookAction::Cancel,
            BookAction::Modify,
            BookAction::Clear,
            BookAction::Trade,
            BookAction::Fill,
            BookAction::None,
        ] {
            assert_eq!(BookAction::from_code(action.code()).unwrap(), action);
        }
        assert!(BookAction::from_code('X').is_err());
    }

    #[test]
    fn data_source_display_matches_storage_values() {
        assert_eq!(DataSource::Bloomberg.to_string(), "bbg");
        assert_eq!(DataSource::from_str("databento").unwrap(), DataSource::DataBento);
    }
}
