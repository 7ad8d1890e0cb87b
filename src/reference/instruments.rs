use crate::market_data::enums::Venue;
use crate::market_hours::TradingHours;
use crate::reference::enums::AssetKind;
use crate::reference::futures::{FuturesContract, FuturesOption};
use crate::reference::MarketSchedule;
use crate::SymbolId;
use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

/// A bilateral forward on some deliverable, with its own venue and expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forward {
    pub instrument_id: SymbolId,
    pub venue: Venue,
    pub contract_size: u32,
    pub expiry: NaiveDate,
    pub hours: TradingHours,
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MarketSchedule for Forward {
    fn trading_hours(&self) -> &TradingHours {
        &self.hours
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub instrument_id: SymbolId,
    pub venue: Venue,
    pub hours: TradingHours,
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MarketSchedule for Index {
    fn trading_hours(&self) -> &TradingHours {
        &self.hours
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxSpot {
    pub instrument_id: SymbolId,
    pub hours: TradingHours,
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MarketSchedule for FxSpot {
    fn trading_hours(&self) -> &TradingHours {
        &self.hours
    }
}

/// Any tradeable instrument the library models. Every variant carries its
/// trading hours (directly or through its parent product), so session
/// queries work uniformly through [`MarketSchedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instrument {
    Futures(FuturesContract),
    FuturesOption(FuturesOption),
    Forward(Forward),
    Index(Index),
    FxSpot(FxSpot),
}

impl Instrument {
    pub fn instrument_id(&self) -> &str {
        match self {
            Instrument::Futures(contract) => &contract.instrument_id,
            Instrument::FuturesOption(option) => &option.instrument_id,
            Instrument::Forward(forward) => &forward.instrument_id,
            Instrument::Index(index) => &index.instrument_id,
            Instrument::FxSpot(fx) => &fx.instrument_id,
        }
    }

    pub fn asset_kind(&self) -> AssetKind {
        match self {
            Instrument::Futures(_) => AssetKind::Futures,
            Instrument::FuturesOption(_) => AssetKind::FuturesOption,
            Instrument::Forward(_) => AssetKind::Forward,
            Instrument::Index(_) => AssetKind::Index,
            Instrument::FxSpot(_) => AssetKind::Fx,
        }
    }

    /// FX spot has no venue; everything else resolves one, falling back to
    /// the parent product where the leaf leaves it unset.
    pub fn venue(&self) -> Option<Venue> {
        match self {
            Instrument::Futures(contract) => Some(contract.venue()),
            Instrument::FuturesOption(option) => Some(option.venue()),
            Instrument::Forward(forward) => Some(forward.venue),
            Instrument::Index(index) => Some(index.venue),
            Instrument::FxSpot(_) => None,
        }
    }
}

impl MarketSchedule for Instrument {
    fn trading_hours(&self) -> &TradingHours {
        match self {
            Instrument::Futures(contract) => contract.trading_hours(),
            Instrument::FuturesOption(option) => option.trading_hours(),
            Instrument::Forward(forward) => forward.trading_hours(),
            Instrument::Index(index) => index.trading_hours(),
            Instrument::FxSpot(fx) => fx.trading_hours(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_hours::SessionSegment;
    use chrono::{NaiveTime, TimeZone, Weekday};
    use chrono_tz::America::New_York;

    fn cash_hours() -> TradingHours {
        TradingHours::new(
            New_York,
            vec![SessionSegment::new(
                NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
                NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            )],
            &[
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        )
        .unwrap()
    }

    #[test]
    fn instrument_queries_dispatch_by_variant() {
        let index = Instrument::Index(Index {
            instrument_id: "SGX.STI".to_string(),
            venue: Venue::SGX,
            hours: cash_hours(),
            symbol: Some("STI".to_string()),
            description: None,
        });

        assert_eq!(index.asset_kind(), AssetKind::Index);
        assert_eq!(index.venue(), Some(Venue::SGX));
        assert_eq!(index.instrument_id(), "SGX.STI");

        let open = New_York
            .with_ymd_and_hms(2024, 1, 9, 10, 0, 0)
            .unwrap()
            .to_utc();
        assert!(index.is_open(open));
    }

    #[test]
    fn fx_spot_has_no_venue() {
        let fx = Instrument::FxSpot(FxSpot {
            instrument_id: "FX.EURUSD".to_string(),
            hours: cash_hours(),
            symbol: Some("EURUSD".to_string()),
            description: None,
        });
        assert_eq!(fx.venue(), None);
        assert!(fx.asset_kind().is_fx());
    }
}
