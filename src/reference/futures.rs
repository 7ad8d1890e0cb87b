use crate::market_hours::TradingHours;
use crate::reference::enums::{AssetKind, FuturesMonth, OptionKind};
use crate::reference::MarketSchedule;
use crate::market_data::enums::Venue;
use crate::{Price, SymbolId};
use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use std::sync::Arc;

/// Root definition of a listed futures product: the venue, contract terms and
/// trading hours shared by every contract on the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesProduct {
    pub instrument_id: SymbolId,
    pub venue: Venue,
    /// Number of listed terms out on the curve.
    pub listed_terms: u32,
    pub contract_size: u32,
    pub hours: TradingHours,
    pub contract_months: Vec<FuturesMonth>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl FuturesProduct {
    pub fn contract_month_codes(&self) -> Vec<char> {
        self.contract_months.iter().map(FuturesMonth::code).collect()
    }
}

impl MarketSchedule for FuturesProduct {
    fn trading_hours(&self) -> &TradingHours {
        &self.hours
    }
}

/// One contract on a product's curve. Session queries and the venue default
/// come from the product definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesContract {
    pub instrument_id: SymbolId,
    pub product: Arc<FuturesProduct>,
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub description: Option<String>,
}

impl FuturesContract {
    pub fn venue(&self) -> Venue {
        self.venue.unwrap_or(self.product.venue)
    }

    pub fn asset_kind(&self) -> AssetKind {
        AssetKind::Futures
    }
}

impl MarketSchedule for FuturesContract {
    fn trading_hours(&self) -> &TradingHours {
        &self.product.hours
    }
}

/// An option on a futures contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesOption {
    pub instrument_id: SymbolId,
    pub contract: Arc<FuturesContract>,
    pub option_kind: OptionKind,
    pub strike: Price,
    pub expiry: NaiveDate,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub description: Option<String>,
}

impl FuturesOption {
    pub fn venue(&self) -> Venue {
        self.venue.unwrap_or_else(|| self.contract.venue())
    }

    pub fn asset_kind(&self) -> AssetKind {
        AssetKind::FuturesOption
    }
}

impl MarketSchedule for FuturesOption {
    fn trading_hours(&self) -> &TradingHours {
        self.contract.trading_hours()
    }
}
