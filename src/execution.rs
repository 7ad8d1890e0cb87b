use crate::reference::enums::AssetKind;
use crate::{OrderId, Price, SymbolId, Volume};
use rkyv::{Archive, Deserialize as Deserialize_rkyv, Serialize as Serialize_rkyv};
use serde_derive::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum OrderSide {
    #[serde(rename = "BUY")]
    #[strum(serialize = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    #[strum(serialize = "SELL")]
    Sell,
}

impl OrderSide {
    pub fn short_code(&self) -> char {
        match self {
            OrderSide::Buy => 'B',
            OrderSide::Sell => 'S',
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum OrderType {
    #[serde(rename = "MARKET")]
    #[strum(serialize = "MARKET")]
    Market,
    #[serde(rename = "LIMIT")]
    #[strum(serialize = "LIMIT")]
    Limit,
}

impl OrderType {
    pub fn short_name(&self) -> &'static str {
        match self {
            OrderType::Market => "MKT",
            OrderType::Limit => "LMT",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum TimeInForce {
    #[serde(rename = "DAY")]
    #[strum(serialize = "DAY")]
    Day,
    /// Immediate or cancel.
    #[serde(rename = "IOC")]
    #[strum(serialize = "IOC")]
    Ioc,
    /// Fill or kill.
    #[serde(rename = "FOK")]
    #[strum(serialize = "FOK")]
    Fok,
}

/// Execution algorithm an order is worked with. Each venue adapter maps
/// these onto its own algo identifiers.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum ExecutionAlgo {
    /// Straight to the venue, no schedule.
    Direct,
    Twap { duration_minutes: u32 },
    Vwap { duration_minutes: u32 },
}

impl ExecutionAlgo {
    pub fn short_name(&self) -> &'static str {
        match self {
            ExecutionAlgo::Direct => "DMA",
            ExecutionAlgo::Twap { .. } => "TWAP",
            ExecutionAlgo::Vwap { .. } => "VWAP",
        }
    }

    /// Scheduled duration in minutes; direct orders have none.
    pub fn duration_minutes(&self) -> Option<u32> {
        match self {
            ExecutionAlgo::Direct => None,
            ExecutionAlgo::Twap { duration_minutes } => Some(*duration_minutes),
            ExecutionAlgo::Vwap { duration_minutes } => Some(*duration_minutes),
        }
    }
}

/// Passive order record as routed to an execution platform.
#[derive(Clone, Serialize, Deserialize, Serialize_rkyv, Deserialize_rkyv, Archive, PartialEq, Debug)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub struct Order {
    pub order_id: OrderId,
    pub symbol: SymbolId,
    pub side: OrderSide,
    pub quantity: Volume,
    pub order_type: OrderType,
    pub asset_kind: AssetKind,
    /// Limit price; `None` for market orders.
    pub price: Option<Price>,
    pub time_in_force: TimeInForce,
    pub exec_algo: ExecutionAlgo,
    pub strategy_id: String,
}
