pub mod config;
pub mod execution;
pub mod market_data;
pub mod market_hours;
pub mod product_maps;
pub mod reference;

use rust_decimal::Decimal;

pub type Price = Decimal;
pub type Volume = Decimal;
pub type TimeStamp = i64;
pub type SymbolId = String;
pub type OrderId = String;
