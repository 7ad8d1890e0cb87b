pub mod enums;
pub mod futures;
pub mod instruments;

use crate::market_hours::TradingHours;
use chrono::{DateTime, NaiveDate, Utc};

/// Anything with trading hours. Instruments implement this by handing back
/// their (or their parent product's) [`TradingHours`]; session queries come
/// for free from the calendar.
pub trait MarketSchedule {
    fn trading_hours(&self) -> &TradingHours;

    fn is_open(&self, time: DateTime<Utc>) -> bool {
        self.trading_hours().is_open(time)
    }

    fn trading_session(&self, time: DateTime<Utc>) -> NaiveDate {
        self.trading_hours().trading_session(time)
    }

    fn is_open_now(&self) -> bool {
        self.trading_hours().is_open_now()
    }

    fn trading_session_now(&self) -> NaiveDate {
        self.trading_hours().trading_session_now()
    }
}
