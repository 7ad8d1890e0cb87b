use crate::market_hours::{SessionSegment, TradingHours};
use crate::reference::enums::FuturesMonth;
use ahash::AHashMap;
use chrono::{NaiveTime, Weekday};
use lazy_static::lazy_static;

fn local_time(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).expect("valid wall clock time")
}

const SUN_TO_THU: [Weekday; 5] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
];

const MON_TO_FRI: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

lazy_static! {
    /// CME Globex: 17:00 to 16:00 next day Central, opening Sunday through
    /// Thursday.
    pub static ref CME_GLOBEX_HOURS: TradingHours = TradingHours::new(
        chrono_tz::America::Chicago,
        vec![SessionSegment::new(local_time(17, 0, 0), local_time(16, 0, 0))],
        &SUN_TO_THU,
    )
    .expect("valid CME Globex hours");

    /// CBOT grains: overnight 19:00-08:00 plus the 08:30-13:20 day segment,
    /// both Central, opening Sunday through Thursday.
    pub static ref CBOT_GRAINS_HOURS: TradingHours = TradingHours::new(
        chrono_tz::America::Chicago,
        vec![
            SessionSegment::new(local_time(19, 0, 0), local_time(8, 0, 0)),
            SessionSegment::new(local_time(8, 30, 0), local_time(13, 20, 0)),
        ],
        &SUN_TO_THU,
    )
    .expect("valid CBOT grains hours");

    /// COMEX metals and NYMEX energy: 18:00 to 17:00 next day Eastern,
    /// opening Sunday through Thursday.
    pub static ref NY_METALS_ENERGY_HOURS: TradingHours = TradingHours::new(
        chrono_tz::America::New_York,
        vec![SessionSegment::new(local_time(18, 0, 0), local_time(17, 0, 0))],
        &SUN_TO_THU,
    )
    .expect("valid NY metals/energy hours");

    /// US cash equity indices: 09:30-16:00 Eastern, Monday through Friday.
    pub static ref US_INDEX_HOURS: TradingHours = TradingHours::new(
        chrono_tz::America::New_York,
        vec![SessionSegment::new(local_time(9, 30, 0), local_time(16, 0, 0))],
        &MON_TO_FRI,
    )
    .expect("valid US index hours");
}

lazy_static! {
    static ref PRODUCT_HOURS: AHashMap<&'static str, &'static TradingHours> = {
        let mut m = AHashMap::new();

        // Equity index futures
        m.insert("ES", &*CME_GLOBEX_HOURS);  // E-mini S&P 500
        m.insert("NQ", &*CME_GLOBEX_HOURS);  // E-mini Nasdaq
        m.insert("RTY", &*CME_GLOBEX_HOURS); // E-mini Russell 2000
        m.insert("YM", &*CME_GLOBEX_HOURS);  // E-mini Dow

        // FX futures
        m.insert("6A", &*CME_GLOBEX_HOURS);  // Australian Dollar
        m.insert("6B", &*CME_GLOBEX_HOURS);  // British Pound
        m.insert("6E", &*CME_GLOBEX_HOURS);  // Euro FX
        m.insert("6J", &*CME_GLOBEX_HOURS);  // Japanese Yen

        // Rates
        m.insert("ZN", &*CME_GLOBEX_HOURS);  // 10-Year T-Note
        m.insert("ZB", &*CME_GLOBEX_HOURS);  // 30-Year T-Bond

        // Grains
        m.insert("ZC", &*CBOT_GRAINS_HOURS); // Corn
        m.insert("ZS", &*CBOT_GRAINS_HOURS); // Soybeans
        m.insert("ZW", &*CBOT_GRAINS_HOURS); // Wheat
        m.insert("ZL", &*CBOT_GRAINS_HOURS); // Soybean Oil
        m.insert("ZM", &*CBOT_GRAINS_HOURS); // Soybean Meal

        // Metals
        m.insert("GC", &*NY_METALS_ENERGY_HOURS); // Gold
        m.insert("SI", &*NY_METALS_ENERGY_HOURS); // Silver
        m.insert("HG", &*NY_METALS_ENERGY_HOURS); // Copper

        // Energy
        m.insert("CL", &*NY_METALS_ENERGY_HOURS); // WTI Crude
        m.insert("NG", &*NY_METALS_ENERGY_HOURS); // Natural Gas
        m.insert("HO", &*NY_METALS_ENERGY_HOURS); // Heating Oil
        m.insert("RB", &*NY_METALS_ENERGY_HOURS); // RBOB Gasoline

        m
    };
}

/// Trading hours for a futures product code, where the library carries a
/// builtin schedule.
pub fn product_trading_hours(product_code: &str) -> Option<&'static TradingHours> {
    PRODUCT_HOURS.get(product_code).copied()
}

/// Strips the month-year suffix from a contract code, e.g. "CLZ24" -> "CL".
pub fn product_code_of_contract(contract: &str) -> &str {
    if contract.len() < 4 {
        return contract;
    }
    &contract[..contract.len() - 3]
}

/// Builds a contract code from product, delivery month and year,
/// e.g. ("CL", December, 2024) -> "CLZ24".
pub fn contract_code(product_code: &str, month: FuturesMonth, year: i32) -> String {
    format!("{}{}{:02}", product_code, month.code(), year.rem_euclid(100))
}
