use rkyv::{Archive, Deserialize as Deserialize_rkyv, Serialize as Serialize_rkyv};
use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::Display;

#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum AssetKind {
    #[serde(rename = "fx")]
    #[strum(serialize = "fx")]
    Fx,
    #[serde(rename = "fut")]
    #[strum(serialize = "fut")]
    Futures,
    #[serde(rename = "fwd")]
    #[strum(serialize = "fwd")]
    Forward,
    #[serde(rename = "index")]
    #[strum(serialize = "index")]
    Index,
    #[serde(rename = "equity")]
    #[strum(serialize = "equity")]
    Equity,
    #[serde(rename = "equityoption")]
    #[strum(serialize = "equityoption")]
    EquityOption,
    #[serde(rename = "futoption")]
    #[strum(serialize = "futoption")]
    FuturesOption,
}

impl AssetKind {
    pub fn is_fx(&self) -> bool {
        matches!(self, AssetKind::Fx)
    }

    pub fn is_future(&self) -> bool {
        matches!(self, AssetKind::Futures)
    }

    pub fn is_equity(&self) -> bool {
        matches!(self, AssetKind::Equity)
    }

    pub fn is_option(&self) -> bool {
        matches!(self, AssetKind::EquityOption | AssetKind::FuturesOption)
    }
}

/// Call or put. The numeric value is the payoff sign used in pricing code.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn sign(&self) -> i32 {
        match self {
            OptionKind::Call => 1,
            OptionKind::Put => -1,
        }
    }

    pub fn code(&self) -> char {
        match self {
            OptionKind::Call => 'C',
            OptionKind::Put => 'P',
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" => Ok(OptionKind::Call),
            "P" => Ok(OptionKind::Put),
            other => Err(format!("invalid option kind '{}', expected 'C' or 'P'", other)),
        }
    }
}

/// Listed futures delivery months with their exchange month codes.
#[derive(Serialize, Deserialize, Clone, Serialize_rkyv, Deserialize_rkyv, Archive, PartialOrd, Eq, Ord, PartialEq, Copy, Debug, Display, Hash)]
#[archive(compare(PartialEq), check_bytes)]
#[archive_attr(derive(Debug))]
pub enum FuturesMonth {
    #[serde(rename = "Jan")]
    #[strum(serialize = "Jan")]
    January,
    #[serde(rename = "Feb")]
    #[strum(serialize = "Feb")]
    February,
    #[serde(rename = "Mar")]
    #[strum(serialize = "Mar")]
    March,
    #[serde(rename = "Apr")]
    #[strum(serialize = "Apr")]
    April,
    #[serde(rename = "May")]
    #[strum(serialize = "May")]
    May,
    #[serde(rename = "Jun")]
    #[strum(serialize = "Jun")]
    June,
    #[serde(rename = "Jul")]
    #[strum(serialize = "Jul")]
    July,
    #[serde(rename = "Aug")]
    #[strum(serialize = "Aug")]
    August,
    #[serde(rename = "Sep")]
    #[strum(serialize = "Sep")]
    September,
    #[serde(rename = "Oct")]
    #[strum(serialize = "Oct")]
    October,
    #[serde(rename = "Nov")]
    #[strum(serialize = "Nov")]
    November,
    #[serde(rename = "Dec")]
    #[strum(serialize = "Dec")]
    December,
}

impl FuturesMonth {
    pub fn code(&self) -> char {
        match self {
            FuturesMonth::January => 'F',
            FuturesMonth::February => 'G',
            FuturesMonth::March => 'H',
            FuturesMonth::April => 'J',
            FuturesMonth::May => 'K',
            FuturesMonth::June => 'M',
            FuturesMonth::July => 'N',
            FuturesMonth::August => 'Q',
            FuturesMonth::September => 'U',
            FuturesMonth::October => 'V',
            FuturesMonth::November => 'X',
            FuturesMonth::December => 'Z',
        }
    }

    pub fn from_month_number(month: u32) -> Option<FuturesMonth> {
        match month {
            1 => Some(FuturesMonth::January),
            2 => Some(FuturesMonth::February),
            3 => Some(FuturesMonth::March),
            4 => Some(FuturesMonth::April),
            5 => Some(FuturesMonth::May),
            6 => Some(FuturesMonth::June),
            7 => Some(FuturesMonth::July),
            8 => Some(FuturesMonth::August),
            9 => Some(FuturesMonth::September),
            10 => Some(FuturesMonth::October),
            11 => Some(FuturesMonth::November),
            12 => Some(FuturesMonth::December),
            _ => None,
        }
    }
}
