use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use serde_derive::{Deserialize, Serialize as SerdeSerialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoursError {
    #[error("invalid time zone '{0}', must be a valid IANA zone like 'America/New_York'")]
    InvalidTimeZone(String),
    #[error("invalid time of day '{0}', expected 'HH:MM:SS' (24-hour)")]
    InvalidTime(String),
    #[error("open and close lists differ in length: {opens} opens, {closes} closes")]
    MismatchedSegments { opens: usize, closes: usize },
    #[error("trading hours need at least one open/close segment")]
    NoSegments,
    #[error("invalid trading day {0}, expected 0 (Monday) to 6 (Sunday)")]
    InvalidWeekday(u8),
    #[error("trading days can contain at most 7 entries, got {0}")]
    TooManyWeekdays(usize),
    #[error("trading days need at least one weekday")]
    NoActiveWeekdays,
}

/// One contiguous open/close interval within a trading day. Times are local
/// wall-clock values in the owning schedule's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSegment {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl SessionSegment {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        SessionSegment { open, close }
    }
}

/// Raw, serde-facing form of a trading hours definition as it appears in
/// reference data files. Converts into the validated [`TradingHours`] via
/// `TryFrom`; all validation happens there.
#[derive(Debug, Clone, PartialEq, SerdeSerialize, Deserialize)]
pub struct TradingHoursConfig {
    pub time_zone: String,
    pub open_times_local: Vec<String>,
    pub close_times_local: Vec<String>,
    /// 0 = Monday .. 6 = Sunday, the weekdays on which a session opens.
    pub trading_days: Vec<u8>,
}

/// Validated trading hours for one instrument or venue.
///
/// A schedule is a time zone, one or more open/close segments per session and
/// the set of weekdays on which a session opens. A session is identified by
/// the local date it opens on; overnight segments spill into the following
/// calendar day without that day needing to be active.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "TradingHoursConfig")]
pub struct TradingHours {
    timezone: Tz,
    segments: Vec<SessionSegment>,
    active_days: [bool; 7],
    overnight: bool,
}

impl TradingHours {
    pub fn new(
        timezone: Tz,
        segments: Vec<SessionSegment>,
        opening_days: &[Weekday],
    ) -> Result<Self, HoursError> {
        if segments.is_empty() {
            return Err(HoursError::NoSegments);
        }
        if opening_days.is_empty() {
            return Err(HoursError::NoActiveWeekdays);
        }
        let mut active_days = [false; 7];
        for day in opening_days {
            active_days[day.num_days_from_monday() as usize] = true;
        }
        let first_open = segments[0].open;
        let overnight = segments.iter().any(|segment| segment.close < first_open);
        Ok(TradingHours {
            timezone,
            segments,
            active_days,
            overnight,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn segments(&self) -> &[SessionSegment] {
        &self.segments
    }

    /// True when any segment closes on the day after the session opens.
    pub fn is_overnight(&self) -> bool {
        self.overnight
    }

    pub fn is_active_day(&self, weekday: Weekday) -> bool {
        self.active_days[weekday.num_days_from_monday() as usize]
    }

    pub fn opening_days(&self) -> Vec<Weekday> {
        WEEKDAYS
            .iter()
            .copied()
            .filter(|day| self.is_active_day(*day))
            .collect()
    }

    /// The session date the instant belongs to, in the schedule's time zone.
    ///
    /// For overnight schedules an instant before the first open counts toward
    /// the previous day's session. The tentative date then walks backward to
    /// the most recent day on which a session opens, so Sunday evening of a
    /// Friday-opening market still resolves to Friday. Total for any instant.
    pub fn trading_session(&self, time: DateTime<Utc>) -> NaiveDate {
        let local = time.with_timezone(&self.timezone);
        let mut session = local.date_naive();
        if self.overnight && local.time() < self.segments[0].open {
            session -= Duration::days(1);
        }
        while !self.is_active_day(session.weekday()) {
            session -= Duration::days(1);
        }
        session
    }

    /// Whether any segment covers the instant. Boundary instants exactly at
    /// an open or close are closed.
    pub fn is_open(&self, time: DateTime<Utc>) -> bool {
        self.covering_close(time).is_some()
    }

    /// Seconds until the covering segment's close, `None` when closed.
    pub fn seconds_until_close(&self, time: DateTime<Utc>) -> Option<i64> {
        let local = time.with_timezone(&self.timezone).naive_local();
        self.covering_close(time)
            .map(|close| (close - local).num_seconds())
    }

    pub fn is_open_now(&self) -> bool {
        self.is_open(Utc::now())
    }

    pub fn trading_session_now(&self) -> NaiveDate {
        self.trading_session(Utc::now())
    }

    /// Local close of the segment covering the instant, if any. Segment dates
    /// derive from the session date: a segment time earlier than the first
    /// open lands on the day after the session opens. Comparisons stay in
    /// naive local time so queries are total across DST transitions.
    fn covering_close(&self, time: DateTime<Utc>) -> Option<NaiveDateTime> {
        let session = self.trading_session(time);
        let local = time.with_timezone(&self.timezone).naive_local();
        let first_open = self.segments[0].open;
        for segment in &self.segments {
            let open_date = if segment.open < first_open {
                session + Duration::days(1)
            } else {
                session
            };
            let close_date = if segment.close < first_open {
                session + Duration::days(1)
            } else {
                session
            };
            let open_full = NaiveDateTime::new(open_date, segment.open);
            let close_full = NaiveDateTime::new(close_date, segment.close);
            if open_full < local && local < close_full {
                return Some(close_full);
            }
        }
        None
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_from_index(day: u8) -> Result<Weekday, HoursError> {
    match day {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        other => Err(HoursError::InvalidWeekday(other)),
    }
}

fn parse_local_time(value: &str) -> Result<NaiveTime, HoursError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .map_err(|_| HoursError::InvalidTime(value.to_string()))
}

impl TryFrom<TradingHoursConfig> for TradingHours {
    type Error = HoursError;

    fn try_from(config: TradingHoursConfig) -> Result<Self, Self::Error> {
        let timezone: Tz = config
            .time_zone
            .parse()
            .map_err(|_| HoursError::InvalidTimeZone(config.time_zone.clone()))?;
        if config.open_times_local.len() != config.close_times_local.len() {
            return Err(HoursError::MismatchedSegments {
                opens: config.open_times_local.len(),
                closes: config.close_times_local.len(),
            });
        }
        if config.trading_days.len() > 7 {
            return Err(HoursError::TooManyWeekdays(config.trading_days.len()));
        }
        let mut segments = Vec::with_capacity(config.open_times_local.len());
        for (open, close) in config
            .open_times_local
            .iter()
            .zip(config.close_times_local.iter())
        {
            segments.push(SessionSegment::new(
                parse_local_time(open)?,
                parse_local_time(close)?,
            ));
        }
        let mut opening_days = Vec::with_capacity(config.trading_days.len());
        for day in &config.trading_days {
            opening_days.push(weekday_from_index(*day)?);
        }
        TradingHours::new(timezone, segments, &opening_days)
    }
}

impl From<&TradingHours> for TradingHoursConfig {
    fn from(hours: &TradingHours) -> Self {
        TradingHoursConfig {
            time_zone: hours.timezone.name().to_string(),
            open_times_local: hours
                .segments
                .iter()
                .map(|segment| segment.open.format("%H:%M:%S").to_string())
                .collect(),
            close_times_local: hours
                .segments
                .iter()
                .map(|segment| segment.close.format("%H:%M:%S").to_string())
                .collect(),
            trading_days: hours
                .opening_days()
                .iter()
                .map(|day| day.num_days_from_monday() as u8)
                .collect(),
        }
    }
}

impl Serialize for TradingHours {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TradingHoursConfig::from(self).serialize(serializer)
    }
}
