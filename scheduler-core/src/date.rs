use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::{Error, Result};

/// Leap year occurs every 4 years
const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
const GREGORIAN_CYCLE: i32 = 400;

/// First day of any month
pub const MIN_DAY: i32 = 1;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;
/// How far ahead an event may be booked
pub const BOOKING_WINDOW_MONTHS: u32 = 6;

/// Separator of the `month/day/year` input format
pub const DATE_SEPARATOR: char = '/';

/// Calendar month, in declared (chronological) order.
///
/// Numbers outside `1..=12` parse to [`Month::NotAMonth`], which sorts after
/// December and never forms a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
    NotAMonth,
}

impl Month {
    /// All real months, January first.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Maps a 1-based month number to a month, or `NotAMonth` when out of range.
    pub fn from_number(number: i32) -> Self {
        number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or(Self::NotAMonth)
    }

    /// Declared position, used for ordering.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// 1-based month number (13 for `NotAMonth`).
    pub const fn number(self) -> u8 {
        self.ordinal() + 1
    }

    /// Maximum day count outside of leap-year February.
    pub const fn max_days(self) -> i32 {
        match self {
            Self::January
            | Self::March
            | Self::May
            | Self::July
            | Self::August
            | Self::October
            | Self::December => 31,
            Self::April | Self::June | Self::September | Self::November => 30,
            Self::February => 28,
            Self::NotAMonth => 0,
        }
    }
}

/// A `month/day/year` calendar date as typed by the user.
///
/// Construction never validates; call [`CalendarDate::is_valid`] before
/// relying on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: i32,
}

impl CalendarDate {
    /// Builds a date without validating it.
    pub fn new(year: i32, month: Month, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Parses a `month/day/year` token such as `09/06/2023`.
    ///
    /// Out-of-range months are kept as [`Month::NotAMonth`]; only tokens that
    /// are not three integers fail.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(text.to_string());
        let mut parts = text.split(DATE_SEPARATOR);
        let mut next_number = || -> Result<i32> {
            parts
                .next()
                .and_then(|part| part.trim().parse::<i32>().ok())
                .ok_or_else(invalid)
        };

        let month = next_number()?;
        let day = next_number()?;
        let year = next_number()?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(year, Month::from_number(month), day))
    }

    /// Four-digit year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, possibly `NotAMonth`.
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of the month as typed.
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Gregorian leap year rule.
    pub const fn is_leap_year(&self) -> bool {
        self.year % LEAP_YEAR_CYCLE == 0
            && (self.year % CENTURY_CYCLE != 0 || self.year % GREGORIAN_CYCLE == 0)
    }

    /// Last valid day of this date's month, honouring leap years.
    pub const fn days_in_month(&self) -> i32 {
        match self.month {
            Month::February if self.is_leap_year() => FEBRUARY_DAYS_LEAP,
            month => month.max_days(),
        }
    }

    /// Real month and a day within that month's length.
    pub const fn is_valid(&self) -> bool {
        !matches!(self.month, Month::NotAMonth)
            && self.day >= MIN_DAY
            && self.day <= self.days_in_month()
    }

    /// Strictly later than `reference`.
    pub fn is_after(&self, reference: &Self) -> bool {
        self > reference
    }

    /// Same day as `limit` or earlier.
    pub fn is_at_or_before(&self, limit: &Self) -> bool {
        self <= limit
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.ordinal().cmp(&other.month.ordinal()))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        // chrono months are 1..=12 and days 1..=31, both fit in i32
        Self::new(
            date.year(),
            Month::from_number(date.month() as i32),
            date.day() as i32,
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Event Date: {:02}/{:02}/{}]",
            self.month.number(),
            self.day,
            self.year
        )
    }
}

/// The dates an event may be booked on: strictly after `today` and no later
/// than `limit`.
///
/// Both bounds are fixed for the lifetime of a run. Build one with
/// [`BookingWindow::from_clock`] at startup, or pin it in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    today: CalendarDate,
    limit: CalendarDate,
}

impl BookingWindow {
    /// Window with explicit bounds.
    pub fn new(today: CalendarDate, limit: CalendarDate) -> Self {
        Self { today, limit }
    }

    /// Window starting at `today` and ending six calendar months later.
    ///
    /// The end day is clamped to the target month's length, so Aug 31 maps
    /// to the last day of February.
    pub fn starting(today: NaiveDate) -> Result<Self> {
        let limit = today
            .checked_add_months(Months::new(BOOKING_WINDOW_MONTHS))
            .ok_or_else(|| {
                Error::Config(format!("booking window overflows the calendar from {today}"))
            })?;
        Ok(Self::new(today.into(), limit.into()))
    }

    /// Window anchored at the host's local date.
    pub fn from_clock() -> Result<Self> {
        let today = Local::now().date_naive();
        tracing::debug!("booking window anchored at {}", today);
        Self::starting(today)
    }

    /// Window anchored at a `month/day/year` token.
    pub fn from_today_str(text: &str) -> Result<Self> {
        let today = CalendarDate::parse(text)?;
        let naive = u32::try_from(today.day())
            .ok()
            .and_then(|day| {
                NaiveDate::from_ymd_opt(today.year(), u32::from(today.month().number()), day)
            })
            .ok_or_else(|| Error::InvalidDate(text.to_string()))?;
        Self::starting(naive)
    }

    /// Reference date; bookings must be later than this.
    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    /// Last bookable date.
    pub const fn limit(&self) -> CalendarDate {
        self.limit
    }

    /// After `today` and at or before `limit`.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.is_after(&self.today) && date.is_at_or_before(&self.limit)
    }

    /// Validates a parsed event date against the calendar rules and this
    /// window. `raw` is echoed back in the error message.
    pub fn check(&self, date: &CalendarDate, raw: &str) -> Result<()> {
        if !date.is_valid() {
            return Err(Error::InvalidDate(raw.to_string()));
        }
        if !date.is_after(&self.today) {
            return Err(Error::PastDate(raw.to_string()));
        }
        if !date.is_at_or_before(&self.limit) {
            return Err(Error::BeyondBookingWindow(raw.to_string()));
        }
        Ok(())
    }
}
