//! Schedule lookup by day.
//!
//! This module handles:
//! - Interpreting day arguments (`today`, `tomorrow`, weekdays, `YYYY-MM-DD`)
//! - Finding venues with an event starting on the target date
//! - Flagging results that rely on another year's data or fall outside Lent
//!
//! "Now" is always passed in; nothing here reads the clock.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::config::FRIDAY_CUTOFF_HOUR;
use crate::error_handling::ScheduleError;
use crate::models::{Event, Venue};

/// Day argument forms accepted by `schedule`, for error messages.
pub const ACCEPTED_DAY_FORMS: &str = "today, tomorrow, a weekday (friday, fri, ...), or YYYY-MM-DD";

/// A day the user asked about, before it is pinned to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayQuery {
    Today,
    Tomorrow,
    /// Nearest upcoming date with this weekday, never today.
    Weekday(Weekday),
    Date(NaiveDate),
    /// Upcoming Friday; today counts if it is Friday before the evening cutoff.
    UpcomingFryDay,
}

impl DayQuery {
    /// Parses an optional day argument; `None` means the upcoming Friday.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ScheduleError> {
        match arg.map(str::trim) {
            None | Some("") => Ok(DayQuery::UpcomingFryDay),
            Some(text) => text.parse(),
        }
    }

    /// Pins the query to a calendar date relative to `now`.
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDate {
        let today = now.date();
        match *self {
            DayQuery::Today => today,
            DayQuery::Tomorrow => today + Days::new(1),
            DayQuery::Date(date) => date,
            DayQuery::Weekday(weekday) => next_weekday(today, weekday),
            DayQuery::UpcomingFryDay => {
                if today.weekday() == Weekday::Fri && now.hour() < FRIDAY_CUTOFF_HOUR {
                    today
                } else {
                    next_weekday(today, Weekday::Fri)
                }
            }
        }
    }
}

impl FromStr for DayQuery {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        match text.to_ascii_lowercase().as_str() {
            "today" | "now" | "tonight" => return Ok(DayQuery::Today),
            "tomorrow" => return Ok(DayQuery::Tomorrow),
            _ => {}
        }
        if let Ok(weekday) = text.parse::<Weekday>() {
            return Ok(DayQuery::Weekday(weekday));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(DayQuery::Date)
            .map_err(|_| ScheduleError::UnrecognizedDay(text.to_string()))
    }
}

/// Nearest date after `from` falling on `weekday` (1 to 7 days ahead).
fn next_weekday(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = from.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let ahead = match (target + 7 - current) % 7 {
        0 => 7,
        n => n,
    };
    from + Days::new(u64::from(ahead))
}

/// Easter Sunday for a Gregorian year (anonymous Gregorian computus).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Ash Wednesday through Easter Sunday of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LentSeason {
    pub ash_wednesday: NaiveDate,
    pub easter: NaiveDate,
}

impl LentSeason {
    pub fn for_year(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        let ash_wednesday = easter.checked_sub_days(Days::new(46))?;
        Some(Self {
            ash_wednesday,
            easter,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.ash_wednesday..=self.easter).contains(&date)
    }
}

/// Latest year in which any venue has an event starting.
pub fn season_year(venues: &[Venue]) -> Option<i32> {
    venues
        .iter()
        .flat_map(|v| v.events.iter())
        .map(|e| e.start.year())
        .max()
}

/// Why schedule results may not reflect the current season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeasonNotice {
    /// The dataset has no events at all.
    NoEventData,
    /// The newest events are from a different year than the target date.
    DataFromOtherYear { data_year: i32, target_year: i32 },
    /// The target date is outside Lent of the data's year.
    OutsideLent { season: LentSeason },
}

impl fmt::Display for SeasonNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonNotice::NoEventData => write!(
                f,
                "The dataset has no scheduled events. Check venue websites for current schedules."
            ),
            SeasonNotice::DataFromOtherYear {
                data_year,
                target_year,
            } => write!(
                f,
                "Event data is from {data_year}, not {target_year}. Check venue websites for current schedules."
            ),
            SeasonNotice::OutsideLent { season } => write!(
                f,
                "This date is outside Lent ({} to {}). Check venue websites for current schedules.",
                season.ash_wednesday.format("%b %d"),
                season.easter.format("%b %d, %Y")
            ),
        }
    }
}

/// Staleness check for a target date against the dataset's season year.
pub fn season_notice(data_year: Option<i32>, target: NaiveDate) -> Option<SeasonNotice> {
    let Some(data_year) = data_year else {
        return Some(SeasonNotice::NoEventData);
    };
    if data_year != target.year() {
        return Some(SeasonNotice::DataFromOtherYear {
            data_year,
            target_year: target.year(),
        });
    }
    let season = LentSeason::for_year(data_year)?;
    (!season.contains(target)).then_some(SeasonNotice::OutsideLent { season })
}

/// A venue with its first event on the scheduled date.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledVenue<'a> {
    pub venue: &'a Venue,
    pub event: &'a Event,
}

/// Venues frying on one date.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule<'a> {
    pub date: NaiveDate,
    pub entries: Vec<ScheduledVenue<'a>>,
    pub notice: Option<SeasonNotice>,
}

/// Venues with an event starting on `date`, in dataset order.
pub fn venues_on(venues: &[Venue], date: NaiveDate) -> Vec<ScheduledVenue<'_>> {
    venues
        .iter()
        .filter_map(|venue| {
            venue
                .event_on(date)
                .map(|event| ScheduledVenue { venue, event })
        })
        .collect()
}

/// Resolves `query` against `now` and collects that day's schedule.
pub fn resolve_schedule(venues: &[Venue], query: DayQuery, now: NaiveDateTime) -> Schedule<'_> {
    let date = query.resolve(now);
    let notice = season_notice(season_year(venues), date);
    if let Some(notice) = &notice {
        log::debug!("Season notice for {}: {:?}", date, notice);
    }
    Schedule {
        date,
        entries: venues_on(venues, date),
        notice,
    }
}
