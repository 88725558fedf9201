use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, UtcOffset, Weekday};

use crate::{Error, Result};

/// Calendar periods at which the active log file is rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RolloverPeriod {
    /// Roll over on the first day of every month.
    Month,
    /// Roll over every Sunday at midnight.
    Week,
    /// Roll over at midnight.
    #[default]
    Day,
    /// Roll over at the top of every hour.
    Hour,
    /// Roll over at the start of every minute.
    Minute,
}

/// Where a period starts and ends, as seen from one reference time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Filename-safe timestamp identifying the period.
    pub stamp: String,
    /// First instant (UTC) at which the period is over.
    pub expires_at: OffsetDateTime,
}

impl RolloverPeriod {
    /// All supported periods, longest first.
    pub const ALL: [RolloverPeriod; 5] = [
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
            Self::Hour => "Hour",
            Self::Minute => "Minute",
        }
    }

    /// Compute the filename stamp and the expiry instant for the period
    /// containing `now_local`.
    ///
    /// The boundary is built on the local wall clock (so "midnight" means
    /// local midnight) using the offset carried by `now_local`, then
    /// converted to UTC for storage and comparison.
    ///
    /// A daylight-saving change before the boundary is not accounted for:
    /// the expiry may then fall an hour early or late. An early expiry only
    /// costs a re-initialization that lands on the same stamp.
    pub fn compute_boundary(&self, now_local: OffsetDateTime) -> Result<Boundary> {
        let stamp = self.stamp(now_local)?;
        let offset = now_local.offset();
        let date = now_local.date();

        let next = match self {
            Self::Month => {
                let (year, month) = match now_local.month() {
                    Month::December => (now_local.year() + 1, Month::January),
                    month => (now_local.year(), month.next()),
                };
                Date::from_calendar_date(year, month, 1)
                    .map_err(time::error::Error::from)?
                    .midnight()
                    .assume_offset(offset)
            }
            Self::Week => {
                let mut day = date;
                while day.weekday() != Weekday::Sunday {
                    day = day.next_day().ok_or_else(|| self.out_of_range(now_local))?;
                }
                let sunday = day.midnight().assume_offset(offset);
                // Sunday 00:00:00.000 itself stays "today"; any later Sunday
                // time belongs to the week ending next Sunday.
                if sunday < now_local {
                    sunday
                        .checked_add(Duration::WEEK)
                        .ok_or_else(|| self.out_of_range(now_local))?
                } else {
                    sunday
                }
            }
            Self::Day => date
                .next_day()
                .ok_or_else(|| self.out_of_range(now_local))?
                .midnight()
                .assume_offset(offset),
            Self::Hour => date
                .with_hms(now_local.hour(), 0, 0)
                .map_err(time::error::Error::from)?
                .checked_add(Duration::HOUR)
                .ok_or_else(|| self.out_of_range(now_local))?
                .assume_offset(offset),
            Self::Minute => date
                .with_hms(now_local.hour(), now_local.minute(), 0)
                .map_err(time::error::Error::from)?
                .checked_add(Duration::MINUTE)
                .ok_or_else(|| self.out_of_range(now_local))?
                .assume_offset(offset),
        };

        let expires_at = next
            .checked_to_offset(UtcOffset::UTC)
            .ok_or_else(|| self.out_of_range(now_local))?;

        Ok(Boundary { stamp, expires_at })
    }

    /// Filename-safe stamp for the period containing `now_local`.
    ///
    /// Stamps of one period all have the same length and sort lexically in
    /// chronological order.
    pub fn stamp(&self, now_local: OffsetDateTime) -> Result<String> {
        let formatted = match self {
            Self::Month => now_local.format(format_description!("[year]-[month]")),
            Self::Week => now_local.format(format_description!(
                "[year]-[month]-[day]-W[week_number repr:iso]"
            )),
            Self::Day => now_local.format(format_description!("[year]-[month]-[day]")),
            Self::Hour => now_local.format(format_description!("[year]-[month]-[day]T[hour]")),
            Self::Minute => {
                now_local.format(format_description!("[year]-[month]-[day]T[hour]-[minute]"))
            }
        };
        formatted.map_err(|e| Error::Time(e.into()))
    }

    fn out_of_range(&self, now_local: OffsetDateTime) -> Error {
        Error::Calendar(format!(
            "no {} boundary after {}",
            self.as_str().to_lowercase(),
            now_local
        ))
    }
}

impl fmt::Display for RolloverPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RolloverPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::Config(format!(
                    "unknown rollover period: {:?}, supported: Month/Week/Day/Hour/Minute",
                    s
                ))
            })
    }
}

impl From<RolloverPeriod> for String {
    fn from(period: RolloverPeriod) -> Self {
        period.as_str().to_string()
    }
}

impl Serialize for RolloverPeriod {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RolloverPeriod {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
