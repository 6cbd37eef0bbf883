//! Month-name lookup table used by the schedule-by-month filter.
//!
//! The calendar index ("January" → 1 … "December" → 12) feeds directly
//! into the `strftime('%m', game_date)` comparison, so the mapping here
//! must stay exact.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Calendar index of the month, 1 through 12.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl FromStr for Month {
    type Err = StatsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "january" => Ok(Self::January),
            "february" => Ok(Self::February),
            "march" => Ok(Self::March),
            "april" => Ok(Self::April),
            "may" => Ok(Self::May),
            "june" => Ok(Self::June),
            "july" => Ok(Self::July),
            "august" => Ok(Self::August),
            "september" => Ok(Self::September),
            "october" => Ok(Self::October),
            "november" => Ok(Self::November),
            "december" => Ok(Self::December),
            _ => Err(StatsError::UnknownMonth {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests;
