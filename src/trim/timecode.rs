// HH:MM:SS timecodes
// Value type for the timestamp trim variant

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimecodeError {
    #[error("Expected HH:MM:SS, got: {0}")]
    Malformed(String),

    #[error("Invalid numeric field: {0}")]
    InvalidField(#[from] std::num::ParseIntError),

    #[error("Minutes and seconds must be below 60")]
    FieldOutOfRange,
}

/// An `HH:MM:SS` position or duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timecode {
    /// Whole hours, unbounded
    pub hours: u32,

    /// Minutes within the hour [0, 59]
    pub minutes: u8,

    /// Seconds within the minute [0, 59]
    pub seconds: u8,
}

impl Timecode {
    /// Split a total number of seconds into hours, minutes, and seconds
    pub fn from_seconds(total: u32) -> Self {
        Timecode {
            hours: total / 3600,
            minutes: ((total / 60) % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Total number of seconds this timecode represents
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(hours), Some(minutes), Some(seconds), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TimecodeError::Malformed(s.to_string()));
        };

        let hours: u32 = hours.parse()?;
        let minutes: u8 = minutes.parse()?;
        let seconds: u8 = seconds.parse()?;
        if minutes > 59 || seconds > 59 {
            return Err(TimecodeError::FieldOutOfRange);
        }

        Ok(Timecode {
            hours,
            minutes,
            seconds,
        })
    }
}
