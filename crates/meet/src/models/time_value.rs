use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{MeetError, Result};

const MAX_PLAIN_SECONDS: u32 = 3600;
const MAX_MINUTES: u32 = 59;
const SECONDS_PER_MINUTE: u32 = 60;

/// A swim time as it appears on entry forms and judging sheets.
///
/// Recorded times are kept as exact decimal seconds. Blank input is a valid
/// "no time" and garbage is kept verbatim as `Invalid`; both sort after every
/// recorded time so that seeding and scoring never have to reject a swimmer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TimeValue {
    Seconds(Decimal),
    #[default]
    NoTime,
    Invalid(String),
}

impl TimeValue {
    /// Parses `SS[.ff]` or `MM:SS[.ff]`, with `.` or `,` as decimal separator.
    ///
    /// Never fails: `None` and blank text give `NoTime`, anything that is not
    /// one of the two accepted shapes gives `Invalid`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::NoTime,
            Some(text) => match parse_seconds(text) {
                Some(seconds) => Self::Seconds(seconds),
                None => Self::Invalid(text.to_string()),
            },
        }
    }

    pub fn from_text(raw: &str) -> Self {
        Self::parse(Some(raw))
    }

    /// Validation-facing parse: blank is accepted as "no time", malformed
    /// text is reported instead of being degraded.
    pub fn validate(raw: Option<&str>) -> Result<Option<Decimal>> {
        match Self::parse(raw) {
            Self::Seconds(seconds) => Ok(Some(seconds)),
            Self::NoTime => Ok(None),
            Self::Invalid(text) => Err(MeetError::MalformedTime(text)),
        }
    }

    pub fn seconds(&self) -> Option<Decimal> {
        match self {
            Self::Seconds(seconds) => Some(*seconds),
            Self::NoTime | Self::Invalid(_) => None,
        }
    }

    /// Ascending order on seconds; `NoTime` and `Invalid` tie with each other
    /// and come after every recorded time.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.seconds(), other.seconds()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Text written back into a sheet cell. Parsing it again yields an equal value:
    /// `M:SS.ff` when that form is exact, plain seconds otherwise.
    pub fn as_sheet_text(&self) -> String {
        match self {
            Self::Seconds(seconds) => {
                let clock = format_seconds(*seconds);
                if parse_seconds(&clock) == Some(*seconds) {
                    clock
                } else {
                    seconds.normalize().to_string()
                }
            }
            Self::NoTime => String::new(),
            Self::Invalid(text) => text.clone(),
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(seconds) => write!(f, "{}", format_seconds(*seconds)),
            Self::NoTime | Self::Invalid(_) => write!(f, "NT"),
        }
    }
}

impl From<String> for TimeValue {
    fn from(raw: String) -> Self {
        Self::from_text(&raw)
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.as_sheet_text()
    }
}

/// Formats seconds as `M:SS.ff`, rounded to hundredths.
pub fn format_seconds(seconds: Decimal) -> String {
    let sixty = Decimal::from(SECONDS_PER_MINUTE);
    let total = seconds.round_dp(2);
    let minutes = (total / sixty).trunc();
    let mut remainder = total - minutes * sixty;
    remainder.rescale(2);

    format!(
        "{}:{:0>5}",
        minutes.to_u64().unwrap_or_default(),
        remainder.to_string()
    )
}

fn parse_seconds(text: &str) -> Option<Decimal> {
    let normalized = text.replace(',', ".");

    match normalized.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes = parse_whole(minutes)?;
            let seconds = parse_clock_part(seconds)?;
            if minutes > MAX_MINUTES || seconds >= Decimal::from(SECONDS_PER_MINUTE) {
                return None;
            }
            Some(Decimal::from(minutes) * Decimal::from(SECONDS_PER_MINUTE) + seconds)
        }
        None => {
            let seconds = parse_clock_part(&normalized)?;
            if seconds.trunc() > Decimal::from(MAX_PLAIN_SECONDS) {
                return None;
            }
            Some(seconds)
        }
    }
}

fn parse_whole(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// `SS` or `SS.ff`, digits only on both sides of the separator.
fn parse_clock_part(text: &str) -> Option<Decimal> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    parse_whole(whole)?;
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    Decimal::from_str(text).ok()
}
