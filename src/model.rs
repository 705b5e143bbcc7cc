use crate::api::Error;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

type KWh = f64;
type KW = f64;

/// Session issued by the inverter portal on login. The portal expects the
/// whole session, JSON encoded, in the `token` header of later calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub timestamp: i64,
    pub token: String,
    pub client: String,
    pub version: String,
    pub language: String,
}

impl Session {
    pub fn header_value(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::FormatError(e.to_string()))
    }
}

/// Live readings of the first inverter of a station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InverterReading {
    pub name: String,
    pub capacity: KW,
    pub current_output: KW,
    pub day_output: KWh,
    pub month_output: KWh,
    pub total_output: KWh,
    pub read_time: String,
    pub boot_time: String,
}

/// Current conditions at the configured location, metric units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
    pub cloud_percent: i64,
    pub condition: String,
    pub description: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Why an upstream source produced no data for this request.
#[derive(Debug, Clone, PartialEq)]
pub enum Unavailable {
    /// Upstream answered with a status other than 200.
    Status(StatusCode),
    /// Upstream answered 200 but flagged the call as failed.
    Rejected { code: String, message: String },
    /// The named array in the upstream payload was empty or absent.
    Empty(&'static str),
    /// Login did not succeed so the call was not attempted.
    NotAuthenticated,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::Status(status) => write!(f, "upstream responded {}", status),
            Unavailable::Rejected { code, message } => {
                write!(f, "upstream rejected request (code {}): {}", code, message)
            }
            Unavailable::Empty(what) => write!(f, "no {} records returned", what),
            Unavailable::NotAuthenticated => write!(f, "not authenticated"),
        }
    }
}

/// Result of one upstream call that reached the remote API.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Fetched(T),
    Unavailable(Unavailable),
}

impl<T> Outcome<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Outcome::Fetched(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Fetched(v) => Outcome::Fetched(f(v)),
            Outcome::Unavailable(reason) => Outcome::Unavailable(reason),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Result<U, Unavailable>>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Fetched(v) => match f(v) {
                Ok(u) => Outcome::Fetched(u),
                Err(reason) => Outcome::Unavailable(reason),
            },
            Outcome::Unavailable(reason) => Outcome::Unavailable(reason),
        }
    }
}
