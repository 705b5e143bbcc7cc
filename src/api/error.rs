use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::fmt;
use std::io::Cursor;

/// Failures that abort a request. Upstream non-success responses are not
/// errors, they are reported as `model::Outcome::Unavailable`.
#[derive(Debug, Clone)]
pub enum Error {
    /// Upstream could not be reached or its body could not be read.
    ApiError(String),
    /// Upstream body was not the JSON we expected: (body, parser message).
    InvalidResponse(String, String),
    /// Neither the inverter nor the weather data could be fetched.
    NoUpstreamData { inverter: String, weather: String },
    FormatError(String),
    InternalError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ApiError(s) => write!(f, "upstream request failed: {}", s),
            Error::InvalidResponse(_, e) => write!(f, "invalid upstream response: {}", e),
            Error::NoUpstreamData { inverter, weather } => write!(
                f,
                "no upstream data available (inverter: {}; weather: {})",
                inverter, weather
            ),
            Error::FormatError(s) => write!(f, "unable to encode request: {}", s),
            Error::InternalError => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for Error {}

/// Map transport level failure to Error
pub(crate) fn map_api_err(error: reqwest::Error) -> Error {
    Error::ApiError(error.to_string())
}

impl Error {
    fn status(&self) -> Status {
        match self {
            Error::ApiError(_) | Error::InvalidResponse(_, _) | Error::NoUpstreamData { .. } => {
                Status::BadGateway
            }
            Error::FormatError(_) | Error::InternalError => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Error::InvalidResponse(body, _) = &self {
            log::debug!("Rejected upstream body: {}", body);
        }
        log::error!("{}", self);

        let body = serde_json::json!({ "error": self.to_string() }).to_string();
        Response::build()
            .status(self.status())
            .sized_body(body.len(), Cursor::new(body))
            .header(ContentType::JSON)
            .ok()
    }
}
