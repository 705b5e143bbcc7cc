pub mod endpoint;
pub mod error;
pub mod response;

use crate::model::{InverterReading, Outcome, Session, Unavailable};
use crate::settings::Settings;
pub use error::Error;
use error::map_api_err;
use http::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::Client;
use response::login;
use response::monitor_detail::MonitorDetail;
use response::PortalResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;

use std::collections::HashMap;

const TOKEN_HEADER: &str = "token";

/// POST JSON `data` to `url`, authenticating with the `token` header.
/// Returns status and raw body; only transport failures are errors here.
async fn post<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    token: String,
    data: &B,
) -> Result<(StatusCode, String), Error> {
    let response = client
        .post(url)
        .header(ACCEPT, "application/json")
        .header(TOKEN_HEADER, token)
        .json(data)
        .send()
        .await
        .map_err(map_api_err)?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| Error::ApiError(format!("Error reading API response: {}", e)))?;

    log::trace!(
        "url: {}, status: {}, response_text: {}",
        url,
        status,
        response_text
    );

    Ok((status, response_text))
}

/// Decode portal response body. Non-200 status and portal-level failures are
/// soft (`Outcome::Unavailable`), undecodable bodies are hard errors.
fn decode<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<Outcome<T>, Error> {
    if status != StatusCode::OK {
        return Ok(Outcome::Unavailable(Unavailable::Status(status)));
    }

    let response = serde_json::from_str::<PortalResponse<T>>(&body)
        .map_err(|e| Error::InvalidResponse(body.clone(), e.to_string()))?;

    Ok(match response.into_data() {
        Ok(data) => Outcome::Fetched(data),
        Err(reason) => Outcome::Unavailable(reason),
    })
}

/// Log in to the inverter portal with the configured account.
pub async fn login(client: &Client, settings: &Settings) -> Result<Outcome<Session>, Error> {
    let api = &settings.inverter_api;
    let url = format!("{}{}", api.base_url, api.login_url);

    let token = serde_json::to_string(&api.login_token)
        .map_err(|e| Error::FormatError(e.to_string()))?;
    let request_body = HashMap::from([
        ("account", api.account.to_owned()),
        ("pwd", api.password.to_owned()),
    ]);

    let (status, body) = post(client, &url, token, &request_body).await?;
    decode::<login::Data>(status, body).map(|outcome| outcome.map(Session::from))
}

/// Read live data of the configured station and return its first inverter.
pub async fn inverter_data(
    client: &Client,
    settings: &Settings,
    session: &Session,
) -> Result<Outcome<InverterReading>, Error> {
    let api = &settings.inverter_api;
    let url = format!("{}{}", api.base_url, api.inverter_url);

    let request_body = HashMap::from([("powerStationId", settings.station_id.to_owned())]);

    let (status, body) = post(client, &url, session.header_value()?, &request_body).await?;
    decode::<MonitorDetail>(status, body).map(|outcome| {
        outcome.and_then(|detail| {
            detail
                .inverter
                .and_then(|inverters| inverters.into_iter().next())
                .map(InverterReading::from)
                .ok_or(Unavailable::Empty("inverter"))
        })
    })
}
