use crate::api::{self, Error};
use crate::compose::{compose, ComposedResponse};
use crate::metrics::{self, Upstream};
use crate::model::{Outcome, Unavailable};
use crate::settings::Settings;
use crate::weather;
use reqwest::Client;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};

/// Startup configuration and the shared upstream HTTP client, read by
/// every `/getinverterdata` request.
pub struct StateData {
    settings: Settings,
    client: Client,
}

/// Log in, read the inverter, read the weather and merge the results.
/// Each step waits for the previous one.
pub async fn fetch_and_compose(
    client: &Client,
    settings: &Settings,
) -> Result<ComposedResponse, Error> {
    let session = api::login(client, settings).await;
    metrics::record_upstream(Upstream::Login, &session);

    let inverter = match session? {
        Outcome::Fetched(session) => {
            let inverter = api::inverter_data(client, settings, &session).await;
            metrics::record_upstream(Upstream::Inverter, &inverter);
            inverter?
        }
        Outcome::Unavailable(reason) => {
            log::warn!("Login failed ({}), skipping inverter data", reason);
            Outcome::Unavailable(Unavailable::NotAuthenticated)
        }
    };

    let weather = weather::current_weather(client, settings).await;
    metrics::record_upstream(Upstream::Weather, &weather);
    let weather = weather?;

    metrics::record_composed(&inverter, &weather);
    compose(inverter, weather)
}

#[get("/getinverterdata")]
async fn inverter_data_route(state: &State<StateData>) -> Result<Json<ComposedResponse>, Error> {
    fetch_and_compose(&state.client, &state.settings)
        .await
        .map(Json)
}

#[get("/metrics")]
async fn metrics_route() -> Result<String, Error> {
    metrics::read()
}

pub fn build(settings: Settings) -> Result<Rocket<Build>, Error> {
    let client = reqwest::ClientBuilder::new()
        .build()
        .or(Err(Error::InternalError))?;

    let figment = rocket::Config::figment()
        .merge(("address", settings.server.address.to_owned()))
        .merge(("port", settings.server.port));

    let state = StateData { settings, client };

    Ok(rocket::custom(figment)
        .manage(state)
        .mount("/", routes![inverter_data_route, metrics_route]))
}
