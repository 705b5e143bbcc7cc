pub mod response;

use crate::api::error::{map_api_err, Error};
use crate::model::{Outcome, Unavailable, WeatherReading};
use crate::settings::Settings;
use http::StatusCode;
use reqwest::Client;
use response::CurrentWeather;

const UNITS: &str = "metric";

impl CurrentWeather {
    /// Uses the first reported condition; `None` when there is none.
    fn into_reading(self) -> Option<WeatherReading> {
        let main = self.main;
        let clouds = self.clouds;
        let sys = self.sys;

        self.weather
            .into_iter()
            .next()
            .map(|condition| WeatherReading {
                temperature: main.temp,
                cloud_percent: clouds.all,
                condition: condition.main,
                description: condition.description,
                sunrise: sys.sunrise,
                sunset: sys.sunset,
            })
    }
}

/// Current weather for the configured zip and country code.
pub async fn current_weather(
    client: &Client,
    settings: &Settings,
) -> Result<Outcome<WeatherReading>, Error> {
    let weather = &settings.weather;
    let zip = format!("{},{}", weather.zip_code, weather.country_code);

    let response = client
        .get(&weather.base_url)
        .query(&[
            ("zip", zip.as_str()),
            ("appid", weather.app_id.as_str()),
            ("units", UNITS),
        ])
        .send()
        .await
        .map_err(map_api_err)?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| Error::ApiError(format!("Error reading weather response: {}", e)))?;

    log::trace!("zip: {}, status: {}, response_text: {}", zip, status, response_text);

    if status != StatusCode::OK {
        return Ok(Outcome::Unavailable(Unavailable::Status(status)));
    }

    let current = serde_json::from_str::<CurrentWeather>(&response_text)
        .map_err(|e| Error::InvalidResponse(response_text.clone(), e.to_string()))?;
    log::debug!("Weather received for {}", current.name);

    Ok(current
        .into_reading()
        .map(Outcome::Fetched)
        .unwrap_or(Outcome::Unavailable(Unavailable::Empty("weather"))))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::test::{read_resource, settings_for};
    use mockito::{Matcher, Server};

    const PATH: &str = "/data/2.5/weather";

    fn query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("zip".into(), "10001,US".into()),
            Matcher::UrlEncoded("appid".into(), "owm-key".into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
        ])
    }

    #[test]
    fn current_weather_payload() {
        let current: CurrentWeather =
            serde_json::from_str(&read_resource("weather_current.json")).unwrap();
        assert_eq!("New York", current.name);

        let reading = current.into_reading().unwrap();
        assert_eq!(21.5, reading.temperature);
        assert_eq!(40, reading.cloud_percent);
        assert_eq!("Clear", reading.condition);
        assert_eq!("clear sky", reading.description);
        assert_eq!(1000, reading.sunrise);
        assert_eq!(2000, reading.sunset);
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let current: CurrentWeather =
            serde_json::from_str(&read_resource("weather_null_fields.json")).unwrap();
        assert_eq!("", current.name);

        let reading = current.into_reading().unwrap();
        assert_eq!("Clear", reading.condition);
        assert_eq!("", reading.description);
        assert_eq!(0, reading.cloud_percent);
        assert_eq!(21.5, reading.temperature);
        assert_eq!(2000, reading.sunset);
    }

    #[tokio::test]
    async fn sends_location_key_and_metric_units() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .match_query(query())
            .with_status(200)
            .with_body(read_resource("weather_current.json"))
            .create_async()
            .await;

        let outcome = current_weather(&Client::new(), &settings_for(&server))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(outcome.is_fetched());
    }

    #[tokio::test]
    async fn not_found_is_unavailable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PATH)
            .match_query(query())
            .with_status(404)
            .with_body(read_resource("weather_not_found.json"))
            .create_async()
            .await;

        let outcome = current_weather(&Client::new(), &settings_for(&server))
            .await
            .unwrap();

        assert_eq!(
            Outcome::Unavailable(Unavailable::Status(StatusCode::NOT_FOUND)),
            outcome
        );
    }

    #[tokio::test]
    async fn no_conditions_is_unavailable() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PATH)
            .match_query(query())
            .with_status(200)
            .with_body(read_resource("weather_no_conditions.json"))
            .create_async()
            .await;

        let outcome = current_weather(&Client::new(), &settings_for(&server))
            .await
            .unwrap();

        assert_eq!(Outcome::Unavailable(Unavailable::Empty("weather")), outcome);
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PATH)
            .match_query(query())
            .with_status(200)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let result = current_weather(&Client::new(), &settings_for(&server)).await;

        assert!(matches!(result, Err(Error::InvalidResponse(_, _))));
    }
}
