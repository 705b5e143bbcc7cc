use crate::api::Error;
use crate::model::{InverterReading, Outcome, WeatherReading};
use serde::{Deserialize, Serialize};

/// Body of `GET /getinverterdata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComposedResponse {
    pub name: String,
    pub capacity: f64,
    #[serde(rename = "currentoutput")]
    pub current_output: f64,
    #[serde(rename = "dayoutput")]
    pub day_output: f64,
    #[serde(rename = "monthOutput")]
    pub month_output: f64,
    #[serde(rename = "totaloutput")]
    pub total_output: f64,
    #[serde(rename = "readtime")]
    pub read_time: String,
    #[serde(rename = "boottime")]
    pub boot_time: String,
    #[serde(rename = "currenttemp")]
    pub current_temp: f64,
    #[serde(rename = "cloudpercent")]
    pub cloud_percent: i64,
    pub weather: String,
    #[serde(rename = "weatherdesc")]
    pub weather_desc: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl ComposedResponse {
    pub fn from_readings(inverter: &InverterReading, weather: &WeatherReading) -> Self {
        ComposedResponse {
            name: inverter.name.to_owned(),
            capacity: inverter.capacity,
            current_output: inverter.current_output,
            day_output: inverter.day_output,
            month_output: inverter.month_output,
            total_output: inverter.total_output,
            read_time: inverter.read_time.to_owned(),
            boot_time: inverter.boot_time.to_owned(),
            current_temp: weather.temperature,
            cloud_percent: weather.cloud_percent,
            weather: weather.condition.to_owned(),
            weather_desc: weather.description.to_owned(),
            sunrise: weather.sunrise,
            sunset: weather.sunset,
        }
    }
}

/// Merge both sources. A single unavailable source leaves its fields zeroed;
/// when both are unavailable there is nothing to return.
pub fn compose(
    inverter: Outcome<InverterReading>,
    weather: Outcome<WeatherReading>,
) -> Result<ComposedResponse, Error> {
    match (inverter, weather) {
        (Outcome::Fetched(inverter), Outcome::Fetched(weather)) => {
            Ok(ComposedResponse::from_readings(&inverter, &weather))
        }
        (Outcome::Fetched(inverter), Outcome::Unavailable(reason)) => {
            log::warn!("Weather data unavailable ({}), returning zero values", reason);
            Ok(ComposedResponse::from_readings(
                &inverter,
                &WeatherReading::default(),
            ))
        }
        (Outcome::Unavailable(reason), Outcome::Fetched(weather)) => {
            log::warn!("Inverter data unavailable ({}), returning zero values", reason);
            Ok(ComposedResponse::from_readings(
                &InverterReading::default(),
                &weather,
            ))
        }
        (Outcome::Unavailable(inverter), Outcome::Unavailable(weather)) => {
            Err(Error::NoUpstreamData {
                inverter: inverter.to_string(),
                weather: weather.to_string(),
            })
        }
    }
}
