use crate::api::response::null_as_default;
use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct Main {
    #[serde(default, deserialize_with = "null_as_default")]
    pub temp: f64,
}

#[derive(Deserialize, Default)]
pub struct Clouds {
    #[serde(default, deserialize_with = "null_as_default")]
    pub all: i64,
}

#[derive(Deserialize)]
pub struct Condition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub main: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Deserialize, Default)]
pub struct Sys {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sunrise: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sunset: i64,
}

/* GET /data/2.5/weather */
#[derive(Deserialize)]
pub struct CurrentWeather {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main: Main,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clouds: Clouds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weather: Vec<Condition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sys: Sys,
}
