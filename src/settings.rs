use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config";
pub const CONFIG_PATH_VAR: &str = "SOLARWX_CONFIG";
const ENV_PREFIX: &str = "SOLARWX";

pub const INVERTER_API_URL: &str = "https://www.semsportal.com/api/";
pub const WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_PORT: i64 = 22222;

/// Token descriptor sent as the `token` header of the login call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginToken {
    pub version: String,
    pub client: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InverterApiSettings {
    pub base_url: String,
    pub login_url: String,
    pub inverter_url: String,
    pub login_token: LoginToken,
    pub account: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    pub base_url: String,
    pub zip_code: String,
    pub country_code: String,
    pub app_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

/// Everything a request needs. Read once at startup and shared read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub inverter_api: InverterApiSettings,
    pub station_id: String,
    pub weather: WeatherSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Rejects required values that are present but empty.
    fn validate(self) -> Result<Self, ConfigError> {
        let required = [
            ("inverter_api.account", &self.inverter_api.account),
            ("inverter_api.password", &self.inverter_api.password),
            ("station_id", &self.station_id),
            ("weather.zip_code", &self.weather.zip_code),
            ("weather.country_code", &self.weather.country_code),
            ("weather.app_id", &self.weather.app_id),
        ];

        let empty = required
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key.to_string());

        match empty {
            Some(key) => Err(ConfigError::Message(format!(
                "configuration value `{}` must not be empty",
                key
            ))),
            None => Ok(self),
        }
    }
}

/// Path of the configuration file, taken from `SOLARWX_CONFIG` when set.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Layer built-in defaults, the configuration file at `path` and `SOLARWX_*`
/// environment variables (nested keys separated by `__`).
pub fn read_settings(path: &str) -> Result<Settings, ConfigError> {
    let mut settings = Config::default();
    settings
        .set_default("inverter_api.base_url", INVERTER_API_URL)?
        .set_default("inverter_api.login_url", crate::api::endpoint::LOGIN)?
        .set_default("inverter_api.inverter_url", crate::api::endpoint::MONITOR_DETAIL)?
        .set_default("inverter_api.login_token.version", "v2.1.0")?
        .set_default("inverter_api.login_token.client", "ios")?
        .set_default("inverter_api.login_token.language", "en")?
        .set_default("weather.base_url", WEATHER_API_URL)?
        .set_default("server.address", "0.0.0.0")?
        .set_default("server.port", DEFAULT_PORT)?
        .merge(File::with_name(path))?
        .merge(Environment::with_prefix(ENV_PREFIX).separator("__"))?;

    settings.try_into::<Settings>()?.validate()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn resource_path(filename: &str) -> String {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push(format!("resources/test/{}", filename));
        d.to_string_lossy().into_owned()
    }

    #[test]
    fn reads_file_and_fills_defaults() {
        let settings = read_settings(&resource_path("config.json")).unwrap();

        assert_eq!("S1", settings.station_id);
        assert_eq!("user@example.com", settings.inverter_api.account);
        assert_eq!("secret", settings.inverter_api.password);
        assert_eq!(INVERTER_API_URL, settings.inverter_api.base_url);
        assert_eq!("v2/Common/CrossLogin", settings.inverter_api.login_url);
        assert_eq!("v2.1.0", settings.inverter_api.login_token.version);
        assert_eq!("10001", settings.weather.zip_code);
        assert_eq!("US", settings.weather.country_code);
        assert_eq!(WEATHER_API_URL, settings.weather.base_url);
        assert_eq!(22222, settings.server.port);
    }

    #[test]
    fn file_overrides_defaults() {
        let settings = read_settings(&resource_path("config_full.json")).unwrap();

        assert_eq!("http://localhost:9000/api/", settings.inverter_api.base_url);
        assert_eq!("android", settings.inverter_api.login_token.client);
        assert_eq!(8080, settings.server.port);
    }

    #[test]
    fn environment_overrides_file() {
        // Only keys that no other test asserts on; the environment is shared.
        std::env::set_var("SOLARWX_SERVER__ADDRESS", "10.1.2.3");
        std::env::set_var("SOLARWX_INVERTER_API__LOGIN_TOKEN__LANGUAGE", "cs");

        let settings = read_settings(&resource_path("config_full.json"));

        std::env::remove_var("SOLARWX_SERVER__ADDRESS");
        std::env::remove_var("SOLARWX_INVERTER_API__LOGIN_TOKEN__LANGUAGE");

        let settings = settings.unwrap();
        assert_eq!("10.1.2.3", settings.server.address);
        assert_eq!("cs", settings.inverter_api.login_token.language);
        assert_eq!("android", settings.inverter_api.login_token.client);
        assert_eq!(8080, settings.server.port);
    }

    #[test]
    fn config_path_comes_from_environment() {
        std::env::set_var(CONFIG_PATH_VAR, "/etc/solarweather/config.toml");
        let path = config_path();
        std::env::remove_var(CONFIG_PATH_VAR);

        assert_eq!("/etc/solarweather/config.toml", path);
        assert_eq!(DEFAULT_CONFIG_PATH, config_path());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_settings(&resource_path("does_not_exist.json")).is_err());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(read_settings(&resource_path("config_missing_station.json")).is_err());
    }

    #[test]
    fn empty_required_field_is_an_error() {
        match read_settings(&resource_path("config_empty_appid.json")) {
            Err(ConfigError::Message(msg)) => assert!(msg.contains("weather.app_id")),
            other => panic!("unexpected result: {:?}", other.map(|s| s.station_id)),
        }
    }
}
