use rocket::{Build, Rocket};
use solarweather_rs::{server, settings};

#[rocket::launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let path = settings::config_path();
    let settings = settings::read_settings(&path).expect("Configuration error");
    log::info!(
        "Loaded configuration from `{}` for station {}",
        path,
        settings.station_id
    );

    server::build(settings).expect("Unable to build upstream HTTP client")
}
