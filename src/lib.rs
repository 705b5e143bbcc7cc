#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

pub mod api;
pub mod compose;
pub mod metrics;
pub mod model;
pub mod server;
pub mod settings;
pub mod weather;

pub use api::Error;
