use crate::api::Error;
use crate::model::Outcome;
use prometheus::{Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    static ref UPSTREAM_REQUESTS: IntCounterVec = register_int_counter_vec!(
        opts!(
            "upstream_requests_total",
            "requests made to upstream APIs, by result",
        ),
        &["upstream", "outcome"],
    )
    .unwrap();
    static ref COMPOSED_RESPONSES: IntCounterVec = register_int_counter_vec!(
        opts!(
            "composed_responses_total",
            "responses served by /getinverterdata",
        ),
        &["result"],
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Login,
    Inverter,
    Weather,
}

impl Upstream {
    fn as_str(&self) -> &'static str {
        match self {
            Upstream::Login => "login",
            Upstream::Inverter => "inverter",
            Upstream::Weather => "weather",
        }
    }
}

pub fn record_upstream<T>(upstream: Upstream, result: &Result<Outcome<T>, Error>) {
    let outcome = match result {
        Ok(Outcome::Fetched(_)) => "fetched",
        Ok(Outcome::Unavailable(_)) => "unavailable",
        Err(_) => "error",
    };
    UPSTREAM_REQUESTS
        .with_label_values(&[upstream.as_str(), outcome])
        .inc();
}

pub fn record_composed<I, W>(inverter: &Outcome<I>, weather: &Outcome<W>) {
    let result = match (inverter.is_fetched(), weather.is_fetched()) {
        (true, true) => "complete",
        (false, false) => "failed",
        _ => "partial",
    };
    COMPOSED_RESPONSES.with_label_values(&[result]).inc();
}

/// Render the upstream and response counters in the Prometheus text format
/// served by `/metrics`.
pub fn read() -> Result<String, Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| Error::FormatError(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| Error::FormatError(e.to_string()))
}
