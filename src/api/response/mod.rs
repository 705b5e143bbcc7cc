pub mod login;
pub mod monitor_detail;

use crate::model::Unavailable;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `null` the same as a missing key. Upstream payloads send `null`
/// for fields they have no value for.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/* Envelope shared by every portal response */
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalResponse<T> {
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub code: Value,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> PortalResponse<T> {
    /// Portal errors arrive as HTTP 200 with `hasError` set, so a missing
    /// `data` object is treated the same way.
    pub fn into_data(self) -> Result<T, Unavailable> {
        match (self.has_error, self.data) {
            (false, Some(data)) => Ok(data),
            _ => Err(Unavailable::Rejected {
                code: match self.code {
                    Value::String(s) => s,
                    other => other.to_string(),
                },
                message: self
                    .msg
                    .unwrap_or_else(|| "(no error message received)".to_string()),
            }),
        }
    }
}
