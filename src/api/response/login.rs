use super::null_as_default;
use crate::model::Session;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Data {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: i64,
    pub token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
}

impl From<Data> for Session {
    fn from(data: Data) -> Self {
        Session {
            uid: data.uid,
            timestamp: data.timestamp,
            token: data.token,
            client: data.client,
            version: data.version,
            language: data.language,
        }
    }
}
