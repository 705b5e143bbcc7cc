use super::null_as_default;
use crate::model::InverterReading;
use serde::Deserialize;

/* Live electrical readings of one inverter */
#[derive(Deserialize, Default)]
pub struct Readings {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pac: f64,
}

#[derive(Deserialize)]
pub struct Inverter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub eday: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emonth: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub etotal: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub turnon_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub d: Readings,
}

#[derive(Deserialize)]
pub struct MonitorDetail {
    #[serde(default)]
    pub inverter: Option<Vec<Inverter>>,
}

impl From<Inverter> for InverterReading {
    fn from(inverter: Inverter) -> Self {
        InverterReading {
            name: inverter.name,
            capacity: inverter.capacity,
            current_output: inverter.d.pac,
            day_output: inverter.eday,
            month_output: inverter.emonth,
            total_output: inverter.etotal,
            read_time: inverter.time,
            boot_time: inverter.turnon_time,
        }
    }
}
